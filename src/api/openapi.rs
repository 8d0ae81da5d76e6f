//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, report, rooms, sessions};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Occupancy Tracker API",
        version = "1.0.0",
        description = "Housekeeping room roster and morning occupancy report"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Rooms
        rooms::list_rooms,
        // Sessions
        sessions::create_session,
        sessions::get_session,
        sessions::delete_session,
        sessions::update_context,
        sessions::update_room,
        sessions::toggle_extra,
        // Report
        report::format,
        report::get_report,
        report::get_report_text,
        report::share,
    ),
    components(
        schemas(
            // Rooms
            rooms::RoomsResponse,
            crate::models::RoomStatus,
            crate::models::Extra,
            crate::models::RoomRecord,
            crate::models::room::UpdateRoom,
            crate::models::room::ToggleExtra,
            // Sessions
            crate::models::Session,
            crate::models::ReportContext,
            crate::models::session::CreateSession,
            crate::models::session::UpdateContext,
            // Report
            crate::models::ReportResponse,
            crate::models::ShareStatus,
            crate::models::report::FormatReportRequest,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rooms", description = "Configured rooms"),
        (name = "sessions", description = "Roster editing sessions"),
        (name = "report", description = "Report generation and sharing")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
