//! Hotel occupancy tracker
//!
//! Housekeeping staff record per-room status and extras for a fixed set of
//! rooms; the roster is turned into a plain-text morning report that can be
//! copied or shared through a messaging link.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Rooms
        .route("/rooms", get(api::rooms::list_rooms))
        // Stateless report
        .route("/report", post(api::report::format))
        // Sessions
        .route("/sessions", post(api::sessions::create_session))
        .route(
            "/sessions/:id",
            get(api::sessions::get_session).delete(api::sessions::delete_session),
        )
        .route("/sessions/:id/context", put(api::sessions::update_context))
        .route("/sessions/:id/rooms/:room", put(api::sessions::update_room))
        .route("/sessions/:id/rooms/:room/extras", post(api::sessions::toggle_extra))
        // Session report
        .route("/sessions/:id/report", get(api::report::get_report))
        .route("/sessions/:id/report/text", get(api::report::get_report_text))
        .route("/sessions/:id/share", get(api::report::share))
        .with_state(state);

    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
