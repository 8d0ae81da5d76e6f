//! Report endpoints: JSON, plain text and share link

use axum::{
    extract::{Path, State},
    response::Redirect,
    Json,
};
use uuid::Uuid;

use crate::{
    api::ApiJson,
    error::{AppError, AppResult},
    models::{report::FormatReportRequest, ReportContext, ReportResponse},
    services::report::format_report,
};

/// Format a report from a caller-supplied roster
#[utoipa::path(
    post,
    path = "/report",
    tag = "report",
    request_body = FormatReportRequest,
    responses(
        (status = 200, description = "Generated report", body = ReportResponse),
        (status = 400, description = "Malformed roster or repeated room", body = crate::error::ErrorResponse)
    )
)]
pub async fn format(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<FormatReportRequest>,
) -> Json<ReportResponse> {
    let context = ReportContext {
        date: request.date,
        attendant: request.attendant,
    };
    Json(state.services.report.build(&context, &request.rooms))
}

/// Report for a session
#[utoipa::path(
    get,
    path = "/sessions/{id}/report",
    tag = "report",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Generated report", body = ReportResponse),
        (status = 404, description = "Session not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_report(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ReportResponse>> {
    let session = state.services.sessions.get(id).await?;
    Ok(Json(state.services.report.build(&session.context, &session.rooms)))
}

/// Report for a session as plain text, for copying to the clipboard
#[utoipa::path(
    get,
    path = "/sessions/{id}/report/text",
    tag = "report",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Plain-text report", body = String, content_type = "text/plain"),
        (status = 404, description = "Session not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_report_text(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<String> {
    let session = state.services.sessions.get(id).await?;
    Ok(format_report(&session.context, &session.rooms))
}

/// Redirect to the messaging link carrying the report
#[utoipa::path(
    get,
    path = "/sessions/{id}/share",
    tag = "report",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 303, description = "Redirect to the share link"),
        (status = 404, description = "Session not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Attendant name is empty", body = crate::error::ErrorResponse)
    )
)]
pub async fn share(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Redirect> {
    let session = state.services.sessions.get(id).await?;
    let report = state.services.report.build(&session.context, &session.rooms);

    match report.share.url {
        Some(url) if report.share.enabled => {
            tracing::info!(session_id = %id, "Sharing report");
            Ok(Redirect::to(&url))
        }
        _ => Err(AppError::BusinessRule(
            "Enter the attendant name before sharing".to_string(),
        )),
    }
}
