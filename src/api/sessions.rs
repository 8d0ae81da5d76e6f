//! Session endpoints: create, inspect and edit a roster

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    api::ApiJson,
    error::AppResult,
    models::{
        room::{ToggleExtra, UpdateRoom},
        session::{CreateSession, UpdateContext},
        ReportContext, RoomRecord, Session,
    },
};

/// Start a new session
#[utoipa::path(
    post,
    path = "/sessions",
    tag = "sessions",
    request_body = CreateSession,
    responses(
        (status = 201, description = "Session created", body = Session),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_session(
    State(state): State<crate::AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Session>)> {
    // An empty body means "all defaults"; anything else must parse
    let data = if body.iter().all(u8::is_ascii_whitespace) {
        CreateSession::default()
    } else {
        let Json(data) = Json::<CreateSession>::from_bytes(&body)?;
        data
    };
    let session = state.services.sessions.create(data).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// Get a session
#[utoipa::path(
    get,
    path = "/sessions/{id}",
    tag = "sessions",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session details", body = Session),
        (status = 404, description = "Session not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_session(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Session>> {
    let session = state.services.sessions.get(id).await?;
    Ok(Json(session))
}

/// Discard a session
#[utoipa::path(
    delete,
    path = "/sessions/{id}",
    tag = "sessions",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 404, description = "Session not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_session(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.sessions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Update report date and attendant
#[utoipa::path(
    put,
    path = "/sessions/{id}/context",
    tag = "sessions",
    params(("id" = Uuid, Path, description = "Session ID")),
    request_body = UpdateContext,
    responses(
        (status = 200, description = "Context updated", body = ReportContext),
        (status = 404, description = "Session not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_context(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    ApiJson(data): ApiJson<UpdateContext>,
) -> AppResult<Json<ReportContext>> {
    let context = state.services.sessions.update_context(id, data).await?;
    Ok(Json(context))
}

/// Update status and guest count of a room
#[utoipa::path(
    put,
    path = "/sessions/{id}/rooms/{room}",
    tag = "sessions",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("room" = String, Path, description = "Room number")
    ),
    request_body = UpdateRoom,
    responses(
        (status = 200, description = "Room updated", body = RoomRecord),
        (status = 400, description = "Invalid guest count", body = crate::error::ErrorResponse),
        (status = 404, description = "Session or room not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_room(
    State(state): State<crate::AppState>,
    Path((id, room)): Path<(Uuid, String)>,
    ApiJson(data): ApiJson<UpdateRoom>,
) -> AppResult<Json<RoomRecord>> {
    let record = state.services.sessions.update_room(id, &room, data).await?;
    Ok(Json(record))
}

/// Toggle an extra on a room
#[utoipa::path(
    post,
    path = "/sessions/{id}/rooms/{room}/extras",
    tag = "sessions",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("room" = String, Path, description = "Room number")
    ),
    request_body = ToggleExtra,
    responses(
        (status = 200, description = "Extra toggled", body = RoomRecord),
        (status = 404, description = "Session or room not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn toggle_extra(
    State(state): State<crate::AppState>,
    Path((id, room)): Path<(Uuid, String)>,
    ApiJson(data): ApiJson<ToggleExtra>,
) -> AppResult<Json<RoomRecord>> {
    let record = state.services.sessions.toggle_extra(id, &room, data).await?;
    Ok(Json(record))
}
