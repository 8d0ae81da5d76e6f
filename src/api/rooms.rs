//! Room list endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::RoomStatus;

/// Rooms and selectable statuses
#[derive(Serialize, ToSchema)]
pub struct RoomsResponse {
    /// Room numbers in report order
    pub rooms: Vec<String>,
    /// Status codes offered by the selector
    pub statuses: Vec<RoomStatus>,
    /// Whether guest counts outside 1-10 are rejected
    pub strict_guests: bool,
}

/// List configured rooms
#[utoipa::path(
    get,
    path = "/rooms",
    tag = "rooms",
    responses(
        (status = 200, description = "Configured rooms", body = RoomsResponse)
    )
)]
pub async fn list_rooms(State(state): State<crate::AppState>) -> Json<RoomsResponse> {
    Json(RoomsResponse {
        rooms: state.services.sessions.rooms().to_vec(),
        statuses: RoomStatus::SELECTABLE.to_vec(),
        strict_guests: state.config.roster.strict_guests,
    })
}
