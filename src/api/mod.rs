//! API handlers for the occupancy tracker REST endpoints

pub mod health;
pub mod openapi;
pub mod report;
pub mod rooms;
pub mod sessions;

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejections render as `ErrorResponse`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
