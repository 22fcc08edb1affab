use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::services::booking::{self, BookingRequest};
use crate::state::AppState;

// POST /bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let booking = {
        let store = state.store.lock().unwrap();
        booking::create(&**store, body)?
    };

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Booking request received. You will be contacted for confirmation.",
            "booking": booking,
        })),
    ))
}

// GET /bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let bookings = {
        let store = state.store.lock().unwrap();
        booking::list(&**store)?
    };

    Ok(Json(serde_json::json!({ "bookings": bookings })))
}

// PATCH /bookings/:id/status
#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: Option<String>,
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<StatusRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let status = body.status.unwrap_or_default();

    let booking = {
        let store = state.store.lock().unwrap();
        booking::update_status(&**store, &id, &status)?
    };

    Ok(Json(serde_json::json!({
        "message": "Status updated",
        "booking": booking,
    })))
}
