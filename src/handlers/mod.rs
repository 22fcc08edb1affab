pub mod bookings;
pub mod contact;
pub mod corporate;
pub mod health;
pub mod slots;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "Route not found" })),
    )
}
