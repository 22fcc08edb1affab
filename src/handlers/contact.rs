use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::errors::AppError;
use crate::services::enquiry::{self, ContactRequest};
use crate::state::AppState;

// POST /contact
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    let contact = {
        let store = state.store.lock().unwrap();
        enquiry::submit_contact(&**store, body)?
    };

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Thank you for reaching out. We will contact you shortly.",
            "contact": contact,
        })),
    ))
}
