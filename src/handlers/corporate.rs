use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::errors::AppError;
use crate::services::enquiry::{self, CorporateRequest};
use crate::state::AppState;

// POST /corporate
pub async fn submit_corporate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CorporateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let corporate_request = {
        let store = state.store.lock().unwrap();
        enquiry::submit_corporate(&**store, body)?
    };

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Your corporate enquiry has been received. MindSettler will connect with you to design a suitable workshop or program.",
            "corporateRequest": corporate_request,
        })),
    ))
}
