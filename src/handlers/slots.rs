use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::services::slots;
use crate::state::AppState;

// GET /slots?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let date = query.date.filter(|d| !d.is_empty()).ok_or_else(|| {
        AppError::Validation("date query param is required (YYYY-MM-DD)".to_string())
    })?;

    let slots = {
        let store = state.store.lock().unwrap();
        let data = store.load()?;
        slots::availability(&data, &date)
    };

    Ok(Json(serde_json::json!({ "date": date, "slots": slots })))
}

// POST /slots/disable
#[derive(Deserialize)]
pub struct DisableSlotRequest {
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

pub async fn disable_slot(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DisableSlotRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let (date, time) = match (
        body.date.filter(|v| !v.is_empty()),
        body.time.filter(|v| !v.is_empty()),
    ) {
        (Some(d), Some(t)) => (d, t),
        _ => return Err(AppError::Validation("date and time are required".to_string())),
    };

    let disabled_slots = {
        let store = state.store.lock().unwrap();
        let mut data = store.load()?;
        slots::set_slot_disabled(&mut data, &date, &time, body.disabled);
        store.save(&data)?;
        data.disabled_slots
    };

    Ok(Json(serde_json::json!({
        "message": "Slot updated",
        "disabledSlots": disabled_slots,
    })))
}
