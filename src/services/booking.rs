use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, SessionMode};
use crate::services::slots;
use crate::store::DataStore;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mode: Option<SessionMode>,
    pub session_type: Option<String>,
    pub is_first_session: Option<bool>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

/// Validates the request, re-checks the slot against the current document
/// (the client's slot list may be stale), and appends the booking as
/// `pending`. The caller is expected to hold the store lock for the whole
/// read-check-write cycle so two requests cannot both claim one slot.
pub fn create(store: &dyn DataStore, req: BookingRequest) -> Result<Booking, AppError> {
    let (name, email, date, time) = match (
        required(req.name),
        required(req.email),
        required(req.date),
        required(req.time),
    ) {
        (Some(n), Some(e), Some(d), Some(t)) => (n, e, d, t),
        _ => {
            return Err(AppError::Validation(
                "name, email, date and time are required".to_string(),
            ))
        }
    };

    let mut data = store.load()?;
    if !slots::is_slot_available(&data, &date, &time) {
        return Err(AppError::SlotUnavailable);
    }

    let booking = Booking {
        id: Uuid::new_v4().to_string(),
        name,
        email,
        phone: req.phone.unwrap_or_default(),
        mode: req.mode.unwrap_or_default(),
        session_type: req.session_type.unwrap_or_else(|| "individual".to_string()),
        is_first_session: req.is_first_session.unwrap_or(false),
        date,
        time,
        notes: req.notes.unwrap_or_default(),
        status: BookingStatus::Pending,
        created_at: Utc::now(),
        updated_at: None,
    };

    data.bookings.push(booking.clone());
    store.save(&data)?;

    tracing::info!(id = %booking.id, date = %booking.date, time = %booking.time, "booking created");
    Ok(booking)
}

/// All bookings, in storage order, unfiltered.
pub fn list(store: &dyn DataStore) -> Result<Vec<Booking>, AppError> {
    Ok(store.load()?.bookings)
}

/// Sets the status of the booking `id`. Transitions are deliberately
/// unrestricted: the studio may re-confirm, re-reject, or reopen a booking at
/// any point, and rejecting frees the slot for a new request.
pub fn update_status(store: &dyn DataStore, id: &str, status: &str) -> Result<Booking, AppError> {
    let status = BookingStatus::parse(status)
        .ok_or_else(|| AppError::Validation("Invalid status".to_string()))?;

    let mut data = store.load()?;
    let booking = data
        .bookings
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or(AppError::NotFound("Booking"))?;

    booking.status = status;
    booking.updated_at = Some(Utc::now());
    let updated = booking.clone();
    store.save(&data)?;

    tracing::info!(id = %updated.id, status = updated.status.as_str(), "booking status updated");
    Ok(updated)
}
