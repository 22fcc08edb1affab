use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/slots", get(handlers::slots::get_slots))
        .route("/slots/disable", post(handlers::slots::disable_slot))
        .route(
            "/bookings",
            get(handlers::bookings::list_bookings).post(handlers::bookings::create_booking),
        )
        .route(
            "/bookings/:id/status",
            patch(handlers::bookings::update_status),
        )
        .route("/contact", post(handlers::contact::submit_contact))
        .route("/corporate", post(handlers::corporate::submit_corporate))
        .fallback(handlers::not_found)
        .with_state(state)
}
