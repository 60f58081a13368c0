use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{available_slots, cancel_booking, create_booking, update_booking_status};
use crate::app_state::AppState;

pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/available-slots", get(available_slots))
        .route("/", post(create_booking))
        .route("/{id}/cancel", patch(cancel_booking))
        .route("/{id}", patch(update_booking_status))
}
