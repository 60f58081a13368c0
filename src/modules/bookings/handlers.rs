use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::{
    Booking, BookingRepository, BookingStatus, NewBooking, ServiceRepository, StaffRepository,
    UpdateBookingStatusPayload,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::Identity;
use crate::scheduling::interval::{parse_hhmm, TimeInterval, MINUTES_PER_DAY};
use crate::scheduling::schedule::WorkingHours;
use crate::scheduling::{conflict, slots};

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlotsQuery {
    pub staff_id: Option<String>,
    pub date: String,
    // Older clients send "duration".
    #[serde(alias = "duration")]
    pub duration_minutes: i32,
}

/// Bookable start times for (staff, date, duration). An unknown staff
/// reference or an unusable schedule yields an empty list, never an
/// error.
pub async fn available_slots(
    State(state): State<AppState>,
    Query(query): Query<AvailableSlotsQuery>,
) -> AppResult<Json<Vec<String>>> {
    if query.duration_minutes < 1 {
        return Err(AppError::Validation(
            "duration must be at least 1 minute".to_string(),
        ));
    }
    let date = Date::parse(&query.date, DATE_FORMAT)
        .map_err(|_| AppError::Validation("date must be formatted as YYYY-MM-DD".to_string()))?;
    if query.duration_minutes > MINUTES_PER_DAY as i32 {
        return Ok(Json(Vec::new()));
    }

    let Some(staff_id) = query
        .staff_id
        .as_deref()
        .and_then(|raw| Uuid::parse_str(raw).ok())
    else {
        return Ok(Json(Vec::new()));
    };
    let Some(staff) = StaffRepository::find_by_id(&state.db, staff_id).await? else {
        return Ok(Json(Vec::new()));
    };
    let Some(raw_hours) = staff.working_hours() else {
        return Ok(Json(Vec::new()));
    };
    let working_hours = match WorkingHours::from_value(raw_hours) {
        Ok(hours) => hours,
        Err(err) => {
            // Fail open to "no slots", never to "all slots".
            debug!(%staff_id, "ignoring staff schedule: {err}");
            return Ok(Json(Vec::new()));
        }
    };
    let Some(window) = working_hours.resolve(date) else {
        return Ok(Json(Vec::new()));
    };

    let snapshot =
        BookingRepository::find_confirmed_for_staff_date(&state.db, staff_id, date).await?;
    let busy = conflict::confirmed_intervals(&snapshot, staff_id, date);
    let result: Vec<String> = slots::available_slots(window, query.duration_minutes as u16, &busy).collect();

    Ok(Json(result))
}

/// Create a booking for the identified caller. Conflicts are re-checked
/// against a fresh snapshot at commit time; the database exclusion
/// constraint closes the remaining race and also surfaces as 409.
pub async fn create_booking(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<NewBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    payload
        .validate()
        .map_err(|err| AppError::Validation(err.to_string()))?;

    let staff = StaffRepository::find_by_id(&state.db, payload.staff_id)
        .await?
        .ok_or_else(|| AppError::NotFound("staff member not found".to_string()))?;

    let service = ServiceRepository::find_by_id(&state.db, payload.service_id)
        .await?
        .ok_or_else(|| AppError::NotFound("service not found".to_string()))?;
    if !service.has_sub_category(&payload.sub_category) {
        return Err(AppError::Validation(format!(
            "service has no sub-category named '{}'",
            payload.sub_category
        )));
    }

    let end_time = payload
        .end_time()
        .map_err(|err| AppError::Validation(err.to_string()))?;
    let start = parse_hhmm(&payload.start_time)
        .map_err(|err| AppError::Validation(err.to_string()))?;
    let proposed = TimeInterval::new(start, start + payload.duration_minutes as u16);

    let snapshot =
        BookingRepository::find_confirmed_for_staff_date(&state.db, staff.id(), payload.date)
            .await?;
    let busy = conflict::confirmed_intervals(&snapshot, staff.id(), payload.date);
    if conflict::has_conflict(proposed, &busy) {
        return Err(AppError::Conflict(
            "this time slot is no longer available".to_string(),
        ));
    }

    let booking = BookingRepository::insert(&state.db, identity.user_id, &payload, &end_time).await?;
    info!(booking_id = %booking.id, staff_id = %booking.staff_id, date = %booking.date, "booking created");

    Ok((StatusCode::CREATED, Json(booking)))
}

/// Cancel a booking. Only the booking's customer or an admin may do so;
/// cancelling twice is a no-op success, the slot is already free.
pub async fn cancel_booking(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Booking>> {
    let booking = BookingRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("booking not found".to_string()))?;

    if booking.customer_id != identity.user_id && !identity.is_admin() {
        return Err(AppError::Authorization(
            "not authorized to cancel this booking".to_string(),
        ));
    }

    if booking.status == BookingStatus::Cancelled {
        return Ok(Json(booking));
    }
    if booking.status.is_terminal() {
        return Err(AppError::Conflict(
            "a completed booking cannot be cancelled".to_string(),
        ));
    }

    let booking = BookingRepository::update_status(&state.db, id, BookingStatus::Cancelled).await?;
    info!(booking_id = %booking.id, "booking cancelled");

    Ok(Json(booking))
}

/// Staff/admin status transition. Requesting the current status is a
/// no-op success; terminal states never change again.
pub async fn update_booking_status(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookingStatusPayload>,
) -> AppResult<Json<Booking>> {
    if !identity.can_manage_bookings() {
        return Err(AppError::Authorization(
            "only staff or admins may update booking status".to_string(),
        ));
    }

    let booking = BookingRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("booking not found".to_string()))?;

    if booking.status == payload.status {
        return Ok(Json(booking));
    }
    if !booking.status.can_transition_to(payload.status) {
        return Err(AppError::Conflict(
            "booking status cannot change once terminal".to_string(),
        ));
    }

    let booking = BookingRepository::update_status(&state.db, id, payload.status).await?;
    info!(booking_id = %booking.id, status = ?booking.status, "booking status updated");

    Ok(Json(booking))
}
