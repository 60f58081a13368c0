use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::db::error::DatabaseError;
use crate::db::models::{Booking, BookingStatus, NewBooking};

const BOOKING_COLUMNS: &str = "id, customer_id, staff_id, service_id, sub_category, date, \
     start_time, end_time, duration_minutes, price, status, notes, created_at, updated_at";

pub struct BookingRepository;

impl BookingRepository {
    /// Snapshot of confirmed bookings for one staff member on one date,
    /// in ascending start order.
    pub async fn find_confirmed_for_staff_date(
        pool: &PgPool,
        staff_id: Uuid,
        date: Date,
    ) -> Result<Vec<Booking>, DatabaseError> {
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings \
             WHERE staff_id = $1 AND date = $2 AND status = 'confirmed' \
             ORDER BY start_time"
        );
        let bookings = sqlx::query_as::<_, Booking>(&sql)
            .bind(staff_id)
            .bind(date)
            .fetch_all(pool)
            .await?;
        Ok(bookings)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Booking>, DatabaseError> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1");
        let booking = sqlx::query_as::<_, Booking>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(booking)
    }

    /// Insert a new confirmed booking. The `bookings_no_overlap`
    /// exclusion constraint rejects a concurrent overlapping insert that
    /// slipped past the snapshot check; that failure maps to `Duplicate`.
    pub async fn insert(
        pool: &PgPool,
        customer_id: Uuid,
        new_booking: &NewBooking,
        end_time: &str,
    ) -> Result<Booking, DatabaseError> {
        let sql = format!(
            "INSERT INTO bookings \
             (customer_id, staff_id, service_id, sub_category, date, start_time, end_time, \
              duration_minutes, price, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {BOOKING_COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&sql)
            .bind(customer_id)
            .bind(new_booking.staff_id)
            .bind(new_booking.service_id)
            .bind(&new_booking.sub_category)
            .bind(new_booking.date)
            .bind(&new_booking.start_time)
            .bind(end_time)
            .bind(new_booking.duration_minutes)
            .bind(new_booking.price)
            .bind(&new_booking.notes)
            .fetch_one(pool)
            .await
            .map_err(DatabaseError::from_write_error)
    }

    pub async fn update_status(
        pool: &PgPool,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, DatabaseError> {
        let sql = format!(
            "UPDATE bookings SET status = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING {BOOKING_COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&sql)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await?
            .ok_or(DatabaseError::NotFound)
    }
}
