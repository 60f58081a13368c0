use sqlx::PgPool;
use uuid::Uuid;

use crate::db::error::DatabaseError;
use crate::db::models::{StaffProfile, StaffRecord, StaffUser};

pub struct StaffRepository;

impl StaffRepository {
    /// Resolve a staff reference against both record shapes: legacy
    /// staff user accounts first, then standalone profiles. Inactive
    /// profiles do not resolve.
    pub async fn find_by_id(
        pool: &PgPool,
        staff_id: Uuid,
    ) -> Result<Option<StaffRecord>, DatabaseError> {
        let user = sqlx::query_as::<_, StaffUser>(
            "SELECT id, name, email, phone, staff_info, created_at, updated_at \
             FROM users WHERE id = $1 AND role = 'staff'",
        )
        .bind(staff_id)
        .fetch_optional(pool)
        .await?;

        if let Some(user) = user {
            return Ok(Some(StaffRecord::Legacy(user)));
        }

        let profile = sqlx::query_as::<_, StaffProfile>(
            "SELECT id, name, email, phone, profile_image, service_ids, working_hours, \
             is_active, created_at, updated_at \
             FROM staff_profiles WHERE id = $1 AND is_active = TRUE",
        )
        .bind(staff_id)
        .fetch_optional(pool)
        .await?;

        Ok(profile.map(StaffRecord::Profile))
    }
}
