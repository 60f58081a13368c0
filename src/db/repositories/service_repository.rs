use sqlx::PgPool;
use uuid::Uuid;

use crate::db::error::DatabaseError;
use crate::db::models::Service;

pub struct ServiceRepository;

impl ServiceRepository {
    pub async fn find_by_id(
        pool: &PgPool,
        service_id: Uuid,
    ) -> Result<Option<Service>, DatabaseError> {
        let service = sqlx::query_as::<_, Service>(
            "SELECT id, name, description, category, sub_categories, is_active, \
             created_at, updated_at \
             FROM services WHERE id = $1 AND is_active = TRUE",
        )
        .bind(service_id)
        .fetch_optional(pool)
        .await?;
        Ok(service)
    }
}
