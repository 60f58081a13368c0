use serde::{Deserialize, Serialize};
use sqlx::types::{Json, Uuid};
use time::OffsetDateTime;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub sub_categories: Json<Vec<SubCategory>>,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategory {
    pub name: String,
    pub duration: i32,
    pub price: f64,
}

impl Service {
    pub fn has_sub_category(&self, name: &str) -> bool {
        self.sub_categories.iter().any(|sc| sc.name == name)
    }
}
