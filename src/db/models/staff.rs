use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;

/// Legacy staff member stored as a user account. Working hours live in
/// the `staff_info` blob under "workingHours", in the per-day shape.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct StaffUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub staff_info: Option<serde_json::Value>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Standalone staff profile (no user account), uniform working hours.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct StaffProfile {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub service_ids: Vec<Uuid>,
    pub working_hours: serde_json::Value,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// A booking's staff reference resolves against either record shape.
/// Callers go through this one type instead of probing the two tables
/// themselves.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StaffRecord {
    Legacy(StaffUser),
    Profile(StaffProfile),
}

impl StaffRecord {
    pub fn id(&self) -> Uuid {
        match self {
            StaffRecord::Legacy(user) => user.id,
            StaffRecord::Profile(profile) => profile.id,
        }
    }

    #[allow(unused)]
    pub fn name(&self) -> &str {
        match self {
            StaffRecord::Legacy(user) => &user.name,
            StaffRecord::Profile(profile) => &profile.name,
        }
    }

    /// Raw working-hours document, whichever shape the record carries.
    pub fn working_hours(&self) -> Option<&serde_json::Value> {
        match self {
            StaffRecord::Legacy(user) => user.staff_info.as_ref()?.get("workingHours"),
            StaffRecord::Profile(profile) => Some(&profile.working_hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::OffsetDateTime;

    fn legacy_user(staff_info: Option<serde_json::Value>) -> StaffUser {
        StaffUser {
            id: Uuid::new_v4(),
            name: "Ayşe".to_string(),
            email: "ayse@example.com".to_string(),
            phone: None,
            staff_info,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn legacy_record_exposes_nested_working_hours() {
        let record = StaffRecord::Legacy(legacy_user(Some(json!({
            "services": [],
            "workingHours": {
                "monday": { "start": "09:00", "end": "17:00", "available": true }
            }
        }))));
        assert!(record.working_hours().is_some());

        assert!(StaffRecord::Legacy(legacy_user(None)).working_hours().is_none());
        assert!(StaffRecord::Legacy(legacy_user(Some(json!({ "services": [] }))))
            .working_hours()
            .is_none());
    }
}
