use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Staff,
    Admin,
}

/// The identified caller. Authentication itself happens upstream; the
/// gateway forwards the verified identity as headers.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Staff and admins may move bookings through their lifecycle.
    pub fn can_manage_bookings(&self) -> bool {
        matches!(self.role, Role::Staff | Role::Admin)
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok())
            .ok_or_else(|| {
                AppError::Authentication("missing or invalid x-user-id header".to_string())
            })?;

        let role = match parts
            .headers
            .get("x-user-role")
            .and_then(|value| value.to_str().ok())
        {
            Some("customer") => Role::Customer,
            Some("staff") => Role::Staff,
            Some("admin") => Role::Admin,
            _ => {
                return Err(AppError::Authentication(
                    "missing or invalid x-user-role header".to_string(),
                ))
            }
        };

        Ok(Identity { user_id, role })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_staff_and_admins_manage_bookings() {
        let customer = Identity { user_id: Uuid::new_v4(), role: Role::Customer };
        let staff = Identity { user_id: Uuid::new_v4(), role: Role::Staff };
        let admin = Identity { user_id: Uuid::new_v4(), role: Role::Admin };

        assert!(!customer.can_manage_bookings());
        assert!(staff.can_manage_bookings());
        assert!(admin.can_manage_bookings());
        assert!(admin.is_admin());
        assert!(!staff.is_admin());
    }
}
