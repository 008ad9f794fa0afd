//! Business (tenant) entities and the membership role set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Roles a user can hold within a business.
///
/// The set is ordered for display purposes only; permissions are decided by
/// explicit per-action tables in the authorization policy, never by rank
/// comparison. Each business has exactly one `SuperOwner`, granted at
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessRole {
    Employee,
    AdminEmployee,
    Owner,
    SuperOwner,
}

impl BusinessRole {
    /// All roles, for exhaustive decision-matrix enumeration
    pub const ALL: [BusinessRole; 4] = [
        BusinessRole::Employee,
        BusinessRole::AdminEmployee,
        BusinessRole::Owner,
        BusinessRole::SuperOwner,
    ];

    /// Stable string form used in storage and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessRole::Employee => "employee",
            BusinessRole::AdminEmployee => "admin_employee",
            BusinessRole::Owner => "owner",
            BusinessRole::SuperOwner => "super_owner",
        }
    }
}

impl std::fmt::Display for BusinessRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BusinessRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(BusinessRole::Employee),
            "admin_employee" => Ok(BusinessRole::AdminEmployee),
            "owner" => Ok(BusinessRole::Owner),
            "super_owner" => Ok(BusinessRole::SuperOwner),
            _ => Err(format!("Unknown business role: {}", s)),
        }
    }
}

/// A business (tenant): an isolated organizational unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    /// Unique identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Street address
    pub address: String,

    /// Contact phone number
    pub phone: String,

    /// Contact email address
    pub email: String,

    /// Timestamp when the business was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the business was last updated
    pub updated_at: DateTime<Utc>,
}

impl Business {
    /// Creates a new business
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            address: address.into(),
            phone: phone.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A user's role within a business
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Unique identifier for the membership row
    pub id: Uuid,

    /// The member
    pub user_id: Uuid,

    /// The business
    pub business_id: Uuid,

    /// The member's role in the business
    pub role: BusinessRole,
}

impl Membership {
    /// Creates a new membership row
    pub fn new(user_id: Uuid, business_id: Uuid, role: BusinessRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            business_id,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_storage_form() {
        for role in BusinessRole::ALL {
            let parsed: BusinessRole = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!("manager".parse::<BusinessRole>().is_err());
    }

    #[test]
    fn test_new_business_timestamps() {
        let business = Business::new("Acme", "Widgets", "1 Main St", "555-0100", "acme@x.com");
        assert_eq!(business.created_at, business.updated_at);
    }

    #[test]
    fn test_membership_creation() {
        let user_id = Uuid::new_v4();
        let business_id = Uuid::new_v4();
        let membership = Membership::new(user_id, business_id, BusinessRole::SuperOwner);
        assert_eq!(membership.user_id, user_id);
        assert_eq!(membership.business_id, business_id);
        assert_eq!(membership.role, BusinessRole::SuperOwner);
    }
}
