//! User models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Role of a user within the system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Employee,
    Intern,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Employee, Role::Intern];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
            Role::Intern => "intern",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == needle)
            .ok_or_else(|| format!("unknown role '{}'", s))
    }
}

/// User resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: RecordId,

    /// Display name
    pub name: String,

    /// Email address (unique on the backend)
    pub email: String,

    /// Role
    #[serde(default)]
    pub role: Role,

    /// Owning organization, if any
    #[serde(default)]
    pub organization: Option<RecordId>,

    /// Resolved organization name; only present when `organization` resolves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,

    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or replacing a user.
///
/// `organization` is always serialized; `null` clears the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub organization: Option<RecordId>,
}

/// One entry of the per-role breakdown in user stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCount {
    pub role: Role,
    pub count: u64,
}

/// Response of `GET /users/stats/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_users: u64,
    #[serde(default)]
    pub users_by_role: Vec<RoleCount>,
}
