//! Membership models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Explicit user/organization membership record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub id: RecordId,
    pub user: RecordId,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    pub organization: RecordId,
    #[serde(default)]
    pub organization_name: Option<String>,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

/// Request body for creating a membership
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipPayload {
    pub user: RecordId,
    pub organization: RecordId,
    pub role: String,
}

/// Optional narrowing for `GET /memberships/`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MembershipFilter {
    pub organization: Option<RecordId>,
    pub user: Option<RecordId>,
}

impl MembershipFilter {
    /// Render as query parameters in the order the backend documents them.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(org) = &self.organization {
            query.push(("organization", org.to_string()));
        }
        if let Some(user) = &self.user {
            query.push(("user", user.to_string()));
        }
        query
    }
}
