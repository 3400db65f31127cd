//! Organization models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Organization resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    pub id: RecordId,

    /// Organization name
    pub name: String,

    /// Postal address
    pub address: String,

    /// Number of users referencing this organization, as counted by the backend
    #[serde(default)]
    pub user_count: u64,

    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or replacing an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationPayload {
    pub name: String,
    pub address: String,
}

/// Response of `GET /organizations/stats/`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrganizationStats {
    pub total_organizations: u64,
}
