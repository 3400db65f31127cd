//! Membership display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Membership;
use crate::output::formatters::{format_date_local, or_empty};

/// Membership display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MembershipDisplay {
    #[tabled(rename = "MEMBERSHIP ID")]
    pub id: String,

    #[tabled(rename = "USER")]
    pub user: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "ORGANIZATION")]
    pub organization: String,

    #[tabled(rename = "ROLE")]
    pub role: String,

    #[tabled(rename = "JOINED")]
    pub joined: String,
}

impl From<&Membership> for MembershipDisplay {
    fn from(m: &Membership) -> Self {
        // Fall back to the raw ID when the backend did not expand the name
        let user = m.user_name.clone().unwrap_or_else(|| m.user.to_string());
        let organization = m
            .organization_name
            .clone()
            .unwrap_or_else(|| m.organization.to_string());

        Self {
            id: m.id.to_string(),
            user,
            email: or_empty(m.user_email.as_deref()),
            organization,
            role: m.role.clone(),
            joined: format_date_local(&m.joined_at),
        }
    }
}
