//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;
use crate::client::models::Organization;
use crate::output::formatters::format_date_local;

/// Longest address shown in a table cell
const ADDRESS_WIDTH: usize = 40;

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    /// Organization ID
    #[tabled(rename = "ORG ID")]
    pub id: String,

    /// Organization name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Postal address
    #[tabled(rename = "ADDRESS")]
    pub address: String,

    /// Number of users belonging to the organization
    #[tabled(rename = "USERS")]
    pub users: u64,

    /// Creation date
    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id.to_string(),
            name: org.name.clone(),
            address: truncate_string(&org.address, ADDRESS_WIDTH),
            users: org.user_count,
            created: format_date_local(&org.created_at),
        }
    }
}
