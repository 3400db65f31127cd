//! User display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::User;
use crate::output::formatters::{format_date_local, or_empty};

/// User display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    /// User ID
    #[tabled(rename = "USER ID")]
    pub id: String,

    /// Display name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Email address
    #[tabled(rename = "EMAIL")]
    pub email: String,

    /// Role
    #[tabled(rename = "ROLE")]
    pub role: String,

    /// Resolved organization name, or a placeholder
    #[tabled(rename = "ORGANIZATION")]
    pub organization: String,

    /// Creation date
    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<&User> for UserDisplay {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.to_string(),
            organization: or_empty(user.organization_name.as_deref()),
            created: format_date_local(&user.created_at),
        }
    }
}
