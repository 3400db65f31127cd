//! Dashboard display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::RoleCount;
use crate::views::DashboardSummary;

/// One headline figure on the dashboard
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct StatDisplay {
    #[tabled(rename = "METRIC")]
    pub metric: String,

    #[tabled(rename = "VALUE")]
    pub value: u64,
}

/// One row of the users-by-role breakdown
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RoleCountDisplay {
    #[tabled(rename = "ROLE")]
    pub role: String,

    #[tabled(rename = "USERS")]
    pub count: u64,
}

impl From<&RoleCount> for RoleCountDisplay {
    fn from(rc: &RoleCount) -> Self {
        Self {
            role: rc.role.to_string(),
            count: rc.count,
        }
    }
}

/// Headline figures in display order
pub fn headline(summary: &DashboardSummary) -> Vec<StatDisplay> {
    vec![
        StatDisplay {
            metric: "Total Organizations".to_string(),
            value: summary.total_organizations,
        },
        StatDisplay {
            metric: "Total Users".to_string(),
            value: summary.total_users,
        },
        StatDisplay {
            metric: "User Roles".to_string(),
            value: summary.distinct_roles() as u64,
        },
    ]
}
