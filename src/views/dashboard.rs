//! Dashboard aggregator

use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;

use super::LoadState;
use crate::client::models::RoleCount;
use crate::client::{OrganizationApi, UserApi};
use crate::error::Result;

const LOAD_FAILED: &str = "Failed to load dashboard statistics. Please try again.";

/// Aggregate counts shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_organizations: u64,
    pub total_users: u64,
    /// Roles as reported by the backend; roles without users may be absent
    pub users_by_role: Vec<RoleCount>,
}

impl DashboardSummary {
    /// Number of role types observed in the stats, not roles configured.
    pub fn distinct_roles(&self) -> usize {
        self.users_by_role.len()
    }
}

/// Fetch both stats endpoints concurrently and merge them.
///
/// Fails as a whole if either request fails.
pub async fn summary<C>(client: &C) -> Result<DashboardSummary>
where
    C: OrganizationApi + UserApi + ?Sized,
{
    let (orgs, users) = futures::try_join!(client.organization_stats(), client.user_stats())?;
    Ok(DashboardSummary {
        total_organizations: orgs.total_organizations,
        total_users: users.total_users,
        users_by_role: users.users_by_role,
    })
}

/// Dashboard view: either a full summary or an error banner, never half of one.
pub struct Dashboard<C: ?Sized> {
    client: Arc<C>,
    state: LoadState<DashboardSummary>,
}

impl<C: OrganizationApi + UserApi + ?Sized> Dashboard<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            state: LoadState::Loading,
        }
    }

    pub async fn open(client: Arc<C>) -> Self {
        let mut dashboard = Self::new(client);
        dashboard.load().await;
        dashboard
    }

    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        self.state = match summary(self.client.as_ref()).await {
            Ok(summary) => {
                debug!(
                    "Dashboard: {} organizations, {} users, {} roles",
                    summary.total_organizations,
                    summary.total_users,
                    summary.distinct_roles()
                );
                LoadState::Ready(summary)
            }
            Err(e) => {
                warn!("Error fetching stats: {}", e);
                LoadState::Failed(LOAD_FAILED.to_string())
            }
        };
    }

    #[cfg(test)]
    pub fn state(&self) -> &LoadState<DashboardSummary> {
        &self.state
    }

    pub fn summary(&self) -> Option<&DashboardSummary> {
        self.state.ready()
    }

    pub fn banner(&self) -> Option<&str> {
        self.state.banner()
    }
}
