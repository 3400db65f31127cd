//! Organization list view

use std::sync::Arc;

use log::{debug, warn};

use super::{Confirm, DeleteOutcome, DeletePrompt, LoadState, contains_ci};
use crate::client::OrganizationApi;
use crate::client::models::{Organization, RecordId};
use crate::error::Result;

const LOAD_FAILED: &str = "Failed to load organizations. Please try again.";
const DELETE_FAILED: &str = "Failed to delete organization. Please try again.";

/// Warning shown with every organization delete confirmation
pub const CASCADE_WARNING: &str = "This will also delete all associated users.";

/// True when `term` occurs in the organization's name or address, ignoring case.
pub fn matches(org: &Organization, term: &str) -> bool {
    contains_ci(&org.name, term) || contains_ci(&org.address, term)
}

/// Organizations as fetched, with local search and delete.
pub struct OrganizationListView<C: ?Sized> {
    client: Arc<C>,
    state: LoadState<Vec<Organization>>,
    banner: Option<String>,
}

impl<C: OrganizationApi + ?Sized> OrganizationListView<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            state: LoadState::Loading,
            banner: None,
        }
    }

    /// Construct and fetch in one step.
    pub async fn open(client: Arc<C>) -> Self {
        let mut view = Self::new(client);
        view.load().await;
        view
    }

    /// Fetch the organization list, replacing any previous snapshot.
    ///
    /// Failure replaces the content with an error banner; it is not propagated.
    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        self.banner = None;
        self.state = match self.client.list_organizations().await {
            Ok(orgs) => {
                debug!("Fetched {} organizations", orgs.len());
                LoadState::Ready(orgs)
            }
            Err(e) => {
                warn!("Error fetching organizations: {}", e);
                LoadState::Failed(LOAD_FAILED.to_string())
            }
        };
    }

    #[cfg(test)]
    pub fn state(&self) -> &LoadState<Vec<Organization>> {
        &self.state
    }

    /// The fetched snapshot in backend order; empty unless loaded.
    pub fn organizations(&self) -> &[Organization] {
        self.state.ready().map(Vec::as_slice).unwrap_or_default()
    }

    /// Error banner for the view, whether from loading or a failed mutation.
    pub fn banner(&self) -> Option<&str> {
        self.state.banner().or(self.banner.as_deref())
    }

    /// Snapshot entries whose name or address contains `term`.
    ///
    /// Never touches the snapshot; an empty term yields everything.
    pub fn search(&self, term: &str) -> Vec<&Organization> {
        self.organizations()
            .iter()
            .filter(|org| matches(org, term))
            .collect()
    }

    pub fn find(&self, id: &RecordId) -> Option<&Organization> {
        self.organizations().iter().find(|org| &org.id == id)
    }

    /// Build the confirmation shown before deleting `org`.
    pub fn delete_prompt(org: &Organization) -> DeletePrompt {
        let cascade = match org.user_count {
            0 => CASCADE_WARNING.to_string(),
            1 => format!("{} (1 user)", CASCADE_WARNING),
            n => format!("{} ({} users)", CASCADE_WARNING, n),
        };
        DeletePrompt {
            subject: format!("organization \"{}\"", org.name),
            message: "Are you sure you want to delete this organization?".to_string(),
            cascade: Some(cascade),
        }
    }

    /// Delete an organization after operator confirmation.
    ///
    /// Dependent users are removed by the backend as part of the same
    /// operation; they are never deleted from here. On success the record is
    /// spliced out of the snapshot without a re-fetch.
    pub async fn delete(
        &mut self,
        id: &RecordId,
        confirm: &impl Confirm,
    ) -> Result<DeleteOutcome<Organization>> {
        let Some(org) = self.find(id).cloned() else {
            let message = format!("Organization {} is not in the current list.", id);
            self.banner = Some(message.clone());
            return Ok(DeleteOutcome::Failed(message));
        };

        if !confirm.confirm(&Self::delete_prompt(&org))? {
            debug!("Delete of organization {} cancelled", id);
            return Ok(DeleteOutcome::Cancelled);
        }

        match self.client.delete_organization(id).await {
            Ok(()) => {
                if let LoadState::Ready(orgs) = &mut self.state {
                    orgs.retain(|o| &o.id != id);
                }
                self.banner = None;
                debug!("Organization {} deleted and removed from snapshot", id);
                Ok(DeleteOutcome::Spliced(org))
            }
            Err(e) => {
                warn!("Error deleting organization {}: {}", id, e);
                self.banner = Some(DELETE_FAILED.to_string());
                Ok(DeleteOutcome::Failed(DELETE_FAILED.to_string()))
            }
        }
    }
}
