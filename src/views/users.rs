//! User list view and organization-name resolution

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use super::{Confirm, DeleteOutcome, DeletePrompt, LoadState, contains_ci};
use crate::client::models::{Organization, RecordId, User};
use crate::client::{OrganizationApi, UserApi};
use crate::error::Result;

const LOAD_FAILED: &str = "Failed to load users. Please try again.";
const DELETE_FAILED: &str = "Failed to delete user. Please try again.";

/// Attach organization display names to users.
///
/// A user whose reference does not resolve against `organizations` keeps its
/// place in the list with `organization_name` cleared; users are never dropped.
pub fn resolve(users: Vec<User>, organizations: &[Organization]) -> Vec<User> {
    let names: HashMap<&RecordId, &str> = organizations
        .iter()
        .map(|org| (&org.id, org.name.as_str()))
        .collect();

    users
        .into_iter()
        .map(|mut user| {
            user.organization_name = user
                .organization
                .as_ref()
                .and_then(|id| names.get(id))
                .map(|name| name.to_string());
            user
        })
        .collect()
}

/// True when `term` occurs in the user's name or email, ignoring case.
pub fn matches_text(user: &User, term: &str) -> bool {
    contains_ci(&user.name, term) || contains_ci(&user.email, term)
}

/// True when no organization filter is set, or the user references it exactly.
pub fn matches_organization(user: &User, organization: Option<&RecordId>) -> bool {
    organization.is_none_or(|id| user.organization.as_ref() == Some(id))
}

/// Users and the organizations they were resolved against
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSnapshot {
    pub users: Vec<User>,
    pub organizations: Vec<Organization>,
}

/// Users as fetched, with text and organization filters and delete.
pub struct UserListView<C: ?Sized> {
    client: Arc<C>,
    state: LoadState<UserSnapshot>,
    banner: Option<String>,
}

impl<C: OrganizationApi + UserApi + ?Sized> UserListView<C> {
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

    /// Fetch users and organizations concurrently and resolve names.
    ///
    /// Either fetch failing replaces the content with an error banner.
    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        self.banner = None;

        let fetched = futures::try_join!(
            self.client.list_users(),
            self.client.list_organizations()
        );

        self.state = match fetched {
            Ok((users, organizations)) => {
                debug!(
                    "Fetched {} users and {} organizations",
                    users.len(),
                    organizations.len()
                );
                let users = resolve(users, &organizations);
                LoadState::Ready(UserSnapshot {
                    users,
                    organizations,
                })
            }
            Err(e) => {
                warn!("Error fetching users: {}", e);
                LoadState::Failed(LOAD_FAILED.to_string())
            }
        };
    }

    /// Fetch only the users of one organization using the backend filter.
    pub async fn load_for_organization(&mut self, organization: &Organization) {
        self.state = LoadState::Loading;
        self.banner = None;
        self.state = match self.client.list_users_in(&organization.id).await {
            Ok(users) => {
                let organizations = vec![organization.clone()];
                LoadState::Ready(UserSnapshot {
                    users: resolve(users, &organizations),
                    organizations,
                })
            }
            Err(e) => {
                warn!("Error fetching users of organization {}: {}", organization.id, e);
                LoadState::Failed(LOAD_FAILED.to_string())
            }
        };
    }

    #[cfg(test)]
    pub fn state(&self) -> &LoadState<UserSnapshot> {
        &self.state
    }

    /// The fetched users in backend order; empty unless loaded.
    pub fn users(&self) -> &[User] {
        self.state
            .ready()
            .map(|s| s.users.as_slice())
            .unwrap_or_default()
    }

    /// Organizations available as filter choices.
    pub fn organizations(&self) -> &[Organization] {
        self.state
            .ready()
            .map(|s| s.organizations.as_slice())
            .unwrap_or_default()
    }

    pub fn banner(&self) -> Option<&str> {
        self.state.banner().or(self.banner.as_deref())
    }

    /// Users matching both the text term and the organization filter.
    pub fn filter(&self, term: &str, organization: Option<&RecordId>) -> Vec<&User> {
        self.users()
            .iter()
            .filter(|user| matches_text(user, term) && matches_organization(user, organization))
            .collect()
    }

    pub fn find(&self, id: &RecordId) -> Option<&User> {
        self.users().iter().find(|user| &user.id == id)
    }

    pub fn delete_prompt(user: &User) -> DeletePrompt {
        DeletePrompt {
            subject: format!("user \"{}\" <{}>", user.name, user.email),
            message: "Are you sure you want to delete this user?".to_string(),
            cascade: None,
        }
    }

    /// Delete a user after operator confirmation, splicing it out on success.
    pub async fn delete(
        &mut self,
        id: &RecordId,
        confirm: &impl Confirm,
    ) -> Result<DeleteOutcome<User>> {
        let Some(user) = self.find(id).cloned() else {
            let message = format!("User {} is not in the current list.", id);
            self.banner = Some(message.clone());
            return Ok(DeleteOutcome::Failed(message));
        };

        if !confirm.confirm(&Self::delete_prompt(&user))? {
            debug!("Delete of user {} cancelled", id);
            return Ok(DeleteOutcome::Cancelled);
        }

        match self.client.delete_user(id).await {
            Ok(()) => {
                if let LoadState::Ready(snapshot) = &mut self.state {
                    snapshot.users.retain(|u| &u.id != id);
                }
                self.banner = None;
                debug!("User {} deleted and removed from snapshot", id);
                Ok(DeleteOutcome::Spliced(user))
            }
            Err(e) => {
                warn!("Error deleting user {}: {}", id, e);
                self.banner = Some(DELETE_FAILED.to_string());
                Ok(DeleteOutcome::Failed(DELETE_FAILED.to_string()))
            }
        }
    }
}
