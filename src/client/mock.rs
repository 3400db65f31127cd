//! In-memory admin backend for testing
//!
//! Behaves like the real service where the views depend on it: newest
//! records first, backend-computed `user_count`, cascade delete of users,
//! unique emails, and stats that only list roles with at least one user.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Mutex;

use super::api::{MembershipApi, OrganizationApi, UserApi};
use super::models::{
    Membership, MembershipFilter, MembershipPayload, Organization, OrganizationPayload,
    OrganizationStats, RecordId, Role, RoleCount, User, UserPayload, UserStats,
};
use crate::error::{ApiError, FieldErrors, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockAdminClient::new();
/// let acme = mock.seed_organization("Acme", "1 Main St").await;
/// mock.seed_user("Ada", "ada@example.com", Role::Admin, Some(&acme.id)).await;
/// ```
#[derive(Default)]
pub struct MockAdminClient {
    state: Arc<Mutex<Store>>,
    /// One-shot failures keyed by API method name
    failures: Arc<Mutex<HashMap<&'static str, ApiError>>>,
    call_count: Arc<Mutex<CallCounts>>,
}

#[derive(Default)]
struct Store {
    organizations: Vec<Organization>,
    users: Vec<User>,
    memberships: Vec<Membership>,
    next_id: u64,
    /// Monotonic offset so seeded records get distinct, ordered timestamps
    tick: i64,
}

impl Store {
    fn next_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::from(self.next_id)
    }

    fn now(&mut self) -> chrono::DateTime<Utc> {
        self.tick += 1;
        Utc::now() + Duration::seconds(self.tick)
    }

    fn organization_view(&self, org: &Organization) -> Organization {
        let mut org = org.clone();
        org.user_count = self
            .users
            .iter()
            .filter(|u| u.organization.as_ref() == Some(&org.id))
            .count() as u64;
        org
    }

    fn user_view(&self, user: &User) -> User {
        let mut user = user.clone();
        user.organization_name = user.organization.as_ref().and_then(|id| {
            self.organizations
                .iter()
                .find(|o| &o.id == id)
                .map(|o| o.name.clone())
        });
        user
    }

    fn email_taken(&self, email: &str, except: Option<&RecordId>) -> bool {
        self.users
            .iter()
            .any(|u| u.email == email && Some(&u.id) != except)
    }

    fn check_organization(&self, organization: Option<&RecordId>) -> Result<()> {
        if let Some(id) = organization {
            if !self.organizations.iter().any(|o| &o.id == id) {
                return Err(ApiError::Validation(FieldErrors::single(
                    "organization",
                    &format!("Invalid pk \"{}\" - object does not exist.", id),
                ))
                .into());
            }
        }
        Ok(())
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_organizations: usize,
    pub get_organization: usize,
    pub organization_stats: usize,
    pub create_organization: usize,
    pub update_organization: usize,
    pub delete_organization: usize,
    pub list_users: usize,
    pub get_user: usize,
    pub user_stats: usize,
    pub create_user: usize,
    pub update_user: usize,
    pub delete_user: usize,
    pub memberships: usize,
}

impl CallCounts {
    /// Number of calls that mutate backend state.
    pub fn writes(&self) -> usize {
        self.create_organization
            + self.update_organization
            + self.delete_organization
            + self.create_user
            + self.update_user
            + self.delete_user
    }

    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.writes()
            + self.list_organizations
            + self.get_organization
            + self.organization_stats
            + self.list_users
            + self.get_user
            + self.user_stats
            + self.memberships
    }
}

impl MockAdminClient {
    /// Create a new mock client with an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure an error for the next call to `method`.
    /// The error is consumed after one use.
    pub async fn fail_next(&self, method: &'static str, error: ApiError) {
        self.failures.lock().await.insert(method, error);
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Insert an organization directly into the backend.
    pub async fn seed_organization(&self, name: &str, address: &str) -> Organization {
        let mut store = self.state.lock().await;
        let org = Organization {
            id: store.next_id(),
            name: name.to_string(),
            address: address.to_string(),
            user_count: 0,
            created_at: store.now(),
        };
        store.organizations.insert(0, org.clone());
        org
    }

    /// Insert a user directly into the backend, bypassing integrity checks.
    ///
    /// Passing an organization that does not exist leaves a dangling reference.
    pub async fn seed_user(
        &self,
        name: &str,
        email: &str,
        role: Role,
        organization: Option<&RecordId>,
    ) -> User {
        let mut store = self.state.lock().await;
        let user = User {
            id: store.next_id(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            organization: organization.cloned(),
            organization_name: None,
            created_at: store.now(),
        };
        store.users.insert(0, user.clone());
        store.user_view(&user)
    }

    async fn enter(&self, method: &'static str) -> Result<()> {
        if let Some(error) = self.failures.lock().await.remove(method) {
            return Err(error.into());
        }

        let mut counts = self.call_count.lock().await;
        match method {
            "list_organizations" => counts.list_organizations += 1,
            "get_organization" => counts.get_organization += 1,
            "organization_stats" => counts.organization_stats += 1,
            "create_organization" => counts.create_organization += 1,
            "update_organization" => counts.update_organization += 1,
            "delete_organization" => counts.delete_organization += 1,
            "list_users" | "list_users_in" => counts.list_users += 1,
            "get_user" => counts.get_user += 1,
            "user_stats" => counts.user_stats += 1,
            "create_user" => counts.create_user += 1,
            "update_user" => counts.update_user += 1,
            "delete_user" => counts.delete_user += 1,
            _ => counts.memberships += 1,
        }
        Ok(())
    }
}

fn not_found(kind: &str, id: &RecordId) -> crate::error::Error {
    ApiError::NotFound(format!("{} {}", kind, id)).into()
}

// ============================================================================
// OrganizationApi Implementation
// ============================================================================

#[async_trait]
impl OrganizationApi for MockAdminClient {
    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.enter("list_organizations").await?;
        let store = self.state.lock().await;
        Ok(store
            .organizations
            .iter()
            .map(|o| store.organization_view(o))
            .collect())
    }

    async fn get_organization(&self, id: &RecordId) -> Result<Organization> {
        self.enter("get_organization").await?;
        let store = self.state.lock().await;
        store
            .organizations
            .iter()
            .find(|o| &o.id == id)
            .map(|o| store.organization_view(o))
            .ok_or_else(|| not_found("Organization", id))
    }

    async fn organization_stats(&self) -> Result<OrganizationStats> {
        self.enter("organization_stats").await?;
        let store = self.state.lock().await;
        Ok(OrganizationStats {
            total_organizations: store.organizations.len() as u64,
        })
    }

    async fn create_organization(&self, payload: &OrganizationPayload) -> Result<Organization> {
        self.enter("create_organization").await?;
        let mut store = self.state.lock().await;
        let org = Organization {
            id: store.next_id(),
            name: payload.name.clone(),
            address: payload.address.clone(),
            user_count: 0,
            created_at: store.now(),
        };
        store.organizations.insert(0, org.clone());
        Ok(org)
    }

    async fn update_organization(
        &self,
        id: &RecordId,
        payload: &OrganizationPayload,
    ) -> Result<Organization> {
        self.enter("update_organization").await?;
        let mut store = self.state.lock().await;
        let org = store
            .organizations
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| not_found("Organization", id))?;
        org.name = payload.name.clone();
        org.address = payload.address.clone();
        let org = org.clone();
        Ok(store.organization_view(&org))
    }

    async fn delete_organization(&self, id: &RecordId) -> Result<()> {
        self.enter("delete_organization").await?;
        let mut store = self.state.lock().await;
        let before = store.organizations.len();
        store.organizations.retain(|o| &o.id != id);
        if store.organizations.len() == before {
            return Err(not_found("Organization", id));
        }
        store.users.retain(|u| u.organization.as_ref() != Some(id));
        store.memberships.retain(|m| &m.organization != id);
        Ok(())
    }
}

// ============================================================================
// UserApi Implementation
// ============================================================================

#[async_trait]
impl UserApi for MockAdminClient {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.enter("list_users").await?;
        let store = self.state.lock().await;
        Ok(store.users.iter().map(|u| store.user_view(u)).collect())
    }

    async fn list_users_in(&self, organization: &RecordId) -> Result<Vec<User>> {
        self.enter("list_users_in").await?;
        let store = self.state.lock().await;
        Ok(store
            .users
            .iter()
            .filter(|u| u.organization.as_ref() == Some(organization))
            .map(|u| store.user_view(u))
            .collect())
    }

    async fn get_user(&self, id: &RecordId) -> Result<User> {
        self.enter("get_user").await?;
        let store = self.state.lock().await;
        store
            .users
            .iter()
            .find(|u| &u.id == id)
            .map(|u| store.user_view(u))
            .ok_or_else(|| not_found("User", id))
    }

    async fn user_stats(&self) -> Result<UserStats> {
        self.enter("user_stats").await?;
        let store = self.state.lock().await;
        let users_by_role = Role::ALL
            .into_iter()
            .filter_map(|role| {
                let count = store.users.iter().filter(|u| u.role == role).count() as u64;
                (count > 0).then_some(RoleCount { role, count })
            })
            .collect();
        Ok(UserStats {
            total_users: store.users.len() as u64,
            users_by_role,
        })
    }

    async fn create_user(&self, payload: &UserPayload) -> Result<User> {
        self.enter("create_user").await?;
        let mut store = self.state.lock().await;
        if store.email_taken(&payload.email, None) {
            return Err(ApiError::Validation(FieldErrors::single(
                "email",
                "A user with this email already exists.",
            ))
            .into());
        }
        store.check_organization(payload.organization.as_ref())?;

        let user = User {
            id: store.next_id(),
            name: payload.name.clone(),
            email: payload.email.clone(),
            role: payload.role,
            organization: payload.organization.clone(),
            organization_name: None,
            created_at: store.now(),
        };
        store.users.insert(0, user.clone());
        Ok(store.user_view(&user))
    }

    async fn update_user(&self, id: &RecordId, payload: &UserPayload) -> Result<User> {
        self.enter("update_user").await?;
        let mut store = self.state.lock().await;
        if store.email_taken(&payload.email, Some(id)) {
            return Err(ApiError::Validation(FieldErrors::single(
                "email",
                "A user with this email already exists.",
            ))
            .into());
        }
        store.check_organization(payload.organization.as_ref())?;

        let user = store
            .users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| not_found("User", id))?;
        user.name = payload.name.clone();
        user.email = payload.email.clone();
        user.role = payload.role;
        user.organization = payload.organization.clone();
        let user = user.clone();
        Ok(store.user_view(&user))
    }

    async fn delete_user(&self, id: &RecordId) -> Result<()> {
        self.enter("delete_user").await?;
        let mut store = self.state.lock().await;
        let before = store.users.len();
        store.users.retain(|u| &u.id != id);
        if store.users.len() == before {
            return Err(not_found("User", id));
        }
        store.memberships.retain(|m| &m.user != id);
        Ok(())
    }
}

// ============================================================================
// MembershipApi Implementation
// ============================================================================

#[async_trait]
impl MembershipApi for MockAdminClient {
    async fn list_memberships(&self, filter: &MembershipFilter) -> Result<Vec<Membership>> {
        self.enter("list_memberships").await?;
        let store = self.state.lock().await;
        Ok(store
            .memberships
            .iter()
            .filter(|m| filter.organization.as_ref().is_none_or(|o| &m.organization == o))
            .filter(|m| filter.user.as_ref().is_none_or(|u| &m.user == u))
            .cloned()
            .collect())
    }

    async fn create_membership(&self, payload: &MembershipPayload) -> Result<Membership> {
        self.enter("create_membership").await?;
        let mut store = self.state.lock().await;
        if store
            .memberships
            .iter()
            .any(|m| m.user == payload.user && m.organization == payload.organization)
        {
            return Err(ApiError::Validation(FieldErrors::single(
                "non_field_errors",
                "The fields user, organization must make a unique set.",
            ))
            .into());
        }

        let user = store
            .users
            .iter()
            .find(|u| u.id == payload.user)
            .cloned()
            .ok_or_else(|| not_found("User", &payload.user))?;
        let org = store
            .organizations
            .iter()
            .find(|o| o.id == payload.organization)
            .cloned()
            .ok_or_else(|| not_found("Organization", &payload.organization))?;

        let membership = Membership {
            id: store.next_id(),
            user: user.id,
            user_name: Some(user.name),
            user_email: Some(user.email),
            organization: org.id,
            organization_name: Some(org.name),
            role: payload.role.clone(),
            joined_at: store.now(),
        };
        store.memberships.insert(0, membership.clone());
        Ok(membership)
    }

    async fn delete_membership(&self, id: &RecordId) -> Result<()> {
        self.enter("delete_membership").await?;
        let mut store = self.state.lock().await;
        let before = store.memberships.len();
        store.memberships.retain(|m| &m.id != id);
        if store.memberships.len() == before {
            return Err(not_found("Membership", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_user_count_tracks_references() {
        let mock = MockAdminClient::new();
        let acme = mock.seed_organization("Acme", "1 Main St").await;
        mock.seed_user("Ada", "ada@example.com", Role::Admin, Some(&acme.id))
            .await;

        let org = mock.get_organization(&acme.id).await.unwrap();
        assert_eq!(org.user_count, 1);
    }

    #[tokio::test]
    async fn test_failure_is_consumed_once() {
        let mock = MockAdminClient::new();
        mock.fail_next("list_users", ApiError::Network("down".to_string()))
            .await;

        assert!(mock.list_users().await.is_err());
        assert!(mock.list_users().await.is_ok());
    }

    #[tokio::test]
    async fn test_stats_omit_empty_roles() {
        let mock = MockAdminClient::new();
        mock.seed_user("Ada", "ada@example.com", Role::Intern, None)
            .await;

        let stats = mock.user_stats().await.unwrap();
        assert_eq!(stats.total_users, 1);
        assert_eq!(
            stats.users_by_role,
            vec![RoleCount {
                role: Role::Intern,
                count: 1
            }]
        );
    }

    #[tokio::test]
    async fn test_membership_pairs_are_unique() {
        let mock = MockAdminClient::new();
        let acme = mock.seed_organization("Acme", "1 Main St").await;
        let ada = mock
            .seed_user("Ada", "ada@example.com", Role::Admin, None)
            .await;
        let payload = MembershipPayload {
            user: ada.id.clone(),
            organization: acme.id.clone(),
            role: "member".to_string(),
        };

        mock.create_membership(&payload).await.unwrap();
        assert!(mock.create_membership(&payload).await.is_err());

        let listed = mock
            .list_memberships(&MembershipFilter {
                organization: Some(acme.id),
                user: None,
            })
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
    }
}
