//! Membership API trait

use async_trait::async_trait;

use crate::client::models::{Membership, MembershipFilter, MembershipPayload, RecordId};
use crate::error::Result;

/// Membership operations for the admin API
#[async_trait]
pub trait MembershipApi: Send + Sync {
    /// List memberships, optionally narrowed by organization and/or user
    async fn list_memberships(&self, filter: &MembershipFilter) -> Result<Vec<Membership>>;

    /// Create a membership. A (user, organization) pair may exist only once.
    async fn create_membership(&self, payload: &MembershipPayload) -> Result<Membership>;

    /// Delete a membership
    async fn delete_membership(&self, id: &RecordId) -> Result<()>;
}
