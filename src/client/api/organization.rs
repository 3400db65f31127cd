//! Organization API trait

use async_trait::async_trait;

use crate::client::models::{Organization, OrganizationPayload, OrganizationStats, RecordId};
use crate::error::Result;

/// Organization operations for the admin API
#[async_trait]
pub trait OrganizationApi: Send + Sync {
    // ========================================================================
    // Read Operations
    // ========================================================================

    /// List all organizations in backend order
    async fn list_organizations(&self) -> Result<Vec<Organization>>;

    /// Get a single organization
    async fn get_organization(&self, id: &RecordId) -> Result<Organization>;

    /// Aggregate organization count
    async fn organization_stats(&self) -> Result<OrganizationStats>;

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Create a new organization.
    async fn create_organization(&self, payload: &OrganizationPayload) -> Result<Organization>;

    /// Replace an existing organization (whole-record update).
    async fn update_organization(
        &self,
        id: &RecordId,
        payload: &OrganizationPayload,
    ) -> Result<Organization>;

    /// Delete an organization.
    ///
    /// The backend deletes every user referencing it in the same operation.
    async fn delete_organization(&self, id: &RecordId) -> Result<()>;
}
