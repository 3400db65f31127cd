//! User API trait

use async_trait::async_trait;

use crate::client::models::{RecordId, User, UserPayload, UserStats};
use crate::error::Result;

/// User operations for the admin API
#[async_trait]
pub trait UserApi: Send + Sync {
    // ========================================================================
    // Read Operations
    // ========================================================================

    /// List all users in backend order
    async fn list_users(&self) -> Result<Vec<User>>;

    /// List users referencing one organization (server-side filter)
    async fn list_users_in(&self, organization: &RecordId) -> Result<Vec<User>>;

    /// Get a single user
    async fn get_user(&self, id: &RecordId) -> Result<User>;

    /// Aggregate user count with per-role breakdown
    async fn user_stats(&self) -> Result<UserStats>;

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Create a new user. Email must be unique.
    async fn create_user(&self, payload: &UserPayload) -> Result<User>;

    /// Replace an existing user (whole-record update).
    async fn update_user(&self, id: &RecordId, payload: &UserPayload) -> Result<User>;

    /// Delete a user.
    async fn delete_user(&self, id: &RecordId) -> Result<()>;
}
