//! API trait definitions split by responsibility
//!
//! This module organizes the admin API surface into focused sub-traits:
//! - [`OrganizationApi`] - Organization CRUD and stats
//! - [`UserApi`] - User CRUD and stats
//! - [`MembershipApi`] - Membership listing and assignment
//!
//! The [`AdminApi`](super::AdminApi) super-trait combines all three.

mod membership;
mod organization;
mod user;

pub use membership::MembershipApi;
pub use organization::OrganizationApi;
pub use user::UserApi;
