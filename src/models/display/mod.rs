//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod common;
mod dashboard;
mod membership;
mod org;
mod user;

pub use dashboard::{RoleCountDisplay, StatDisplay, headline};
pub use membership::MembershipDisplay;
pub use org::OrgDisplay;
pub use user::UserDisplay;
