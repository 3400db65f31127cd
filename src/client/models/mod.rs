//! Data models exchanged with the Organizations & Users service
//!
//! Models are organized by resource type for easy discovery.

mod id;
mod membership;
mod org;
mod user;

pub use id::RecordId;
pub use membership::{Membership, MembershipFilter, MembershipPayload};
pub use org::{Organization, OrganizationPayload, OrganizationStats};
pub use user::{Role, RoleCount, User, UserPayload, UserStats};
