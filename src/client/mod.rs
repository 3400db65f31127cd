//! Client for the Organizations & Users REST service

pub mod admin;
pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use admin::{AdminClient, ClientOptions};
pub use api::{MembershipApi, OrganizationApi, UserApi};
#[cfg(test)]
pub use mock::MockAdminClient;

/// Full admin API surface.
///
/// Blanket-implemented for anything providing every sub-trait, so views can
/// be generic over a single bound.
pub trait AdminApi: OrganizationApi + UserApi + MembershipApi {}

impl<T: OrganizationApi + UserApi + MembershipApi> AdminApi for T {}
