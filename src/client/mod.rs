//! Agendor CRM API client

pub mod agendor;
pub mod api;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;

pub use agendor::AgendorClient;
pub use api::{OrganizationApi, PeopleApi};
#[cfg(test)]
pub use mock::MockCrmClient;
pub use pagination::PaginationParams;

/// Everything the resolvers need from the CRM.
///
/// Blanket-implemented for any type providing both resource traits.
pub trait CrmApi: PeopleApi + OrganizationApi {}

impl<T: PeopleApi + OrganizationApi> CrmApi for T {}
