//! API trait definitions split by resource
//!
//! - [`PeopleApi`] - person search, creation and listing
//! - [`OrganizationApi`] - organization search and creation
//!
//! The [`CrmApi`](super::CrmApi) super-trait combines both.

mod organizations;
mod people;

pub use organizations::OrganizationApi;
pub use people::PeopleApi;
