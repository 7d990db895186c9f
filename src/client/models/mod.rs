//! Agendor API data models
//!
//! Domain types exchanged with the CRM, organized by resource type.

mod envelope;
mod id;
mod organization;
mod person;

pub use envelope::{CreateOutcome, extract_list, extract_record};
pub use id::RemoteId;
pub use organization::{NewOrganization, Organization};
pub use person::{NewContact, NewPerson, Person};
#[cfg(test)]
pub use person::{ContactInfo, OrganizationRef};
