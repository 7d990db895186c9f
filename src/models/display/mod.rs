//! Display model implementations for table, JSON and pretty output

mod common;
mod org;
mod person;

pub use org::{OrgDisplay, OrgResolutionDisplay};
pub use person::{ContactCard, PersonDisplay, UpsertDisplay};
