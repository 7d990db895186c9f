//! Test fixtures and builders for API model types
//!
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::{ContactInfo, Organization, OrganizationRef, Person, RemoteId};

// ============================================================================
// OrganizationBuilder
// ============================================================================

/// Builder for creating test Organization instances.
///
/// # Example
/// ```ignore
/// let org = OrganizationBuilder::new(42).name("Acme").build();
/// ```
#[derive(Debug, Clone)]
pub struct OrganizationBuilder {
    id: RemoteId,
    name: String,
}

impl OrganizationBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: u64) -> Self {
        Self {
            id: RemoteId::from(id),
            name: format!("Organization {}", id),
        }
    }

    /// Set the organization name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> Organization {
        Organization {
            id: self.id,
            name: self.name,
        }
    }
}

// ============================================================================
// PersonBuilder
// ============================================================================

/// Builder for creating test Person instances.
///
/// # Example
/// ```ignore
/// let person = PersonBuilder::new(7)
///     .email("jane@x.com")
///     .organization(42, "Acme")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    id: RemoteId,
    name: String,
    email: Option<String>,
    organization: Option<OrganizationRef>,
    whatsapp: Option<String>,
}

impl PersonBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: u64) -> Self {
        Self {
            id: RemoteId::from(id),
            name: format!("Person {}", id),
            email: Some(format!("person-{}@example.com", id)),
            organization: None,
            whatsapp: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn organization(mut self, id: u64, name: impl Into<String>) -> Self {
        self.organization = Some(OrganizationRef {
            id: RemoteId::from(id),
            name: Some(name.into()),
        });
        self
    }

    pub fn whatsapp(mut self, number: impl Into<String>) -> Self {
        self.whatsapp = Some(number.into());
        self
    }

    pub fn build(self) -> Person {
        Person {
            id: self.id,
            name: self.name,
            email: self.email,
            organization: self.organization,
            contact: self.whatsapp.map(|w| ContactInfo {
                whatsapp: Some(w),
                ..ContactInfo::default()
            }),
            phones: Vec::new(),
        }
    }
}
