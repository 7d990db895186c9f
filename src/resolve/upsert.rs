//! Contact upsert: find a person by email or create them, linked to their
//! organization.

use std::sync::Arc;

use log::{debug, warn};

use super::organization::{OrgResolution, OrganizationResolver};
use super::person::{PersonLookup, PersonResolver};
use crate::client::CrmApi;
use crate::client::models::{CreateOutcome, NewContact, NewPerson, Person};
use crate::error::{ResolveError, Result};

/// Caller input for an upsert
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub phone: Option<String>,
}

impl ContactRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// How the upsert arrived at its person
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    /// The email already belonged to a person; nothing was written
    Existing(Person),
    /// A new person was created
    Created(Person),
    /// Creation conflicted and the concurrent winner was read back
    Recovered(Person),
}

impl UpsertOutcome {
    pub fn person(&self) -> &Person {
        match self {
            UpsertOutcome::Existing(p) | UpsertOutcome::Created(p) | UpsertOutcome::Recovered(p) => p,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UpsertOutcome::Existing(_) => "existing",
            UpsertOutcome::Created(_) => "created",
            UpsertOutcome::Recovered(_) => "recovered",
        }
    }
}

/// Non-empty trimmed value, or `None`
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Composes person and organization resolution into a single upsert.
///
/// Idempotent on email: once a person exists for an email, later calls return
/// it untouched whatever organization or phone they carry.
pub struct ContactUpsertOrchestrator<C: ?Sized> {
    client: Arc<C>,
    people: PersonResolver<C>,
    organizations: OrganizationResolver<C>,
}

impl<C: CrmApi + ?Sized> ContactUpsertOrchestrator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            people: PersonResolver::new(client.clone()),
            organizations: OrganizationResolver::new(client.clone()),
            client,
        }
    }

    pub async fn upsert(&self, request: &ContactRequest) -> Result<UpsertOutcome> {
        let name = request.name.trim();
        let email = request.email.trim();
        if name.is_empty() {
            return Err(ResolveError::Validation("name is required".to_string()).into());
        }
        if email.is_empty() {
            return Err(ResolveError::Validation("email is required".to_string()).into());
        }

        if let PersonLookup::Found(existing) = self.people.resolve(email).await? {
            debug!("{} already exists as person {}", email, existing.id);
            return Ok(UpsertOutcome::Existing(existing));
        }

        let organization = match non_blank(request.organization.as_deref()) {
            Some(org_name) => self.organizations.resolve_or_create(org_name).await?,
            None => OrgResolution::NotRequested,
        };

        let payload = NewPerson {
            name: name.to_string(),
            email: email.to_string(),
            organization: organization.into_id(),
            contact: NewContact {
                whatsapp: non_blank(request.phone.as_deref()).map(str::to_string),
            },
        };

        match self.client.create_person(&payload).await? {
            CreateOutcome::Created(person) => {
                debug!("Created person {} for {}", person.id, email);
                Ok(UpsertOutcome::Created(person))
            }
            CreateOutcome::Conflict(reason) => {
                warn!(
                    "Creating person {} conflicted ({}), searching again",
                    email, reason
                );

                match self.people.resolve(email).await? {
                    PersonLookup::Found(winner) => Ok(UpsertOutcome::Recovered(winner)),
                    PersonLookup::NotFound => Err(ResolveError::Unavailable(format!(
                        "person {} was reported as existing ({}) but no exact match was found \
                         on re-search",
                        email, reason
                    ))
                    .into()),
                }
            }
        }
    }
}
