//! Person models

use serde::{Deserialize, Serialize};

use super::RemoteId;

/// Person record as returned by the CRM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Person ID
    pub id: RemoteId,

    /// Full name
    pub name: String,

    /// Primary email (some payloads only carry it under `contact`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Organization the person belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationRef>,

    /// Contact channels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,

    /// Legacy phone list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<Phone>,
}

impl Person {
    /// Email used as the person's natural key.
    pub fn email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .or_else(|| self.contact.as_ref().and_then(|c| c.email.as_deref()))
    }

    /// Best available phone number.
    pub fn phone(&self) -> Option<&str> {
        self.contact
            .as_ref()
            .and_then(|c| {
                c.whatsapp
                    .as_deref()
                    .or(c.mobile.as_deref())
                    .or(c.work.as_deref())
            })
            .or_else(|| self.phones.first().map(|p| p.number.as_str()))
            .filter(|p| !p.is_empty())
    }

    /// Identifier of the linked organization, if any.
    pub fn organization_id(&self) -> Option<&RemoteId> {
        self.organization.as_ref().map(|o| &o.id)
    }
}

/// Weak reference from a person to an organization.
///
/// Accepts either an embedded `{id, name}` object or a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawOrganizationRef")]
pub struct OrganizationRef {
    pub id: RemoteId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOrganizationRef {
    Embedded {
        id: RemoteId,
        #[serde(default)]
        name: Option<String>,
    },
    Bare(RemoteId),
}

impl From<RawOrganizationRef> for OrganizationRef {
    fn from(raw: RawOrganizationRef) -> Self {
        match raw {
            RawOrganizationRef::Embedded { id, name } => Self { id, name },
            RawOrganizationRef::Bare(id) => Self { id, name: None },
        }
    }
}

/// Contact channels attached to a person
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
}

/// Entry of the legacy `phones` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
}

/// Request body for `POST /people`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPerson {
    pub name: String,

    pub email: String,

    /// Organization to link, by id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<RemoteId>,

    pub contact: NewContact,
}

/// Contact block of a person creation request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}
