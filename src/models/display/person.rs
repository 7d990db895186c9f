//! Person display models

use serde::Serialize;
use tabled::Tabled;

use super::common::or_na;
use crate::cli::OutputFormat;
use crate::client::models::Person;
use crate::error::Result;
use crate::output::pretty::format_card;
use crate::output::{Formattable, json, table};
use crate::resolve::UpsertOutcome;

/// Name shown on a contact card when no person matches
pub const NOT_FOUND_NAME: &str = "Not found";

/// Organization label: its name, else its id, else N/A
fn organization_label(person: &Person) -> String {
    match &person.organization {
        Some(org) => org
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| org.id.to_string()),
        None => or_na(None),
    }
}

/// Person display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PersonDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "ORGANIZATION")]
    pub organization: String,

    /// Linked organization id, for scripts
    #[tabled(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,

    #[tabled(rename = "PHONE")]
    pub phone: String,
}

impl From<&Person> for PersonDisplay {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id.to_string(),
            name: person.name.clone(),
            email: or_na(person.email()),
            organization: organization_label(person),
            organization_id: person.organization_id().map(|id| id.to_string()),
            phone: or_na(person.phone()),
        }
    }
}

impl From<Person> for PersonDisplay {
    fn from(person: Person) -> Self {
        Self::from(&person)
    }
}

impl PersonDisplay {
    fn card_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.clone()),
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
            ("Organization", self.organization.clone()),
            ("Phone", self.phone.clone()),
        ]
    }
}

impl Formattable for PersonDisplay {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => Ok(table::format_table(std::slice::from_ref(self))),
            OutputFormat::Pretty => Ok(format_card("Person", &self.card_rows())),
        }
    }
}

/// Result of `contact upsert`
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UpsertDisplay {
    /// existing, created or recovered
    #[tabled(rename = "OUTCOME")]
    pub outcome: String,

    #[tabled(inline)]
    #[serde(flatten)]
    pub person: PersonDisplay,
}

impl From<&UpsertOutcome> for UpsertDisplay {
    fn from(outcome: &UpsertOutcome) -> Self {
        Self {
            outcome: outcome.label().to_string(),
            person: PersonDisplay::from(outcome.person()),
        }
    }
}

impl Formattable for UpsertDisplay {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => Ok(table::format_table(std::slice::from_ref(self))),
            OutputFormat::Pretty => Ok(format_card(
                &format!("Person ({})", self.outcome),
                &self.person.card_rows(),
            )),
        }
    }
}

/// Flattened contact card for the support-desk widget.
///
/// Missing values are rendered as `N/A`; a miss is still a card.
#[derive(Debug, Clone, PartialEq, Eq, Tabled, Serialize)]
pub struct ContactCard {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "ORGANIZATION")]
    pub organization: String,

    #[tabled(rename = "PHONE")]
    pub phone: String,
}

impl ContactCard {
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            email: or_na(person.email()),
            organization: person
                .organization
                .as_ref()
                .map(|o| or_na(o.name.as_deref()))
                .unwrap_or_else(|| or_na(None)),
            phone: or_na(person.phone()),
        }
    }

    pub fn not_found(email: &str) -> Self {
        Self {
            name: NOT_FOUND_NAME.to_string(),
            email: email.to_string(),
            organization: or_na(None),
            phone: or_na(None),
        }
    }
}

impl Formattable for ContactCard {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => Ok(table::format_table(std::slice::from_ref(self))),
            OutputFormat::Pretty => Ok(format_card(
                "Contact",
                &[
                    ("Name", self.name.clone()),
                    ("Email", self.email.clone()),
                    ("Organization", self.organization.clone()),
                    ("Phone", self.phone.clone()),
                ],
            )),
        }
    }
}
