//! Organization display models

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::models::Organization;
use crate::error::Result;
use crate::output::pretty::format_card;
use crate::output::{Formattable, json, table};
use crate::resolve::OrgResolution;

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    /// Organization ID
    #[tabled(rename = "ORG ID")]
    pub id: String,

    /// Organization name
    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id.to_string(),
            name: org.name,
        }
    }
}

impl Formattable for OrgDisplay {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => Ok(table::format_table(std::slice::from_ref(self))),
            OutputFormat::Pretty => Ok(format_card(
                "Organization",
                &[("ID", self.id.clone()), ("Name", self.name.clone())],
            )),
        }
    }
}

/// Result of `org resolve`
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgResolutionDisplay {
    /// found or created
    #[tabled(rename = "OUTCOME")]
    pub outcome: String,

    #[tabled(rename = "ORG ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,
}

impl OrgResolutionDisplay {
    /// Build from a resolution of `name`; `None` for `NotRequested`.
    pub fn new(name: &str, resolution: OrgResolution) -> Option<Self> {
        let outcome = match &resolution {
            OrgResolution::Found(_) => "found",
            OrgResolution::Created(_) => "created",
            OrgResolution::NotRequested => return None,
        };

        resolution.into_id().map(|id| Self {
            outcome: outcome.to_string(),
            id: id.to_string(),
            name: name.trim().to_string(),
        })
    }
}

impl Formattable for OrgResolutionDisplay {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => Ok(table::format_table(std::slice::from_ref(self))),
            OutputFormat::Pretty => Ok(format_card(
                &format!("Organization ({})", self.outcome),
                &[("ID", self.id.clone()), ("Name", self.name.clone())],
            )),
        }
    }
}
