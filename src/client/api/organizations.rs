//! Organizations API trait

use async_trait::async_trait;

use crate::client::models::{CreateOutcome, NewOrganization, Organization};
use crate::client::pagination::PaginationParams;
use crate::error::Result;

/// Organization operations for the Agendor API
#[async_trait]
pub trait OrganizationApi: Send + Sync {
    /// Fetch one page of organizations matching `name`.
    ///
    /// Results are not guaranteed to be exact matches. A 404 is reported as an
    /// empty list.
    async fn search_organizations_by_name(
        &self,
        name: &str,
        pagination: &PaginationParams,
    ) -> Result<Vec<Organization>>;

    /// Create an organization.
    ///
    /// A duplicate name comes back as `CreateOutcome::Conflict`.
    async fn create_organization(
        &self,
        organization: &NewOrganization,
    ) -> Result<CreateOutcome<Organization>>;
}
