//! Organization find-or-create
//!
//! There is no atomic upsert in the CRM, so this is a search followed by a
//! create. Two callers can both miss on the search and both try to create;
//! the CRM's unique name index rejects the loser with a conflict, and the
//! loser re-reads to pick up the winner's id.

use std::sync::Arc;

use log::{debug, warn};

use super::{MAX_SEARCH_PAGES, is_last_page, search_page};
use crate::client::OrganizationApi;
use crate::client::models::{CreateOutcome, NewOrganization, Organization, RemoteId};
use crate::error::{ResolveError, Result};

/// Result of resolving an organization name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgResolution {
    /// The organization already existed
    Found(RemoteId),
    /// This call created the organization
    Created(RemoteId),
    /// The name was blank; no organization was asked for
    NotRequested,
}

impl OrgResolution {
    pub fn into_id(self) -> Option<RemoteId> {
        match self {
            OrgResolution::Found(id) | OrgResolution::Created(id) => Some(id),
            OrgResolution::NotRequested => None,
        }
    }
}

/// Maps an organization name to its id, creating the organization if absent.
pub struct OrganizationResolver<C: ?Sized> {
    client: Arc<C>,
}

impl<C: OrganizationApi + ?Sized> OrganizationResolver<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Find the first organization whose name equals `name` exactly,
    /// reading search pages until a match or a short page.
    pub async fn find(&self, name: &str) -> Result<Option<Organization>> {
        for page in 1..=MAX_SEARCH_PAGES {
            let candidates = self
                .client
                .search_organizations_by_name(name, &search_page(page))
                .await?;
            let fetched = candidates.len();

            if let Some(org) = candidates.into_iter().find(|o| o.name == name) {
                return Ok(Some(org));
            }
            if is_last_page(fetched) {
                return Ok(None);
            }
        }

        warn!(
            "Stopped looking for organization {:?} after {} pages",
            name, MAX_SEARCH_PAGES
        );
        Ok(None)
    }

    /// Resolve `name` to an organization id, creating it when missing.
    ///
    /// A conflict on create triggers exactly one more search. If that search
    /// still comes back empty the CRM's uniqueness rule disagrees with ours
    /// and the call fails as unavailable rather than guessing an id. Other
    /// create failures are returned as-is.
    pub async fn resolve_or_create(&self, name: &str) -> Result<OrgResolution> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(OrgResolution::NotRequested);
        }

        if let Some(existing) = self.find(name).await? {
            debug!("Organization {:?} found as {}", name, existing.id);
            return Ok(OrgResolution::Found(existing.id));
        }

        let request = NewOrganization {
            name: name.to_string(),
        };

        match self.client.create_organization(&request).await? {
            CreateOutcome::Created(created) => {
                debug!("Organization {:?} created as {}", name, created.id);
                Ok(OrgResolution::Created(created.id))
            }
            CreateOutcome::Conflict(reason) => {
                warn!(
                    "Creating organization {:?} conflicted ({}), searching again",
                    name, reason
                );

                match self.find(name).await? {
                    Some(winner) => {
                        debug!("Organization {:?} settled on {}", name, winner.id);
                        Ok(OrgResolution::Found(winner.id))
                    }
                    None => {
                        warn!(
                            "Organization {:?} conflicts on create but is not searchable",
                            name
                        );
                        Err(ResolveError::Unavailable(format!(
                            "organization {:?} was reported as existing ({}) but no exact match \
                             was found on re-search",
                            name, reason
                        ))
                        .into())
                    }
                }
            }
        }
    }
}
