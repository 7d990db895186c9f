//! Entity resolution against the CRM
//!
//! - [`PersonResolver`] - email to person, exact match only
//! - [`OrganizationResolver`] - name to organization id, creating on a miss
//! - [`ContactUpsertOrchestrator`] - person-or-create with organization link
//!
//! Nothing here holds state between calls. Concurrent callers are kept
//! consistent by the CRM's unique indexes: a losing create comes back as a
//! conflict and is followed by a single re-search.

pub mod organization;
pub mod person;
pub mod upsert;

pub use organization::{OrgResolution, OrganizationResolver};
pub use person::{PersonLookup, PersonResolver};
pub use upsert::{ContactRequest, ContactUpsertOrchestrator, UpsertOutcome};

use crate::client::PaginationParams;
use crate::client::pagination::MAX_PAGE_SIZE;

/// Page size used when scanning search results for an exact match
const SEARCH_PAGE_SIZE: usize = MAX_PAGE_SIZE;

/// Pages scanned per lookup before giving up
const MAX_SEARCH_PAGES: usize = 50;

/// Query parameters for the `page`-th (1-indexed) page of a search scan.
fn search_page(page: usize) -> PaginationParams {
    PaginationParams::new().page(page).per_page(SEARCH_PAGE_SIZE)
}

/// A page shorter than requested is the last one.
fn is_last_page(fetched: usize) -> bool {
    fetched < SEARCH_PAGE_SIZE
}
