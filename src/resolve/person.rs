//! Person resolution by email

use std::sync::Arc;

use log::{debug, warn};

use super::{MAX_SEARCH_PAGES, is_last_page, search_page};
use crate::client::PeopleApi;
use crate::client::models::Person;
use crate::error::Result;

/// Result of looking a person up by email
#[derive(Debug, Clone, PartialEq)]
pub enum PersonLookup {
    Found(Person),
    NotFound,
}

impl PersonLookup {
    pub fn into_person(self) -> Option<Person> {
        match self {
            PersonLookup::Found(person) => Some(person),
            PersonLookup::NotFound => None,
        }
    }
}

/// Maps an email to the person the CRM holds for it.
pub struct PersonResolver<C: ?Sized> {
    client: Arc<C>,
}

impl<C: PeopleApi + ?Sized> PersonResolver<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Look up a person by exact email.
    ///
    /// The search endpoint token-matches, so candidates are filtered on exact,
    /// case-sensitive equality and the first survivor wins. Pages are read
    /// until a match turns up or a short page ends the results. Transport
    /// errors propagate.
    pub async fn resolve(&self, email: &str) -> Result<PersonLookup> {
        let mut scanned = 0;

        for page in 1..=MAX_SEARCH_PAGES {
            let candidates = self
                .client
                .search_people_by_email(email, &search_page(page))
                .await?;
            let fetched = candidates.len();
            scanned += fetched;

            if let Some(person) = candidates.into_iter().find(|p| p.email() == Some(email)) {
                debug!("Resolved {} to person {} on page {}", email, person.id, page);
                return Ok(PersonLookup::Found(person));
            }

            if is_last_page(fetched) {
                debug!(
                    "No exact match for {} among {} candidate(s)",
                    email, scanned
                );
                return Ok(PersonLookup::NotFound);
            }
        }

        warn!(
            "Stopped looking for {} after {} pages ({} candidates)",
            email, MAX_SEARCH_PAGES, scanned
        );
        Ok(PersonLookup::NotFound)
    }
}
