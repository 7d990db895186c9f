//! People API trait

use async_trait::async_trait;

use crate::client::models::{CreateOutcome, NewPerson, Person};
use crate::client::pagination::PaginationParams;
use crate::error::Result;

/// Person operations for the Agendor API
#[async_trait]
pub trait PeopleApi: Send + Sync {
    /// Fetch one page of people matching `email`.
    ///
    /// The CRM may return token matches (e.g. `a@x.com.br` for `a@x.com`);
    /// callers filter for exact equality and page on until they find one.
    /// A 404 is reported as an empty list.
    async fn search_people_by_email(
        &self,
        email: &str,
        pagination: &PaginationParams,
    ) -> Result<Vec<Person>>;

    /// Create a person.
    ///
    /// A duplicate email comes back as `CreateOutcome::Conflict`.
    async fn create_person(&self, person: &NewPerson) -> Result<CreateOutcome<Person>>;

    /// Fetch a single page of people.
    async fn list_people(&self, pagination: &PaginationParams) -> Result<Vec<Person>>;
}
