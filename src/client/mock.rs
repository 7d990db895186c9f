//! Mock Agendor API client for testing
//!
//! An in-memory CRM that enforces the same uniqueness rules as the real
//! service (organization name, person email) and can be told to serve stale
//! search results, which is how check-then-act races show up from the
//! client's side.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{OrganizationApi, PeopleApi};
use super::models::{
    ContactInfo, CreateOutcome, NewOrganization, NewPerson, Organization, OrganizationRef, Person,
    RemoteId,
};
use super::pagination::PaginationParams;
use crate::error::{ApiError, Result};

/// First id handed out by the mock for created records
const FIRST_MOCK_ID: u64 = 100;

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockCrmClient::new()
///     .with_organizations(vec![OrganizationBuilder::new(42).name("Acme").build()])
///     .await;
///
/// let orgs = mock
///     .search_organizations_by_name("Acme", &PaginationParams::new())
///     .await?;
/// assert_eq!(orgs.len(), 1);
/// ```
pub struct MockCrmClient {
    /// Stored people
    people: Arc<Mutex<Vec<Person>>>,
    /// Stored organizations
    organizations: Arc<Mutex<Vec<Organization>>>,
    /// Next id to assign on creation
    next_id: Arc<Mutex<u64>>,
    /// Organization name -> number of upcoming searches that miss it
    stale_org_searches: Arc<Mutex<HashMap<String, usize>>>,
    /// Email -> number of upcoming searches that miss it
    stale_person_searches: Arc<Mutex<HashMap<String, usize>>>,
    /// Error to return on the next call of any kind - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Error to return on the next create call - consumed on first use
    create_error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Person creation payloads, in order
    captured_people: Arc<Mutex<Vec<NewPerson>>>,
}

impl Default for MockCrmClient {
    fn default() -> Self {
        Self {
            people: Arc::new(Mutex::new(Vec::new())),
            organizations: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(FIRST_MOCK_ID)),
            stale_org_searches: Arc::new(Mutex::new(HashMap::new())),
            stale_person_searches: Arc::new(Mutex::new(HashMap::new())),
            error: Arc::new(Mutex::new(None)),
            create_error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_people: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub search_people: usize,
    pub create_person: usize,
    pub list_people: usize,
    pub search_organizations: usize,
    pub create_organization: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.search_people
            + self.create_person
            + self.list_people
            + self.search_organizations
            + self.create_organization
    }
}

impl MockCrmClient {
    /// Create a new mock client with an empty CRM.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed people.
    pub async fn with_people(self, people: Vec<Person>) -> Self {
        *self.people.lock().await = people;
        self
    }

    /// Seed organizations.
    pub async fn with_organizations(self, organizations: Vec<Organization>) -> Self {
        *self.organizations.lock().await = organizations;
        self
    }

    /// Make the next `searches` organization searches for `name` miss it,
    /// even once it is stored.
    ///
    /// Simulates a concurrent writer that creates the organization between
    /// our search and our create, or a lagging search index.
    pub async fn with_stale_org_searches(self, name: &str, searches: usize) -> Self {
        self.stale_org_searches
            .lock()
            .await
            .insert(name.to_string(), searches);
        self
    }

    /// Make the next `searches` person searches for `email` miss it.
    pub async fn with_stale_person_searches(self, email: &str, searches: usize) -> Self {
        self.stale_person_searches
            .lock()
            .await
            .insert(email.to_string(), searches);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Configure an error to return on the next create call.
    pub async fn with_create_error(self, error: ApiError) -> Self {
        *self.create_error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Person creation payloads received so far.
    pub async fn captured_people(&self) -> Vec<NewPerson> {
        self.captured_people.lock().await.clone()
    }

    /// Organizations currently stored.
    pub async fn organizations(&self) -> Vec<Organization> {
        self.organizations.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    async fn check_create_error(&self) -> Result<()> {
        let mut error = self.create_error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    async fn allocate_id(&self) -> RemoteId {
        let mut next = self.next_id.lock().await;
        let id = RemoteId::from(*next);
        *next += 1;
        id
    }

    /// Consume one stale search for `key`, returning true if this search
    /// should miss.
    async fn consume_stale(stale: &Mutex<HashMap<String, usize>>, key: &str) -> bool {
        let mut stale = stale.lock().await;
        match stale.get_mut(key) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                true
            }
            _ => false,
        }
    }
}

/// Page size the mock uses when the caller sends none
const DEFAULT_MOCK_PAGE_SIZE: usize = 20;

/// Slice one page out of a result set, 1-indexed.
fn paginate<'a, T: Clone + 'a>(
    items: impl Iterator<Item = &'a T>,
    pagination: &PaginationParams,
) -> Vec<T> {
    let per_page = pagination.per_page.unwrap_or(DEFAULT_MOCK_PAGE_SIZE).max(1);
    let page = pagination.page.unwrap_or(1).max(1);

    items
        .skip((page - 1) * per_page)
        .take(per_page)
        .cloned()
        .collect()
}

// ============================================================================
// PeopleApi Implementation
// ============================================================================

#[async_trait]
impl PeopleApi for MockCrmClient {
    async fn search_people_by_email(
        &self,
        email: &str,
        pagination: &PaginationParams,
    ) -> Result<Vec<Person>> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.search_people += 1;
        drop(counts);

        if Self::consume_stale(&self.stale_person_searches, email).await {
            return Ok(Vec::new());
        }

        // The real API token-matches, so mimic a loose containment search
        let people = self.people.lock().await;
        Ok(paginate(
            people
                .iter()
                .filter(|p| p.email().is_some_and(|e| e.contains(email))),
            pagination,
        ))
    }

    async fn create_person(&self, person: &NewPerson) -> Result<CreateOutcome<Person>> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.create_person += 1;
        drop(counts);

        self.captured_people.lock().await.push(person.clone());
        self.check_create_error().await?;

        if self
            .people
            .lock()
            .await
            .iter()
            .any(|p| p.email() == Some(person.email.as_str()))
        {
            return Ok(CreateOutcome::Conflict(format!(
                "Email already in use: {}",
                person.email
            )));
        }

        let organization = match &person.organization {
            Some(id) => {
                let orgs = self.organizations.lock().await;
                let name = orgs.iter().find(|o| &o.id == id).map(|o| o.name.clone());
                Some(OrganizationRef {
                    id: id.clone(),
                    name,
                })
            }
            None => None,
        };

        let created = Person {
            id: self.allocate_id().await,
            name: person.name.clone(),
            email: Some(person.email.clone()),
            organization,
            contact: person.contact.whatsapp.clone().map(|w| ContactInfo {
                whatsapp: Some(w),
                ..ContactInfo::default()
            }),
            phones: Vec::new(),
        };

        self.people.lock().await.push(created.clone());
        Ok(CreateOutcome::Created(created))
    }

    async fn list_people(&self, pagination: &PaginationParams) -> Result<Vec<Person>> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_people += 1;
        drop(counts);

        let people = self.people.lock().await;
        Ok(paginate(people.iter(), pagination))
    }
}

// ============================================================================
// OrganizationApi Implementation
// ============================================================================

#[async_trait]
impl OrganizationApi for MockCrmClient {
    async fn search_organizations_by_name(
        &self,
        name: &str,
        pagination: &PaginationParams,
    ) -> Result<Vec<Organization>> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.search_organizations += 1;
        drop(counts);

        if Self::consume_stale(&self.stale_org_searches, name).await {
            return Ok(Vec::new());
        }

        let needle = name.to_lowercase();
        let orgs = self.organizations.lock().await;
        Ok(paginate(
            orgs.iter()
                .filter(|o| o.name.to_lowercase().contains(&needle)),
            pagination,
        ))
    }

    async fn create_organization(
        &self,
        organization: &NewOrganization,
    ) -> Result<CreateOutcome<Organization>> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.create_organization += 1;
        drop(counts);

        self.check_create_error().await?;

        // Hold the lock across check and insert, like a unique index would
        let mut orgs = self.organizations.lock().await;
        if orgs.iter().any(|o| o.name == organization.name) {
            return Ok(CreateOutcome::Conflict(format!(
                "Organization name already in use: {}",
                organization.name
            )));
        }

        let created = Organization {
            id: self.allocate_id().await,
            name: organization.name.clone(),
        };
        orgs.push(created.clone());

        Ok(CreateOutcome::Created(created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{OrganizationBuilder, PersonBuilder};

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockCrmClient::new();
        let page = PaginationParams::new();

        let people = mock.search_people_by_email("a@x.com", &page).await.unwrap();
        assert!(people.is_empty());

        let orgs = mock.search_organizations_by_name("Acme", &page).await.unwrap();
        assert!(orgs.is_empty());
    }

    #[tokio::test]
    async fn test_mock_search_is_loose() {
        let mock = MockCrmClient::new()
            .with_organizations(vec![
                OrganizationBuilder::new(1).name("Acme").build(),
                OrganizationBuilder::new(2).name("Acme Holdings").build(),
            ])
            .await;

        let orgs = mock
            .search_organizations_by_name("acme", &PaginationParams::new())
            .await
            .unwrap();
        assert_eq!(orgs.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_search_pages_loose_matches() {
        let people = (1..=5)
            .map(|i| PersonBuilder::new(i).email(format!("a@x.com.{}", i)).build())
            .collect();
        let mock = MockCrmClient::new().with_people(people).await;

        let second = mock
            .search_people_by_email("a@x.com", &PaginationParams::new().page(2).per_page(2))
            .await
            .unwrap();
        let last = mock
            .search_people_by_email("a@x.com", &PaginationParams::new().page(3).per_page(2))
            .await
            .unwrap();

        assert_eq!(second.len(), 2);
        assert_eq!(second[0].id, RemoteId::from(3));
        assert_eq!(last.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_create_organization_enforces_unique_name() {
        let mock = MockCrmClient::new();
        let request = NewOrganization {
            name: "Acme".to_string(),
        };

        let first = mock.create_organization(&request).await.unwrap();
        assert!(matches!(first, CreateOutcome::Created(_)));

        let second = mock.create_organization(&request).await.unwrap();
        assert!(matches!(second, CreateOutcome::Conflict(_)));
        assert_eq!(mock.organizations().await.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_stale_search_is_consumed() {
        let mock = MockCrmClient::new()
            .with_organizations(vec![OrganizationBuilder::new(42).name("Acme").build()])
            .await
            .with_stale_org_searches("Acme", 1)
            .await;
        let page = PaginationParams::new();

        let stale = mock.search_organizations_by_name("Acme", &page).await.unwrap();
        let fresh = mock.search_organizations_by_name("Acme", &page).await.unwrap();

        assert!(stale.is_empty());
        assert_eq!(fresh.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockCrmClient::new()
            .with_error(ApiError::Unauthorized)
            .await;
        let page = PaginationParams::new();

        assert!(mock.search_people_by_email("a@x.com", &page).await.is_err());

        // Error is consumed, next call succeeds
        assert!(mock.search_people_by_email("a@x.com", &page).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockCrmClient::new()
            .with_people(vec![PersonBuilder::new(1).email("a@x.com").build()])
            .await;
        let page = PaginationParams::new();

        mock.search_people_by_email("a@x.com", &page).await.unwrap();
        mock.search_people_by_email("a@x.com", &page).await.unwrap();
        mock.search_organizations_by_name("Acme", &page).await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.search_people, 2);
        assert_eq!(counts.search_organizations, 1);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn test_mock_list_people_pages() {
        let people = (1..=5).map(|i| PersonBuilder::new(i).build()).collect();
        let mock = MockCrmClient::new().with_people(people).await;

        let page = mock
            .list_people(&PaginationParams::new().page(2).per_page(2))
            .await
            .unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, RemoteId::from(3));
    }
}
