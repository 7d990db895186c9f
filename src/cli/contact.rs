//! Contact command implementations

use log::debug;

use crate::cli::CommandContext;
use crate::cli::PaginationArgs;
use crate::cli::args::GlobalOptions;
use crate::client::PeopleApi;
use crate::error::{ApiError, ResolveError, Result};
use crate::models::{ContactCard, PersonDisplay, UpsertDisplay};
use crate::output::Formattable;
use crate::resolve::{ContactRequest, ContactUpsertOrchestrator, PersonLookup, PersonResolver};

/// Run the `contact upsert` command
pub async fn upsert(
    opts: &GlobalOptions,
    name: &str,
    email: &str,
    organization: Option<&str>,
    phone: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let mut request = ContactRequest::new(name, email);
    if let Some(organization) = organization {
        request = request.organization(organization);
    }
    if let Some(phone) = phone {
        request = request.phone(phone);
    }

    let outcome = ContactUpsertOrchestrator::new(ctx.client.clone())
        .upsert(&request)
        .await?;
    debug!("Upsert of {} finished as {}", email, outcome.label());

    UpsertDisplay::from(&outcome).print(ctx.format)
}

/// Run the `contact find` command
///
/// A miss is an error so scripts can branch on the exit status.
pub async fn find(opts: &GlobalOptions, email: &str) -> Result<()> {
    let email = require_email(email)?;
    let ctx = CommandContext::new(opts)?;

    match PersonResolver::new(ctx.client.clone()).resolve(email).await? {
        PersonLookup::Found(person) => PersonDisplay::from(person).print(ctx.format),
        PersonLookup::NotFound => {
            Err(ApiError::NotFound(format!("no person with email {}", email)).into())
        }
    }
}

/// Run the `contact lookup` command
///
/// Always prints a card; a miss shows the placeholder name.
pub async fn lookup(opts: &GlobalOptions, email: &str) -> Result<()> {
    let email = require_email(email)?;
    let ctx = CommandContext::new(opts)?;

    let lookup = PersonResolver::new(ctx.client.clone()).resolve(email).await?;
    let card = match lookup.into_person() {
        Some(person) => ContactCard::from_person(&person),
        None => ContactCard::not_found(email),
    };

    card.print(ctx.format)
}

/// Run the `contact list` command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let people = ctx.client.list_people(&pagination.to_params()).await?;
    debug!("Fetched {} people", people.len());

    let display: Vec<PersonDisplay> = people.iter().map(PersonDisplay::from).collect();
    display.print(ctx.format)
}

fn require_email(email: &str) -> Result<&str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ResolveError::Validation("email must not be blank".to_string()).into());
    }
    Ok(email)
}
