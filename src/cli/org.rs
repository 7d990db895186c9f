//! Organization command implementations

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::{ApiError, ResolveError, Result};
use crate::models::{OrgDisplay, OrgResolutionDisplay};
use crate::output::Formattable;
use crate::resolve::OrganizationResolver;

/// Run the `org resolve` command
pub async fn resolve(opts: &GlobalOptions, name: &str) -> Result<()> {
    let name = require_name(name)?;
    let ctx = CommandContext::new(opts)?;

    let resolution = OrganizationResolver::new(ctx.client.clone())
        .resolve_or_create(name)
        .await?;

    match OrgResolutionDisplay::new(name, resolution) {
        Some(display) => display.print(ctx.format),
        None => Err(ResolveError::Validation("organization name must not be blank".to_string()).into()),
    }
}

/// Run the `org find` command
pub async fn find(opts: &GlobalOptions, name: &str) -> Result<()> {
    let name = require_name(name)?;
    let ctx = CommandContext::new(opts)?;

    match OrganizationResolver::new(ctx.client.clone()).find(name).await? {
        Some(org) => OrgDisplay::from(org).print(ctx.format),
        None => Err(ApiError::NotFound(format!("no organization named {:?}", name)).into()),
    }
}

fn require_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ResolveError::Validation("organization name must not be blank".to_string()).into());
    }
    Ok(name)
}
