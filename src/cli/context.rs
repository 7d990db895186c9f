//! Command execution context
//!
//! Loads configuration, applies CLI/env overrides, and builds the API client
//! so individual commands don't repeat that boilerplate.

use std::sync::Arc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::AgendorClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing the client and output format.
pub struct CommandContext {
    /// API client (Arc-wrapped so resolvers can share it)
    pub client: Arc<AgendorClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns `MissingApiToken` if neither the config file nor the
    /// environment supplies a token; no request is made in that case.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?
            .with_overrides(opts.api_token.clone(), opts.api_host.clone());
        config.validate_auth()?;

        let client = AgendorClient::from_config(&config)?;
        debug!(
            "Using API at {} ({}s timeout, {} req/s)",
            client.base_url(),
            config.timeout_secs,
            config.requests_per_second
        );

        Ok(Self {
            client: Arc::new(client),
            format: opts.format,
        })
    }
}
