//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::agendor::API_BASE_URL;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "crmlink Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("Config file: {}", config_path.display().to_string().cyan());

    let file_config = match Config::load_from(&config_path) {
        Ok(config) => Some(config),
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("{} Configuration file not found", "○".dimmed());
            None
        }
        Err(err) => return Err(err),
    };

    let config = file_config
        .unwrap_or_default()
        .with_overrides(opts.api_token.clone(), opts.api_host.clone());

    println!();

    if config.require_token().is_ok() {
        println!("{} API token configured", "✓".green());
    } else {
        println!("{} API token not configured", "✗".red());
        println!(
            "  → Run '{}' or set CRMLINK_API_TOKEN",
            "crmlink init".cyan()
        );
    }

    match config.api_host.as_deref() {
        Some(host) => println!("{} Custom API host: {}", "○".dimmed(), host.cyan()),
        None => println!("{} API host: {}", "✓".green(), API_BASE_URL),
    }

    println!(
        "{} Timeout {}s, {} request(s)/second",
        "○".dimmed(),
        config.timeout_secs,
        config.requests_per_second
    );

    println!();
    Ok(())
}
