//! Init command implementation

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{AgendorClient, PaginationParams, PeopleApi};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for a token, proves it against the API with a one-row listing,
/// then writes it to the config file. Other settings in an existing file
/// are kept.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to crmlink!".bold().green());
    println!("Let's set up your Agendor configuration.\n");

    let api_token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your Agendor API token")
        .interact()?;

    let config = Config::load_at(opts.config_ref())?
        .with_overrides(Some(api_token), opts.api_host.clone());

    println!("\n{}", "Verifying token...".cyan());
    let client = AgendorClient::from_config(&config)?;
    client
        .list_people(&PaginationParams::new().per_page(1))
        .await?;
    println!("{}", "✓ Token accepted".green());

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "crmlink status".cyan());
    println!(
        "  {} - Look up a contact",
        "crmlink contact lookup --email <EMAIL>".cyan()
    );

    Ok(())
}
