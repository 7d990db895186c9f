//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod contact;
pub mod context;
pub mod init;
pub mod org;
pub mod status;

pub use args::{OutputFormat, PaginationArgs};
pub use context::CommandContext;

/// crmlink - resolve and create Agendor contacts by email
#[derive(Parser, Debug)]
#[command(name = "crmlink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "CRMLINK_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "CRMLINK_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Agendor API token (prefer the environment variable)
    #[arg(
        long,
        global = true,
        env = "CRMLINK_API_TOKEN",
        hide_env_values = true
    )]
    pub api_token: Option<String>,

    /// Custom API base URL
    #[arg(long, global = true, env = "CRMLINK_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CRMLINK_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize crmlink configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Find, look up and upsert people
    #[command(subcommand)]
    Contact(ContactCommands),

    /// Find and resolve organizations
    #[command(subcommand)]
    Org(OrgCommands),
}

/// Contact subcommands
#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// Return the person for an email, creating them (and their organization) if absent
    Upsert {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address (the lookup key)
        #[arg(long)]
        email: String,

        /// Organization name to link (created if missing)
        #[arg(long = "org")]
        organization: Option<String>,

        /// Phone number, stored as WhatsApp contact
        #[arg(long)]
        phone: Option<String>,
    },

    /// Find a person by exact email
    Find {
        /// Email address
        #[arg(long)]
        email: String,
    },

    /// Show a contact card for an email (always succeeds, N/A when missing)
    Lookup {
        /// Email address
        #[arg(long)]
        email: String,
    },

    /// List one page of people
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// Return the organization id for a name, creating it if absent
    Resolve {
        /// Organization name
        #[arg(long)]
        name: String,
    },

    /// Find an organization by exact name
    Find {
        /// Organization name
        #[arg(long)]
        name: String,
    },
}
