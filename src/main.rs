//! crmlink - resolve and create Agendor contacts by email

use clap::Parser;
use log::debug;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod resolve;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, ContactCommands, OrgCommands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(err.kind().exit_code());
    }
}

/// Warnings only by default; `--debug` opens up this crate; `RUST_LOG` wins.
fn init_logging(debug: bool) {
    let default_filter = if debug { "warn,crmlink=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);
    debug!("Dispatching {:?}", cli.command);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("crmlink version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Contact(contact_cmd) => match contact_cmd {
            ContactCommands::Upsert {
                name,
                email,
                organization,
                phone,
            } => {
                cli::contact::upsert(
                    &opts,
                    &name,
                    &email,
                    organization.as_deref(),
                    phone.as_deref(),
                )
                .await
            }
            ContactCommands::Find { email } => cli::contact::find(&opts, &email).await,
            ContactCommands::Lookup { email } => cli::contact::lookup(&opts, &email).await,
            ContactCommands::List { pagination } => cli::contact::list(&opts, &pagination).await,
        },
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::Resolve { name } => cli::org::resolve(&opts, &name).await,
            OrgCommands::Find { name } => cli::org::find(&opts, &name).await,
        },
    }
}
