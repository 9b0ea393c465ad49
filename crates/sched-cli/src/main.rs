use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sched_cli::commands::{catalog, fit, schedule};
use sched_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout stays parseable with --json
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Some(Commands::Schedule(args)) => schedule::run(&mut stdout, &config, args)?,
        Some(Commands::Fit {
            capacity,
            input,
            json,
        }) => fit::run(&mut stdout, &config, input, *capacity, *json)?,
        Some(Commands::Catalog { json }) => catalog::run(&mut stdout, *json)?,
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
