//! eventdash CLI entry point.

use anyhow::Result;
use clap::Parser;
use eventdash_cli::cli::Cli;
use eventdash_cli::commands::execute;
use eventdash_cli::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "eventdash=debug,eventdash_cli=debug,eventdash_core=debug"
    } else if cli.quiet {
        "warn"
    } else {
        "eventdash=info,eventdash_cli=info,eventdash_core=info"
    };

    // Logs go to stderr so JSON output on stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let output = execute(&cli, &config)?;
    println!("{}", output);

    Ok(())
}
