// src/main.rs

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the converted output
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Convert {
            manifest,
            asset_type,
            rules,
            compact,
        } => commands::cmd_convert(&manifest, asset_type.as_deref(), rules.as_deref(), compact),
        Commands::Version { version } => commands::cmd_version(&version),
        Commands::Range { range } => commands::cmd_range(&range),
    }
}
