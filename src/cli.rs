// src/cli.rs
//! CLI definitions for asset-bridge
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "asset-bridge")]
#[command(version)]
#[command(about = "Convert npm and bower manifests into Composer packages", long_about = None)]
pub struct Cli {
    /// Log conversion decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an asset manifest into a Composer package
    Convert {
        /// Path to the manifest file (package.json, bower.json)
        manifest: String,

        /// Asset type: npm or bower (default: detected from the file name, else npm)
        #[arg(short = 't', long = "type")]
        asset_type: Option<String>,

        /// TOML rule table replacing the built-in converter
        #[arg(short, long)]
        rules: Option<String>,

        /// Print the package on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Convert a single semver version
    Version {
        /// Version to convert (e.g. 1.2.3-beta)
        version: String,
    },

    /// Convert a semver range expression
    Range {
        /// Range to convert (e.g. "~1.2 || ^2.0")
        range: String,
    },
}
