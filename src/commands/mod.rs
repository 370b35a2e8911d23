// src/commands/mod.rs
//! Command handlers for the asset-bridge CLI

mod convert;
mod version;

// Re-export all command handlers
pub use convert::cmd_convert;
pub use version::{cmd_range, cmd_version};
