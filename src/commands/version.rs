// src/commands/version.rs

//! Single version and range conversion commands

use anyhow::{Context, Result};
use asset_bridge::{SemverConverter, VersionConverter};

/// Print the Composer form of a semver version
pub fn cmd_version(version: &str) -> Result<()> {
    let converted = SemverConverter::new()
        .convert_version(version)
        .with_context(|| format!("Failed to convert version {:?}", version))?;
    println!("{}", converted);
    Ok(())
}

/// Print the Composer form of a semver range
pub fn cmd_range(range: &str) -> Result<()> {
    let converted = SemverConverter::new()
        .convert_range(range)
        .with_context(|| format!("Failed to convert range {:?}", range))?;
    println!("{}", converted);
    Ok(())
}
