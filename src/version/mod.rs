// src/version/mod.rs

//! Version and range translation between package ecosystems
//!
//! Asset registries describe versions with semver ranges (`~1.2`, `^1.0`,
//! `1.0 - 2.0`, `a || b`), while Composer uses its own constraint grammar
//! (`>=1.2,<1.3`, `~1.0`, `a|b`). This module rewrites the former into the
//! latter:
//!
//! - [`SemverConverter`] translates single versions and compound ranges
//! - [`VersionNormalizer`] is the destination grammar the output is checked
//!   against; [`ComposerNormalizer`] is the default

mod normalizer;
pub mod range;
mod semver;

pub use normalizer::{ComposerNormalizer, Stability, VersionNormalizer};
pub use semver::SemverConverter;

use crate::error::Result;

/// Translation of versions and ranges into the destination grammar
pub trait VersionConverter: Send + Sync {
    /// Convert a single version token (never a range)
    fn convert_version(&self, version: &str) -> Result<String>;

    /// Convert a possibly compound range expression
    fn convert_range(&self, range: &str) -> Result<String>;
}
