// src/version/normalizer.rs

//! Destination-grammar version validation and stability classification
//!
//! The translator never decides on its own whether a composed version is
//! legal. It asks a [`VersionNormalizer`], which is normally backed by the
//! Composer version grammar ([`ComposerNormalizer`]) but can be replaced by a
//! deterministic fake in tests.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Pre-release maturity of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Alpha,
    Beta,
    Rc,
    Dev,
    Stable,
    /// Anything that is not a known pre-release class
    Patch,
}

impl Stability {
    /// Get the keyword used in destination version strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Rc => "rc",
            Self::Dev => "dev",
            Self::Stable => "stable",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validation and classification capability of the destination grammar
pub trait VersionNormalizer: Send + Sync {
    /// Classify an arbitrary lowercase word as a stability keyword
    fn classify(&self, word: &str) -> Stability;

    /// Check that a version string is legal in the destination grammar
    ///
    /// Rejections are reported as [`Error::InvalidVersion`] carrying the
    /// offending string.
    fn validate(&self, version: &str) -> Result<()>;
}

const MODIFIER: &str =
    r"[._-]?(?:(?:stable|beta|b|RC|alpha|a|patch|pl|p)(?:[.-]?[0-9]+)*)?(?:[.-]?dev)?";

static ALIAS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^,\s]+) +as +[^,\s]+$").unwrap());
static BUILD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^,\s+]+)\+\S+$").unwrap());
static MASTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:dev-)?(?:master|trunk|default)$").unwrap());
static CLASSICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^v?[0-9]{{1,5}}(?:\.[0-9]+)?(?:\.[0-9]+)?(?:\.[0-9]+)?{MODIFIER}$"
    ))
    .unwrap()
});
static DATETIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^v?[0-9]{{4}}(?:[.:-]?[0-9]{{2}}){{1,6}}(?:[.:-]?[0-9]{{1,3}})?{MODIFIER}$"
    ))
    .unwrap()
});
static WILDCARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^v?(?:[0-9]+|x|\*)(?:\.(?:[0-9]+|x|\*)){0,3}$").unwrap()
});

/// Composer-compatible version grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct ComposerNormalizer;

impl ComposerNormalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self
    }

    fn is_valid(version: &str) -> bool {
        let mut version = version.trim();

        // Aliases ("1.0 as 2.0") are checked on their source side
        if let Some(caps) = ALIAS_RE.captures(version) {
            version = caps.get(1).map_or(version, |m| m.as_str());
        }

        // Build metadata never takes part in comparisons
        if let Some(caps) = BUILD_RE.captures(version) {
            version = caps.get(1).map_or(version, |m| m.as_str());
        }

        if version.is_empty() {
            return false;
        }

        if MASTER_RE.is_match(version) || version.to_lowercase().starts_with("dev-") {
            return true;
        }

        CLASSICAL_RE.is_match(version)
            || DATETIME_RE.is_match(version)
            || WILDCARD_RE.is_match(version)
            || version.to_lowercase().ends_with("dev")
    }
}

impl VersionNormalizer for ComposerNormalizer {
    fn classify(&self, word: &str) -> Stability {
        match word.to_lowercase().as_str() {
            "alpha" => Stability::Alpha,
            "beta" => Stability::Beta,
            "rc" => Stability::Rc,
            "dev" => Stability::Dev,
            "stable" => Stability::Stable,
            _ => Stability::Patch,
        }
    }

    fn validate(&self, version: &str) -> Result<()> {
        if Self::is_valid(version) {
            Ok(())
        } else {
            Err(Error::invalid_version(
                version,
                format!("Invalid version string \"{}\"", version),
            ))
        }
    }
}
