// src/error.rs

//! Error types shared by the version translator and the field mapper

use thiserror::Error;

/// Result type for asset conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting asset manifests
#[derive(Error, Debug)]
pub enum Error {
    /// A rule table is malformed (caller mistake, never bad manifest data)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The destination grammar rejected a composed version string
    #[error("Invalid version \"{version}\": {reason}")]
    InvalidVersion { version: String, reason: String },

    /// IO error while reading manifests or rule tables
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest decoding or package encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rule table file is not valid TOML
    #[error("Failed to parse rule table: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error with a message
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an invalid version error for the given composed string
    pub fn invalid_version(version: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }
}
