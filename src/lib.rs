// src/lib.rs

//! Asset Bridge
//!
//! Converts asset-registry manifests (npm `package.json`, bower `bower.json`)
//! into Composer package descriptors.
//!
//! # Architecture
//!
//! - Version translation: semver versions and ranges are rewritten into the
//!   Composer constraint grammar and validated against it
//! - Field mapping: declarative key, dependency and extra rules turn an
//!   untyped manifest into an untyped package
//! - Asset types: each registry kind binds a vendor namespace, a manifest
//!   file name and its converters
//!
//! Everything here is pure and synchronous; fetching manifests and
//! registering repositories belong to the host.

pub mod asset;
pub mod convert;
mod error;
pub mod version;

pub use asset::{AssetKind, AssetType, BowerAssetType, NpmAssetType};
pub use convert::{
    convert_manifest, DependencyRule, FieldMapper, KeyRule, Manifest, Package, PackageConverter,
    RuleSet, RuleTable,
};
pub use error::{Error, Result};
pub use version::{ComposerNormalizer, SemverConverter, Stability, VersionConverter, VersionNormalizer};
