// src/convert/mod.rs

//! Asset manifest to Composer package conversion
//!
//! Converters are thin rule tables on top of [`FieldMapper`]. The npm and
//! bower converters ship with the crate; [`RuleTable`] builds one from a TOML
//! description at runtime.

pub mod mapper;
mod bower;
mod npm;
mod rules;
mod transforms;

pub use bower::BowerPackageConverter;
pub use mapper::{
    DependencyRule, FieldMapper, KeyRule, KeyTransform, Manifest, Package, RuleSet,
    DEFAULT_EXTRA_KEY,
};
pub use npm::NpmPackageConverter;
pub use rules::{RuleSpec, RuleTable};
pub use transforms::{parse_person, NamedTransform};

use crate::asset::AssetType;
use crate::error::Result;

/// Converts a manifest of one asset type into a Composer package
pub trait PackageConverter: Send + Sync {
    /// Convert `manifest`, namespacing dependencies under `asset_type`
    fn convert(&self, asset_type: &dyn AssetType, manifest: &Manifest) -> Result<Package>;
}

/// Convert a manifest with the package converter bound to its asset type
pub fn convert_manifest(asset_type: &dyn AssetType, manifest: &Manifest) -> Result<Package> {
    tracing::debug!("Converting {} manifest", asset_type.name());
    asset_type.package_converter().convert(asset_type, manifest)
}
