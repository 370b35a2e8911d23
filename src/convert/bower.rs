// src/convert/bower.rs

//! Bower `bower.json` to Composer package conversion

use super::mapper::{FieldMapper, Manifest, Package, RuleSet};
use super::transforms::NamedTransform;
use super::PackageConverter;
use crate::asset::AssetType;
use crate::error::Result;

/// Converter for Bower `bower.json` manifests
#[derive(Debug, Clone, Copy, Default)]
pub struct BowerPackageConverter;

impl BowerPackageConverter {
    /// Rule tables for bower manifests bound to `asset_type`
    pub fn rules(asset_type: &dyn AssetType) -> RuleSet<'_> {
        let vendor = asset_type.vendor_name();

        RuleSet::new()
            .transform("name", "name", NamedTransform::VendorName.bind(asset_type))
            .transform("type", "type", NamedTransform::ComposerType.bind(asset_type))
            .transform("version", "version", NamedTransform::Version.bind(asset_type))
            .rename("version_normalized", "version_normalized")
            .rename("description", "description")
            .rename("keywords", "keywords")
            .rename("license", "license")
            .rename("time", "time")
            .transform("bin", "bin", NamedTransform::Array.bind(asset_type))
            .rename("source", "source")
            .rename("dist", "dist")
            .dependency("dependencies", "require")
            .dependency("devDependencies", "require-dev")
            .extra_rename("main", &format!("{}-main", vendor))
            .extra_rename("ignore", &format!("{}-ignore", vendor))
            .extra_rename("private", &format!("{}-private", vendor))
    }
}

impl PackageConverter for BowerPackageConverter {
    fn convert(&self, asset_type: &dyn AssetType, manifest: &Manifest) -> Result<Package> {
        FieldMapper::new(asset_type).convert(manifest, &Self::rules(asset_type))
    }
}
