// src/convert/npm.rs

//! npm `package.json` to Composer package conversion

use super::mapper::{FieldMapper, Manifest, Package, RuleSet};
use super::transforms::NamedTransform;
use super::PackageConverter;
use crate::asset::AssetType;
use crate::error::Result;

/// npm manifest keys kept under `extra`, with their extra key suffix
const EXTRA_KEYS: [(&str, &str); 17] = [
    ("bugs", "bugs"),
    ("files", "files"),
    ("main", "main"),
    ("man", "man"),
    ("directories", "directories"),
    ("repository", "repository"),
    ("scripts", "scripts"),
    ("config", "config"),
    ("bundledDependencies", "bundled-dependencies"),
    ("optionalDependencies", "optional-dependencies"),
    ("engines", "engines"),
    ("engineStrict", "engine-strict"),
    ("os", "os"),
    ("cpu", "cpu"),
    ("preferGlobal", "prefer-global"),
    ("private", "private"),
    ("publishConfig", "publish-config"),
];

/// Converter for npm `package.json` manifests
#[derive(Debug, Clone, Copy, Default)]
pub struct NpmPackageConverter;

impl NpmPackageConverter {
    /// Rule tables for npm manifests bound to `asset_type`
    pub fn rules(asset_type: &dyn AssetType) -> RuleSet<'_> {
        let rules = RuleSet::new()
            .transform("name", "name", NamedTransform::VendorName.bind(asset_type))
            .transform("type", "type", NamedTransform::ComposerType.bind(asset_type))
            .transform("version", "version", NamedTransform::Version.bind(asset_type))
            .rename("version_normalized", "version_normalized")
            .rename("description", "description")
            .rename("keywords", "keywords")
            .rename("homepage", "homepage")
            .rename("license", "license")
            .transform("author", "authors", NamedTransform::Author.bind(asset_type))
            .transform("contributors", "authors", NamedTransform::Contributors.bind(asset_type))
            .rename("time", "time")
            .transform("bin", "bin", NamedTransform::Array.bind(asset_type))
            .rename("source", "source")
            .rename("dist", "dist")
            .dependency("dependencies", "require")
            .dependency("devDependencies", "require-dev");

        EXTRA_KEYS.iter().fold(rules, |rules, (source, suffix)| {
            rules.extra_rename(source, &format!("{}-{}", asset_type.vendor_name(), suffix))
        })
    }
}

impl PackageConverter for NpmPackageConverter {
    fn convert(&self, asset_type: &dyn AssetType, manifest: &Manifest) -> Result<Package> {
        FieldMapper::new(asset_type).convert(manifest, &Self::rules(asset_type))
    }
}
