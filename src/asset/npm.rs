// src/asset/npm.rs

//! npm registry asset type

use super::AssetType;
use crate::convert::{NpmPackageConverter, PackageConverter};
use crate::version::{SemverConverter, VersionConverter};

/// Packages from the npm registry, namespaced as `npm-asset/<name>`
pub struct NpmAssetType {
    package_converter: Box<dyn PackageConverter>,
    version_converter: Box<dyn VersionConverter>,
}

impl NpmAssetType {
    /// Create the npm asset type with its default converters
    pub fn new() -> Self {
        Self::with_package_converter(Box::new(NpmPackageConverter))
    }

    /// Create the npm asset type with a custom package converter
    pub fn with_package_converter(package_converter: Box<dyn PackageConverter>) -> Self {
        Self::with_converters(package_converter, Box::new(SemverConverter::new()))
    }

    /// Create the npm asset type with custom converters
    pub fn with_converters(
        package_converter: Box<dyn PackageConverter>,
        version_converter: Box<dyn VersionConverter>,
    ) -> Self {
        Self {
            package_converter,
            version_converter,
        }
    }
}

impl Default for NpmAssetType {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetType for NpmAssetType {
    fn name(&self) -> &str {
        "npm"
    }

    fn vendor_name(&self) -> &str {
        "npm-asset"
    }

    fn filename(&self) -> &str {
        "package.json"
    }

    fn version_converter(&self) -> &dyn VersionConverter {
        self.version_converter.as_ref()
    }

    fn package_converter(&self) -> &dyn PackageConverter {
        self.package_converter.as_ref()
    }
}
