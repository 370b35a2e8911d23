// src/asset/bower.rs

//! Bower registry asset type

use super::AssetType;
use crate::convert::{BowerPackageConverter, PackageConverter};
use crate::version::{SemverConverter, VersionConverter};

/// Packages from the Bower registry, namespaced as `bower-asset/<name>`
pub struct BowerAssetType {
    package_converter: Box<dyn PackageConverter>,
    version_converter: Box<dyn VersionConverter>,
}

impl BowerAssetType {
    /// Create the bower asset type with its default converters
    pub fn new() -> Self {
        Self::with_package_converter(Box::new(BowerPackageConverter))
    }

    /// Create the bower asset type with a custom package converter
    pub fn with_package_converter(package_converter: Box<dyn PackageConverter>) -> Self {
        Self::with_converters(package_converter, Box::new(SemverConverter::new()))
    }

    /// Create the bower asset type with custom converters
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

impl Default for BowerAssetType {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetType for BowerAssetType {
    fn name(&self) -> &str {
        "bower"
    }

    fn vendor_name(&self) -> &str {
        "bower-asset"
    }

    fn filename(&self) -> &str {
        "bower.json"
    }

    fn version_converter(&self) -> &dyn VersionConverter {
        self.version_converter.as_ref()
    }

    fn package_converter(&self) -> &dyn PackageConverter {
        self.package_converter.as_ref()
    }
}
