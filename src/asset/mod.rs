// src/asset/mod.rs

//! Asset registry kinds
//!
//! Each registry kind (npm, bower) is an [`AssetType`]: it knows the vendor
//! namespace its packages live under on the Composer side, the manifest file
//! it is read from, and which converters turn that manifest into a package.

mod bower;
mod npm;

pub use bower::BowerAssetType;
pub use npm::NpmAssetType;

use crate::convert::PackageConverter;
use crate::version::VersionConverter;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A registry kind bound to its converters
pub trait AssetType: Send + Sync {
    /// Registry name (e.g. "npm")
    fn name(&self) -> &str;

    /// Vendor namespace prepended to package names (e.g. "npm-asset")
    fn vendor_name(&self) -> &str;

    /// Composer package type of converted packages
    fn composer_type(&self) -> String {
        format!("{}-library", self.vendor_name())
    }

    /// Manifest file name in a package tree (e.g. "package.json")
    fn filename(&self) -> &str;

    /// Translator used for versions and dependency ranges
    fn version_converter(&self) -> &dyn VersionConverter;

    /// Converter turning a manifest of this kind into a package
    fn package_converter(&self) -> &dyn PackageConverter;
}

/// Supported registry kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AssetKind {
    Npm,
    Bower,
}

impl AssetKind {
    /// Create the asset type with its default converters
    pub fn create(self) -> Box<dyn AssetType> {
        match self {
            Self::Npm => Box::new(NpmAssetType::new()),
            Self::Bower => Box::new(BowerAssetType::new()),
        }
    }

    /// Create the asset type with a custom package converter
    pub fn create_with(self, package_converter: Box<dyn PackageConverter>) -> Box<dyn AssetType> {
        match self {
            Self::Npm => Box::new(NpmAssetType::with_package_converter(package_converter)),
            Self::Bower => Box::new(BowerAssetType::with_package_converter(package_converter)),
        }
    }

    /// Detect the kind from a manifest file name
    pub fn from_filename(filename: &str) -> Option<Self> {
        match filename {
            "package.json" => Some(Self::Npm),
            "bower.json" => Some(Self::Bower),
            _ => None,
        }
    }
}
