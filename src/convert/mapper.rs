// src/convert/mapper.rs

//! Declarative field mapping from asset manifests to Composer packages
//!
//! A conversion is described by three ordered rule sets:
//!
//! 1. key rules copy or transform top-level manifest keys
//! 2. dependency rules rewrite whole dependency blocks, namespacing every
//!    dependency under the asset type's vendor and translating its range
//! 3. extra rules work like key rules but write into the nested `extra` map
//!
//! Rules run in order, so a transform sees the value written by any earlier
//! rule targeting the same key.

use crate::asset::AssetType;
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, warn};

/// Untyped manifest decoded from an asset registry
pub type Manifest = Map<String, Value>;

/// Untyped Composer package descriptor
pub type Package = Map<String, Value>;

/// Default name of the nested extra map
pub const DEFAULT_EXTRA_KEY: &str = "extra";

/// Transform applied to `(source value, current target value)`
///
/// Returning `Ok(None)` leaves the target key untouched.
pub type KeyTransform<'a> =
    Box<dyn Fn(Option<&Value>, Option<&Value>) -> Result<Option<Value>> + Send + Sync + 'a>;

/// How a single source key lands in the output
pub enum KeyRule<'a> {
    /// Copy the value under a new key when the source key is present
    Rename(String),
    /// Run a transform, even when the source key is absent
    Transform(String, KeyTransform<'a>),
}

impl KeyRule<'_> {
    /// Target key written by this rule
    pub fn target(&self) -> &str {
        match self {
            Self::Rename(target) | Self::Transform(target, _) => target,
        }
    }

    /// Apply the rule for `source_key` of `source` onto `target`
    ///
    /// A key holding `null` counts as absent.
    fn apply(
        &self,
        source: &Map<String, Value>,
        source_key: &str,
        target: &mut Map<String, Value>,
    ) -> Result<()> {
        match self {
            Self::Rename(target_key) => {
                if let Some(value) = source.get(source_key).filter(|v| !v.is_null()) {
                    target.insert(target_key.clone(), value.clone());
                }
            }
            Self::Transform(target_key, transform) => {
                let value = source.get(source_key).filter(|v| !v.is_null());
                let previous = target.get(target_key).filter(|v| !v.is_null());
                match transform(value, previous)? {
                    Some(value) => {
                        target.insert(target_key.clone(), value);
                    }
                    None => debug!("Rule {} -> {} produced no value", source_key, target_key),
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for KeyRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rename(target) => f.debug_tuple("Rename").field(target).finish(),
            Self::Transform(target, _) => f.debug_tuple("Transform").field(target).finish(),
        }
    }
}

/// Rewrite of a whole dependency block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRule {
    /// Dependency block key in the manifest (e.g. `dependencies`)
    pub source: String,
    /// Dependency block key in the package (e.g. `require`)
    pub target: String,
}

/// Ordered key, dependency and extra rules for one conversion
#[derive(Debug)]
pub struct RuleSet<'a> {
    pub keys: Vec<(String, KeyRule<'a>)>,
    pub dependencies: Vec<DependencyRule>,
    pub extras: Vec<(String, KeyRule<'a>)>,
    /// Name of the nested extra map in the output
    pub extra_key: String,
}

impl Default for RuleSet<'_> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            dependencies: Vec::new(),
            extras: Vec::new(),
            extra_key: DEFAULT_EXTRA_KEY.to_string(),
        }
    }
}

impl<'a> RuleSet<'a> {
    /// Create an empty rule set writing extras under `extra`
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `source` to `target`
    pub fn rename(mut self, source: &str, target: &str) -> Self {
        self.keys.push((source.to_string(), KeyRule::Rename(target.to_string())));
        self
    }

    /// Write the result of `transform` to `target`
    pub fn transform<F>(mut self, source: &str, target: &str, transform: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&Value>) -> Result<Option<Value>> + Send + Sync + 'a,
    {
        self.keys.push((
            source.to_string(),
            KeyRule::Transform(target.to_string(), Box::new(transform)),
        ));
        self
    }

    /// Rewrite the dependency block `source` into `target`
    pub fn dependency(mut self, source: &str, target: &str) -> Self {
        self.dependencies.push(DependencyRule {
            source: source.to_string(),
            target: target.to_string(),
        });
        self
    }

    /// Copy `source` to `extra.target`
    pub fn extra_rename(mut self, source: &str, target: &str) -> Self {
        self.extras.push((source.to_string(), KeyRule::Rename(target.to_string())));
        self
    }

    /// Write the result of `transform` to `extra.target`
    pub fn extra_transform<F>(mut self, source: &str, target: &str, transform: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&Value>) -> Result<Option<Value>> + Send + Sync + 'a,
    {
        self.extras.push((
            source.to_string(),
            KeyRule::Transform(target.to_string(), Box::new(transform)),
        ));
        self
    }

    /// Use a different name for the nested extra map
    pub fn with_extra_key(mut self, extra_key: &str) -> Self {
        self.extra_key = extra_key.to_string();
        self
    }

    /// Check the rule tables before any manifest data is read
    pub fn validate(&self) -> Result<()> {
        if self.extra_key.is_empty() {
            return Err(Error::configuration("extra key name must not be empty"));
        }

        for (source, rule) in self.keys.iter().chain(self.extras.iter()) {
            if source.is_empty() {
                return Err(Error::configuration("rule source key must not be empty"));
            }
            if rule.target().is_empty() {
                return Err(Error::configuration(format!(
                    "rule for \"{}\" must name a target key",
                    source
                )));
            }
        }

        for rule in &self.dependencies {
            if rule.source.is_empty() || rule.target.is_empty() {
                return Err(Error::configuration(format!(
                    "dependency rule \"{}\" -> \"{}\" must name both blocks",
                    rule.source, rule.target
                )));
            }
        }

        Ok(())
    }
}

/// Applies rule sets on behalf of one asset type
pub struct FieldMapper<'a> {
    asset_type: &'a dyn AssetType,
}

impl<'a> FieldMapper<'a> {
    /// Create a mapper namespacing dependencies under `asset_type`
    pub fn new(asset_type: &'a dyn AssetType) -> Self {
        Self { asset_type }
    }

    /// Convert a manifest into a package
    ///
    /// Conversion is all-or-nothing: any rule error discards the partial
    /// package.
    pub fn convert(&self, manifest: &Manifest, rules: &RuleSet<'_>) -> Result<Package> {
        rules.validate()?;

        let mut package = Package::new();

        for (source, rule) in &rules.keys {
            rule.apply(manifest, source, &mut package)?;
        }

        for rule in &rules.dependencies {
            self.convert_dependencies(manifest, rule, &mut package)?;
        }

        for (source, rule) in &rules.extras {
            self.convert_extra_key(manifest, source, rule, &mut package, &rules.extra_key)?;
        }

        Ok(package)
    }

    fn convert_extra_key(
        &self,
        manifest: &Manifest,
        source: &str,
        rule: &KeyRule<'_>,
        package: &mut Package,
        extra_key: &str,
    ) -> Result<()> {
        let mut extra = match package.get(extra_key) {
            Some(Value::Object(existing)) => existing.clone(),
            _ => Map::new(),
        };

        rule.apply(manifest, source, &mut extra)?;

        if !extra.is_empty() {
            package.insert(extra_key.to_string(), Value::Object(extra));
        }
        Ok(())
    }

    fn convert_dependencies(
        &self,
        manifest: &Manifest,
        rule: &DependencyRule,
        package: &mut Package,
    ) -> Result<()> {
        let Some(Value::Object(dependencies)) = manifest.get(&rule.source) else {
            return Ok(());
        };

        let converter = self.asset_type.version_converter();
        let vendor = self.asset_type.vendor_name();
        let mut converted = Map::new();

        for (name, range) in dependencies {
            let range = match range {
                Value::String(range) => range.clone(),
                Value::Number(n) => {
                    warn!("Dependency {} has a numeric range {}, using its text", name, n);
                    n.to_string()
                }
                other => {
                    return Err(Error::invalid_version(
                        other.to_string(),
                        format!("range of dependency \"{}\" is not a string", name),
                    ));
                }
            };

            converted.insert(
                format!("{}/{}", vendor, name),
                Value::String(converter.convert_range(&range)?),
            );
        }

        debug!(
            "Converted {} {} dependencies into {}",
            converted.len(),
            rule.source,
            rule.target
        );
        package.insert(rule.target.clone(), Value::Object(converted));
        Ok(())
    }
}
