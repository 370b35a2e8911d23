// src/convert/rules.rs

//! Converter rule tables loaded from TOML
//!
//! Lets callers describe a converter without writing Rust:
//!
//! ```toml
//! extra_key = "extra"
//!
//! [keys]
//! name = { target = "name", transform = "vendor-name" }
//! description = "description"
//!
//! [dependencies]
//! dependencies = "require"
//!
//! [extra]
//! main = "npm-asset-main"
//! ```
//!
//! A rule is either a target key name or a `{ target, transform }` table
//! naming one of the [`NamedTransform`]s. Every rule is checked when the
//! table is loaded, so a malformed table never reaches a manifest.

use super::mapper::{
    DependencyRule, FieldMapper, KeyRule, Manifest, Package, RuleSet, DEFAULT_EXTRA_KEY,
};
use super::transforms::NamedTransform;
use super::PackageConverter;
use crate::asset::AssetType;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::debug;

/// Raw layout of a rule table file
#[derive(Debug, Deserialize)]
struct RuleTableFile {
    extra_key: Option<String>,
    #[serde(default)]
    keys: toml::Table,
    #[serde(default)]
    dependencies: toml::Table,
    #[serde(default)]
    extra: toml::Table,
    #[serde(flatten)]
    unknown: toml::Table,
}

/// A validated key rule, not yet bound to an asset type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSpec {
    Rename(String),
    Transform(String, NamedTransform),
}

impl RuleSpec {
    fn parse(section: &str, source: &str, value: &toml::Value) -> Result<Self> {
        let spec = match value {
            toml::Value::String(target) => Self::Rename(target.clone()),
            toml::Value::Table(table) => {
                let target = table.get("target").and_then(toml::Value::as_str);
                let transform = table.get("transform").and_then(toml::Value::as_str);
                match (target, transform, table.len()) {
                    (Some(target), Some(transform), 2) => {
                        let transform = NamedTransform::from_str(transform).map_err(|_| {
                            Error::configuration(format!(
                                "[{}] {}: unknown transform \"{}\" (available: {})",
                                section,
                                source,
                                transform,
                                NamedTransform::iter()
                                    .map(|t| t.to_string())
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            ))
                        })?;
                        Self::Transform(target.to_string(), transform)
                    }
                    _ => {
                        return Err(Error::configuration(format!(
                            "[{}] {}: a rule table needs exactly a string `target` and a string `transform`",
                            section, source
                        )));
                    }
                }
            }
            other => {
                return Err(Error::configuration(format!(
                    "[{}] {}: a rule must be a target key or a {{ target, transform }} table, found {}",
                    section,
                    source,
                    other.type_str()
                )));
            }
        };

        if spec.target().is_empty() {
            return Err(Error::configuration(format!(
                "[{}] {}: target key must not be empty",
                section, source
            )));
        }
        Ok(spec)
    }

    /// Target key written by this rule
    pub fn target(&self) -> &str {
        match self {
            Self::Rename(target) | Self::Transform(target, _) => target,
        }
    }

    fn bind<'a>(&self, asset_type: &'a dyn AssetType) -> KeyRule<'a> {
        match self {
            Self::Rename(target) => KeyRule::Rename(target.clone()),
            Self::Transform(target, transform) => {
                KeyRule::Transform(target.clone(), Box::new(transform.bind(asset_type)))
            }
        }
    }
}

/// A converter described by a TOML rule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    keys: Vec<(String, RuleSpec)>,
    dependencies: Vec<DependencyRule>,
    extras: Vec<(String, RuleSpec)>,
    extra_key: String,
}

impl RuleTable {
    /// Parse and validate a rule table
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: RuleTableFile = toml::from_str(content)?;

        if let Some(section) = file.unknown.keys().next() {
            return Err(Error::configuration(format!(
                "unknown rule table entry \"{}\" (expected extra_key, keys, dependencies, extra)",
                section
            )));
        }

        let extra_key = file
            .extra_key
            .unwrap_or_else(|| DEFAULT_EXTRA_KEY.to_string());
        if extra_key.is_empty() {
            return Err(Error::configuration("extra_key must not be empty"));
        }

        let keys = parse_section("keys", &file.keys)?;
        let extras = parse_section("extra", &file.extra)?;

        let dependencies = file
            .dependencies
            .iter()
            .map(|(source, value)| match value.as_str() {
                Some(target) if !target.is_empty() => Ok(DependencyRule {
                    source: source.clone(),
                    target: target.to_string(),
                }),
                _ => Err(Error::configuration(format!(
                    "[dependencies] {}: target must be a non-empty string",
                    source
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Loaded rule table: {} keys, {} dependency blocks, {} extras",
            keys.len(),
            dependencies.len(),
            extras.len()
        );

        Ok(Self {
            keys,
            dependencies,
            extras,
            extra_key,
        })
    }

    /// Read and validate a rule table file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Bind the table to an asset type
    pub fn rules<'a>(&self, asset_type: &'a dyn AssetType) -> RuleSet<'a> {
        RuleSet {
            keys: bind_all(&self.keys, asset_type),
            dependencies: self.dependencies.clone(),
            extras: bind_all(&self.extras, asset_type),
            extra_key: self.extra_key.clone(),
        }
    }
}

impl PackageConverter for RuleTable {
    fn convert(&self, asset_type: &dyn AssetType, manifest: &Manifest) -> Result<Package> {
        FieldMapper::new(asset_type).convert(manifest, &self.rules(asset_type))
    }
}

fn parse_section(section: &str, table: &toml::Table) -> Result<Vec<(String, RuleSpec)>> {
    table
        .iter()
        .map(|(source, value)| Ok((source.clone(), RuleSpec::parse(section, source, value)?)))
        .collect()
}

fn bind_all<'a>(
    specs: &[(String, RuleSpec)],
    asset_type: &'a dyn AssetType,
) -> Vec<(String, KeyRule<'a>)> {
    specs
        .iter()
        .map(|(source, spec)| (source.clone(), spec.bind(asset_type)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::tests::StubAssetType;
    use serde_json::json;

    const TABLE: &str = r#"
extra_key = "meta"

[keys]
name = { target = "name", transform = "vendor-name" }
version = { target = "version", transform = "version" }
description = "summary"

[dependencies]
dependencies = "require"

[extra]
main = "asset-main"
"#;

    #[test]
    fn test_load_rule_table_preserves_order() {
        let table = RuleTable::from_toml(TABLE).unwrap();
        let sources: Vec<_> = table.keys.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(sources, vec!["name", "version", "description"]);
        assert_eq!(
            table.keys[0].1,
            RuleSpec::Transform("name".to_string(), NamedTransform::VendorName)
        );
        assert_eq!(table.keys[2].1, RuleSpec::Rename("summary".to_string()));
        assert_eq!(table.extra_key, "meta");
    }

    #[test]
    fn test_rule_table_converts_manifest() {
        let table = RuleTable::from_toml(TABLE).unwrap();
        let manifest: Manifest = serde_json::from_value(json!({
            "name": "foo",
            "version": "2.0.0-rc",
            "description": "Foo",
            "dependencies": {"bar": "^1.0"},
            "main": "foo.js"
        }))
        .unwrap();

        let asset = StubAssetType::new();
        let package = table.convert(&asset, &manifest).unwrap();
        assert_eq!(
            package,
            serde_json::from_value::<Package>(json!({
                "name": "stub-asset/foo",
                "version": "2.0.0-rc1",
                "summary": "Foo",
                "require": {"stub-asset/bar": "~1.0"},
                "meta": {"asset-main": "foo.js"}
            }))
            .unwrap()
        );
    }

    #[test]
    fn test_empty_table_is_valid() {
        let table = RuleTable::from_toml("").unwrap();
        assert_eq!(table.extra_key, DEFAULT_EXTRA_KEY);
        assert!(table.keys.is_empty());
    }

    fn config_error(content: &str) -> String {
        match RuleTable::from_toml(content) {
            Err(Error::Configuration(msg)) => msg,
            other => panic!("expected configuration error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_rule_with_wrong_shape() {
        assert!(config_error("[keys]\nname = 3").contains("found integer"));
        assert!(config_error("[keys]\nname = { target = \"name\" }").contains("exactly"));
        assert!(
            config_error("[keys]\nname = { target = \"name\", transform = \"x\", y = 1 }")
                .contains("exactly")
        );
    }

    #[test]
    fn test_unknown_transform() {
        let msg = config_error("[extra]\nmain = { target = \"m\", transform = \"shout\" }");
        assert!(msg.contains("unknown transform \"shout\""));
        assert!(msg.contains("vendor-name"));
    }

    #[test]
    fn test_empty_targets_and_bad_dependencies() {
        assert!(config_error("[keys]\nname = \"\"").contains("must not be empty"));
        assert!(config_error("[dependencies]\ndependencies = 1").contains("non-empty string"));
        assert!(config_error("extra_key = \"\"").contains("extra_key"));
    }

    #[test]
    fn test_unknown_section() {
        assert!(config_error("[scripts]\nx = \"y\"").contains("scripts"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(RuleTable::from_toml("[keys"), Err(Error::Toml(_))));
    }
}
