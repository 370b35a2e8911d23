// tests/conversion_integration.rs
//! Integration tests for asset manifest to Composer package conversion
//!
//! These tests validate the end-to-end conversion of realistic npm and bower
//! manifests, including:
//! - Vendor namespacing of names and dependencies
//! - Range translation inside dependency blocks
//! - Extra key collection
//! - All-or-nothing failure on invalid ranges
//! - Rule tables loaded from TOML files

mod common;

use asset_bridge::{
    convert_manifest, AssetKind, AssetType, Error, FieldMapper, NpmAssetType, RuleSet, RuleTable,
};
use common::{manifest, BOWER_MANIFEST, NPM_MANIFEST};
use serde_json::json;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

// =============================================================================
// BUILT-IN CONVERTERS
// =============================================================================

#[test]
fn test_npm_manifest_conversion() {
    let asset = AssetKind::Npm.create();
    let package = convert_manifest(&*asset, &manifest(NPM_MANIFEST)).unwrap();

    assert_eq!(package["name"], json!("npm-asset/express"));
    assert_eq!(package["type"], json!("npm-asset-library"));
    assert_eq!(package["version"], json!("4.0.0-rc4"));
    assert_eq!(package["license"], json!("MIT"));
    assert_eq!(
        package["authors"],
        json!([
            {"name": "TJ Holowaychuk", "email": "tj@vision-media.ca"},
            {"name": "Aaron Heckmann", "email": "aaron.heckmann+github@gmail.com"},
            {"name": "Ciaran Jessup", "email": "ciaranj@gmail.com"}
        ])
    );
    assert_eq!(
        package["require"],
        json!({
            "npm-asset/accepts": "1.0.0",
            "npm-asset/type-is": ">=1.0,<1.1",
            "npm-asset/range-parser": ">=1.0.0,<=1.2.0",
            "npm-asset/cookie": ">=0.1.0,<0.2",
            "npm-asset/debug": ">=0.7.3|1.x",
            "npm-asset/escape-html": "*"
        })
    );
    assert_eq!(
        package["require-dev"],
        json!({"npm-asset/mocha": "~1.17.1", "npm-asset/should": ">=3.1.3,<3.2"})
    );
    assert_eq!(
        package["extra"],
        json!({
            "npm-asset-repository": {"type": "git", "url": "git://github.com/visionmedia/express"},
            "npm-asset-scripts": {"test": "mocha"},
            "npm-asset-engines": {"node": ">= 0.10.0"}
        })
    );
}

#[test]
fn test_bower_manifest_conversion() {
    let asset = AssetKind::Bower.create();
    let package = convert_manifest(&*asset, &manifest(BOWER_MANIFEST)).unwrap();

    assert_eq!(package["name"], json!("bower-asset/bootstrap"));
    assert_eq!(package["version"], json!("3.1.1"));
    assert_eq!(package["require"], json!({"bower-asset/jquery": ">=1.9.0"}));
    assert_eq!(
        package["extra"]["bower-asset-main"],
        json!(["./dist/css/bootstrap.css", "./dist/js/bootstrap.js"])
    );
    assert!(!package.contains_key("require-dev"));
}

#[test]
fn test_dependency_keys_match_source_exactly() {
    let asset = AssetKind::Npm.create();
    let source = manifest(NPM_MANIFEST);
    let package = convert_manifest(&*asset, &source).unwrap();

    let expected: BTreeSet<String> = source["dependencies"]
        .as_object()
        .unwrap()
        .keys()
        .map(|name| format!("{}/{}", asset.vendor_name(), name))
        .collect();
    let actual: BTreeSet<String> = package["require"].as_object().unwrap().keys().cloned().collect();

    assert_eq!(actual, expected);
}

#[test]
fn test_invalid_range_fails_whole_manifest() {
    let asset = AssetKind::Npm.create();
    let broken = manifest(
        r#"{"name": "broken", "dependencies": {"good": "~1.0", "bad": "git://example.com/bad.git"}}"#,
    );

    match convert_manifest(&*asset, &broken) {
        Err(Error::InvalidVersion { version, .. }) => assert!(version.contains("git")),
        other => panic!("expected invalid version, got {:?}", other.map(|p| p.len())),
    }
}

// =============================================================================
// FIELD MAPPER
// =============================================================================

#[test]
fn test_extra_key_absent_when_no_rule_produces_value() {
    let asset = NpmAssetType::new();
    let rules = RuleSet::new()
        .rename("name", "name")
        .extra_rename("main", "main")
        .extra_transform("private", "private", |_, _| Ok(None));
    let package = FieldMapper::new(&asset)
        .convert(&manifest(r#"{"name": "x", "private": true}"#), &rules)
        .unwrap();

    assert_eq!(package.len(), 1);
    assert!(!package.contains_key("extra"));
}

#[test]
fn test_concurrent_conversions() {
    let asset = NpmAssetType::new();
    let source = manifest(NPM_MANIFEST);
    let expected = convert_manifest(&asset, &source).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| convert_manifest(&asset, &source).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

// =============================================================================
// RULE TABLES
// =============================================================================

#[test]
fn test_rule_table_file_conversion() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(
        &path,
        r#"
[keys]
name = { target = "name", transform = "vendor-name" }
type = { target = "type", transform = "composer-type" }
version = { target = "version", transform = "version" }

[dependencies]
dependencies = "require"
"#,
    )
    .unwrap();

    let table = RuleTable::load(&path).unwrap();
    let asset = AssetKind::Bower.create_with(Box::new(table));
    let package = convert_manifest(&*asset, &manifest(BOWER_MANIFEST)).unwrap();

    assert_eq!(
        serde_json::Value::Object(package),
        json!({
            "name": "bower-asset/bootstrap",
            "type": "bower-asset-library",
            "version": "3.1.1",
            "require": {"bower-asset/jquery": ">=1.9.0"}
        })
    );
}

#[test]
fn test_malformed_rule_table_is_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(&path, "[keys]\nname = [\"name\", \"upper\"]\n").unwrap();

    assert!(matches!(RuleTable::load(&path), Err(Error::Configuration(_))));
}

#[test]
fn test_missing_rule_table_is_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        RuleTable::load(&dir.path().join("nope.toml")),
        Err(Error::Io(_))
    ));
}
