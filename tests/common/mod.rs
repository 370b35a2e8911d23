// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use asset_bridge::Manifest;
use serde_json::Value;

/// Decode a manifest fixture from JSON text.
pub fn manifest(json: &str) -> Manifest {
    match serde_json::from_str(json).unwrap() {
        Value::Object(map) => map,
        other => panic!("manifest fixture must be an object, got {}", other),
    }
}

/// A realistic npm package.json.
pub const NPM_MANIFEST: &str = r#"{
    "name": "express",
    "description": "Fast, unopinionated, minimalist web framework",
    "version": "4.0.0-rc4",
    "author": "TJ Holowaychuk <tj@vision-media.ca>",
    "contributors": [
        "Aaron Heckmann <aaron.heckmann+github@gmail.com>",
        {"name": "Ciaran Jessup", "email": "ciaranj@gmail.com"}
    ],
    "keywords": ["express", "framework", "web"],
    "repository": {"type": "git", "url": "git://github.com/visionmedia/express"},
    "license": "MIT",
    "dependencies": {
        "accepts": "1.0.0",
        "type-is": "~1.0",
        "range-parser": "1.0.0 - 1.2.0",
        "cookie": ">= 0.1.0 < 0.2",
        "debug": ">=0.7.3 || 1.x",
        "escape-html": "*"
    },
    "devDependencies": {
        "mocha": "^1.17.1",
        "should": "~3.1.3"
    },
    "engines": {"node": ">= 0.10.0"},
    "scripts": {"test": "mocha"}
}"#;

/// A realistic bower.json.
pub const BOWER_MANIFEST: &str = r#"{
    "name": "bootstrap",
    "version": "3.1.1",
    "main": ["./dist/css/bootstrap.css", "./dist/js/bootstrap.js"],
    "ignore": ["**/.*", "_config.yml"],
    "dependencies": {"jquery": ">= 1.9.0"},
    "keywords": ["css", "js"]
}"#;
