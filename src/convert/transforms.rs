// src/convert/transforms.rs

//! Reusable key transforms shared by the built-in converters and rule tables

use crate::asset::AssetType;
use crate::error::{Error, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

/// `Name <email> (homepage)`, every part optional
static PERSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([^<(]*?)\s*(?:<([^>]*)>)?\s*(?:\(([^)]*)\))?\s*$").unwrap()
});

/// Transforms that can be referenced by name from a rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum NamedTransform {
    /// Translate a single version into the destination grammar
    Version,
    /// Prefix a package name with the asset vendor (`npm-asset/<name>`)
    VendorName,
    /// Always emit the asset type's Composer package type
    ComposerType,
    /// Wrap a scalar into a one-element list
    Array,
    /// Normalize an author into a list of person objects
    Author,
    /// Append contributors to the authors collected so far
    Contributors,
}

impl NamedTransform {
    /// Run the transform for `asset_type`
    pub fn apply(
        self,
        asset_type: &dyn AssetType,
        value: Option<&Value>,
        previous: Option<&Value>,
    ) -> Result<Option<Value>> {
        match self {
            Self::Version => convert_version(asset_type, value),
            Self::VendorName => Ok(vendor_name(asset_type, value)),
            Self::ComposerType => Ok(Some(Value::String(asset_type.composer_type()))),
            Self::Array => Ok(value.map(to_array)),
            Self::Author => Ok(value.and_then(|v| non_empty(persons(v)))),
            Self::Contributors => Ok(value.and_then(|v| {
                let mut authors = previous
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default();
                authors.extend(persons(v));
                non_empty(authors)
            })),
        }
    }

    /// Bind the transform to an asset type for use in a key rule
    pub fn bind<'a>(
        self,
        asset_type: &'a dyn AssetType,
    ) -> impl Fn(Option<&Value>, Option<&Value>) -> Result<Option<Value>> + Send + Sync + 'a {
        move |value: Option<&Value>, previous: Option<&Value>| {
            self.apply(asset_type, value, previous)
        }
    }
}

fn convert_version(asset_type: &dyn AssetType, value: Option<&Value>) -> Result<Option<Value>> {
    let version = match value {
        None => return Ok(None),
        Some(Value::String(version)) => version.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => {
            return Err(Error::invalid_version(
                other.to_string(),
                "version is not a string",
            ));
        }
    };

    let converted = asset_type.version_converter().convert_version(&version)?;
    Ok(Some(Value::String(converted)))
}

fn vendor_name(asset_type: &dyn AssetType, value: Option<&Value>) -> Option<Value> {
    match value? {
        Value::String(name) => Some(Value::String(format!(
            "{}/{}",
            asset_type.vendor_name(),
            name
        ))),
        other => {
            warn!("Ignoring non-string package name {}", other);
            None
        }
    }
}

fn to_array(value: &Value) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) => value.clone(),
        scalar => Value::Array(vec![scalar.clone()]),
    }
}

fn non_empty(list: Vec<Value>) -> Option<Value> {
    if list.is_empty() {
        None
    } else {
        Some(Value::Array(list))
    }
}

/// Normalize one person or a list of persons
fn persons(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.iter().filter_map(person).collect(),
        single => person(single).into_iter().collect(),
    }
}

fn person(value: &Value) -> Option<Value> {
    match value {
        Value::String(s) => Some(parse_person(s)),
        Value::Object(_) => Some(value.clone()),
        _ => None,
    }
}

/// Parse an npm person string such as `Barney <b@rubble.com> (http://b.com)`
pub fn parse_person(s: &str) -> Value {
    let mut person = Map::new();

    if let Some(caps) = PERSON_RE.captures(s) {
        for (index, key) in [(1, "name"), (2, "email"), (3, "homepage")] {
            if let Some(m) = caps.get(index).filter(|m| !m.as_str().trim().is_empty()) {
                person.insert(key.to_string(), Value::String(m.as_str().trim().to_string()));
            }
        }
    }

    if person.is_empty() {
        person.insert("name".to_string(), Value::String(s.trim().to_string()));
    }

    Value::Object(person)
}
