// src/commands/convert.rs

//! Manifest conversion command

use anyhow::{anyhow, bail, Context, Result};
use asset_bridge::{convert_manifest, AssetKind, Manifest, RuleTable};
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Convert a manifest file and print the package JSON
pub fn cmd_convert(
    manifest_path: &str,
    asset_type: Option<&str>,
    rules_path: Option<&str>,
    compact: bool,
) -> Result<()> {
    let output = convert_file(
        Path::new(manifest_path),
        asset_type,
        rules_path.map(Path::new),
        compact,
    )?;
    println!("{}", output);
    Ok(())
}

/// Convert a manifest file into rendered package JSON
fn convert_file(
    manifest_path: &Path,
    asset_type: Option<&str>,
    rules_path: Option<&Path>,
    compact: bool,
) -> Result<String> {
    let kind = resolve_kind(manifest_path, asset_type)?;
    info!("Converting {} as {} manifest", manifest_path.display(), kind);

    let content = std::fs::read_to_string(manifest_path)
        .with_context(|| format!("Failed to read manifest {}", manifest_path.display()))?;
    let manifest: Manifest = match serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse manifest {}", manifest_path.display()))?
    {
        Value::Object(map) => map,
        _ => bail!("Manifest {} is not a JSON object", manifest_path.display()),
    };

    let asset = match rules_path {
        Some(path) => {
            let table = RuleTable::load(path)
                .with_context(|| format!("Failed to load rule table {}", path.display()))?;
            info!("Using rule table {}", path.display());
            kind.create_with(Box::new(table))
        }
        None => kind.create(),
    };

    let package = convert_manifest(&*asset, &manifest)
        .with_context(|| format!("Failed to convert {}", manifest_path.display()))?;

    let rendered = if compact {
        serde_json::to_string(&package)?
    } else {
        serde_json::to_string_pretty(&package)?
    };
    Ok(rendered)
}

/// Pick the asset kind from the flag, else from the manifest file name
fn resolve_kind(manifest_path: &Path, asset_type: Option<&str>) -> Result<AssetKind> {
    if let Some(name) = asset_type {
        return AssetKind::from_str(name)
            .map_err(|_| anyhow!("Unknown asset type: {} (expected npm or bower)", name));
    }

    Ok(manifest_path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(AssetKind::from_filename)
        .unwrap_or(AssetKind::Npm))
}
