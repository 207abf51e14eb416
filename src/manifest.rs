use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PreloadError, Result};

#[derive(Debug, Deserialize)]
struct JsonManifest {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlManifest {
    package: Option<TomlPackage>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlPackage {
    name: Option<String>,
}

/// Reads the project name from a `package.json`-style or `Cargo.toml`-style
/// manifest. The format is picked from the file extension.
pub fn project_name(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| PreloadError::config(path, format!("cannot read manifest: {err}")))?;

    let name = if is_toml(path) {
        let manifest: TomlManifest = toml::from_str(&raw)
            .map_err(|err| PreloadError::config(path, format!("malformed manifest: {err}")))?;
        manifest.package.and_then(|pkg| pkg.name).or(manifest.name)
    } else {
        let manifest: JsonManifest = serde_json::from_str(&raw)
            .map_err(|err| PreloadError::config(path, format!("malformed manifest: {err}")))?;
        manifest.name
    };

    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        Some(_) => Err(PreloadError::config(path, "project name is empty")),
        None => Err(PreloadError::config(path, "missing project name field")),
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
