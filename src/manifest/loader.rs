//! Manifest loading: defaults, file and inline sources, validation

use crate::constants::{defaults, MANIFEST_FILENAMES, STDIN_INDICATOR};
use crate::engine::EngineVersion;
use crate::error::{Error, Result};
use crate::ioutils::read_from;
use crate::manifest::schema::validate_manifest_document;
use crate::manifest::types::ProjectManifest;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Where the pieces of a manifest come from, lowest precedence first.
#[derive(Debug, Default, Clone)]
pub struct ManifestSources {
    /// Manifest file (`.json`, `.yaml` or `.yml`).
    pub file: Option<PathBuf>,
    /// Inline JSON, or `-` to read JSON from stdin.
    pub answers: Option<String>,
    /// Project name overriding whatever the other sources say.
    pub project: Option<String>,
}

/// Default manifest document for an engine version.
pub fn default_document(version: &EngineVersion) -> Value {
    json!({
        "project": defaults::PROJECT,
        "bundles": [],
        "filters": defaults::FILTERS,
        "shortcodes": [],
        "collections": [],
        "plugins": [],
        "markdownPlugins": [],
        "properties": {
            "input": defaults::INPUT,
            "output": defaults::OUTPUT,
            "data": defaults::DATA,
            "includes": defaults::INCLUDES,
            "configFile": version.default_config_file(),
        },
        "assets": {
            "parent": defaults::ASSETS_PARENT,
            "css": defaults::ASSETS_CSS,
            "js": defaults::ASSETS_JS,
            "img": defaults::ASSETS_IMG,
        },
    })
}

/// Finds a manifest file in `dir` by the conventional names.
pub fn find_manifest_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    MANIFEST_FILENAMES
        .iter()
        .map(|name| dir.as_ref().join(name))
        .find(|path| path.is_file())
}

/// Reads a manifest file into a JSON value according to its extension.
pub fn read_manifest_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::ManifestNotFound { path: path.display().to_string() });
    }
    let content = std::fs::read_to_string(path)?;
    let value = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&content)?,
        _ => serde_json::from_str(&content)?,
    };
    Ok(value)
}

/// Builds the manifest for a run.
///
/// Defaults are overlaid by the manifest file, then by inline answers, then by
/// the explicit project name. The merged document is checked against the
/// manifest schema, deserialized, and validated.
pub fn load_manifest(
    sources: &ManifestSources,
    version: &EngineVersion,
) -> Result<ProjectManifest> {
    let mut document = default_document(version);

    if let Some(file) = &sources.file {
        log::debug!("Reading manifest file '{}'", file.display());
        merge(&mut document, read_manifest_file(file)?);
    }

    if let Some(answers) = &sources.answers {
        let buf = if answers == STDIN_INDICATOR {
            read_from(std::io::stdin())?
        } else {
            answers.clone()
        };
        let value: Value = serde_json::from_str(&buf)?;
        if !value.is_object() {
            return Err(Error::InvalidManifest(
                "inline answers must be a JSON object".to_string(),
            ));
        }
        merge(&mut document, value);
    }

    if let Some(project) = &sources.project {
        document["project"] = Value::String(project.clone());
    }

    validate_manifest_document(&document)?;
    let manifest: ProjectManifest = serde_json::from_value(document)?;
    manifest.validate()?;
    log::debug!("Resolved manifest: {manifest:?}");
    Ok(manifest)
}

/// Deep-merges `overlay` into `base`. Objects merge key by key; anything else replaces.
pub fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
