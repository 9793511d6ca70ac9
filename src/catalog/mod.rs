//! Capability catalog: fragments, plugin options tables and bundles
//!
//! This module contains the catalog components:
//! - `capability`: Capability kinds and entries
//! - `repository`: The `(kind, identifier)` registry of capabilities
//! - `bundle`: Named presets expanding to capability identifiers
//! - `builtin`: The catalog embedded in the binary

mod builtin;
pub mod bundle;
pub mod capability;
pub mod repository;

pub use bundle::{Bundle, BundleCatalog};
pub use capability::{Capability, CapabilityKind, PluginMetadata};
pub use repository::{AddonRepository, PluginTable};

use crate::constants::catalog::{
    ADDONS_DIR, BUNDLES_TABLE, ELEVENTY_PLUGINS_TABLE, MARKDOWN_PLUGINS_TABLE,
    PLUGINS_DIR, TABLE_EXTENSIONS,
};
use crate::error::Result;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Everything the composer reads during a run.
#[derive(Debug, Default)]
pub struct Catalog {
    pub addons: AddonRepository,
    pub bundles: BundleCatalog,
}

impl Catalog {
    /// Loads the catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        let plugins: PluginTable = serde_yaml::from_str(builtin::ELEVENTY_PLUGINS)?;
        let markdown_plugins: PluginTable = serde_yaml::from_str(builtin::MARKDOWN_PLUGINS)?;
        let bundles: IndexMap<String, Bundle> = serde_yaml::from_str(builtin::BUNDLES)?;

        let mut addons = AddonRepository::new(plugins, markdown_plugins);
        for (path, text) in builtin::ADDONS {
            addons.insert_fragment(Path::new(path), text)?;
        }

        Ok(Self { addons, bundles: BundleCatalog::new(bundles) })
    }

    /// Loads a catalog directory.
    ///
    /// Expected layout:
    /// - `addons/{filters,shortcodes,collections}/**/<id>.js`
    /// - `plugins/eleventy.{yaml,yml,json}` and `plugins/markdown.{yaml,yml,json}`
    /// - `bundles.{yaml,yml,json}`
    ///
    /// Missing tables are treated as empty.
    pub fn load<P: AsRef<Path>>(catalog_root: P) -> Result<Self> {
        let catalog_root = catalog_root.as_ref();
        log::debug!("Loading catalog from '{}'", catalog_root.display());

        let plugins_dir = catalog_root.join(PLUGINS_DIR);
        let plugins: PluginTable =
            load_table(&plugins_dir, ELEVENTY_PLUGINS_TABLE)?.unwrap_or_default();
        let markdown_plugins: PluginTable =
            load_table(&plugins_dir, MARKDOWN_PLUGINS_TABLE)?.unwrap_or_default();
        let bundles: IndexMap<String, Bundle> =
            load_table(catalog_root, BUNDLES_TABLE)?.unwrap_or_default();

        let addons = AddonRepository::from_dir(
            catalog_root.join(ADDONS_DIR),
            plugins,
            markdown_plugins,
        )?;

        Ok(Self { addons, bundles: BundleCatalog::new(bundles) })
    }
}

/// Reads `<dir>/<stem>.<ext>` for the first existing table extension.
fn load_table<T: DeserializeOwned>(dir: &Path, stem: &str) -> Result<Option<T>> {
    for extension in TABLE_EXTENSIONS {
        let path: PathBuf = dir.join(format!("{stem}.{extension}"));
        if !path.is_file() {
            continue;
        }
        log::debug!("Reading catalog table '{}'", path.display());
        let content = std::fs::read_to_string(&path)?;
        let table = match *extension {
            "json" => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        return Ok(Some(table));
    }
    Ok(None)
}
