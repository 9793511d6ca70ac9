use crate::catalog::capability::{Capability, CapabilityKind, PluginMetadata};
use crate::constants::catalog::FRAGMENT_EXTENSION;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use indexmap::IndexMap;
use std::path::Path;
use walkdir::WalkDir;

/// Options table mapping a plugin package name to its metadata.
pub type PluginTable = IndexMap<String, PluginMetadata>;

/// Read-only registry of capability fragments and plugin options.
///
/// Built once, then queried by `(kind, identifier)`. When the same pair is
/// offered more than once the first entry wins.
#[derive(Debug, Default)]
pub struct AddonRepository {
    fragments: IndexMap<(CapabilityKind, String), Capability>,
    plugins: PluginTable,
    markdown_plugins: PluginTable,
}

impl AddonRepository {
    pub fn new(plugins: PluginTable, markdown_plugins: PluginTable) -> Self {
        Self { fragments: IndexMap::new(), plugins, markdown_plugins }
    }

    /// Registers a fragment file given its path relative to the addons root.
    ///
    /// The first path component selects the kind and the file stem is the
    /// identifier; nested directories below the kind directory are allowed.
    ///
    /// # Returns
    /// * `Ok(true)` - The fragment was registered
    /// * `Ok(false)` - The path is not a fragment, or the identifier is already taken
    pub fn insert_fragment(&mut self, relative_path: &Path, text: &str) -> Result<bool> {
        if relative_path.extension().and_then(|ext| ext.to_str())
            != Some(FRAGMENT_EXTENSION)
        {
            log::debug!("Skipping non-fragment file '{}'", relative_path.display());
            return Ok(false);
        }

        let kind = relative_path
            .components()
            .next()
            .and_then(|component| component.as_os_str().to_str())
            .and_then(CapabilityKind::from_directory);
        let Some(kind) = kind else {
            log::debug!(
                "Skipping '{}': not below a filters, shortcodes or collections directory",
                relative_path.display()
            );
            return Ok(false);
        };

        let Some(id) = relative_path.file_stem().and_then(|stem| stem.to_str()) else {
            return Ok(false);
        };

        let key = (kind, id.to_string());
        if self.fragments.contains_key(&key) {
            log::debug!(
                "Ignoring duplicate {kind} '{id}' at '{}'",
                relative_path.display()
            );
            return Ok(false);
        }

        let capability = Capability::from_fragment(kind, id, text)?;
        self.fragments.insert(key, capability);
        Ok(true)
    }

    /// Builds a repository from an on-disk addons tree, walked in lexical order.
    pub fn from_dir<P: AsRef<Path>>(
        addons_root: P,
        plugins: PluginTable,
        markdown_plugins: PluginTable,
    ) -> Result<Self> {
        let addons_root = addons_root.as_ref();
        if !addons_root.is_dir() {
            return Err(Error::CatalogError(format!(
                "addons directory '{}' does not exist",
                addons_root.display()
            )));
        }

        let mut repository = Self::new(plugins, markdown_plugins);
        for entry in WalkDir::new(addons_root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative_path = entry.path().strip_prefix(addons_root).map_err(|e| {
                Error::CatalogError(format!(
                    "'{}' is outside the addons directory: {e}",
                    entry.path().display()
                ))
            })?;
            let text = std::fs::read_to_string(entry.path())?;
            if repository.insert_fragment(relative_path, &text)? {
                log::debug!("Registered fragment '{}'", relative_path.to_str_checked()?);
            }
        }
        Ok(repository)
    }

    /// Looks up a capability by kind and identifier.
    ///
    /// # Errors
    /// * `Error::CapabilityNotFound` - No fragment of that kind carries the identifier
    /// * `Error::MissingMetadata` - A plugin identifier is absent from its options table
    pub fn lookup(&self, kind: CapabilityKind, id: &str) -> Result<Capability> {
        match kind {
            CapabilityKind::Plugin | CapabilityKind::MarkdownPlugin => {
                let table = if kind == CapabilityKind::Plugin {
                    &self.plugins
                } else {
                    &self.markdown_plugins
                };
                table
                    .get(id)
                    .map(|metadata| Capability::from_plugin(kind, id, metadata))
                    .ok_or_else(|| Error::MissingMetadata { kind, id: id.to_string() })
            }
            _ => self
                .fragments
                .get(&(kind, id.to_string()))
                .cloned()
                .ok_or_else(|| Error::CapabilityNotFound { kind, id: id.to_string() }),
        }
    }

    /// Identifiers available for a kind, in registration order.
    pub fn identifiers(&self, kind: CapabilityKind) -> Vec<&str> {
        match kind {
            CapabilityKind::Plugin => self.plugins.keys().map(String::as_str).collect(),
            CapabilityKind::MarkdownPlugin => {
                self.markdown_plugins.keys().map(String::as_str).collect()
            }
            _ => self
                .fragments
                .keys()
                .filter(|(fragment_kind, _)| *fragment_kind == kind)
                .map(|(_, id)| id.as_str())
                .collect(),
        }
    }
}
