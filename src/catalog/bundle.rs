use crate::catalog::capability::CapabilityKind;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// Named preset expanding to capability identifiers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub filters: Vec<String>,
    #[serde(default)]
    pub shortcodes: Vec<String>,
    #[serde(default)]
    pub collections: Vec<String>,
    #[serde(default)]
    pub markdown_plugins: Vec<String>,
}

impl Bundle {
    /// Members of the given kind, in declaration order.
    pub fn members(&self, kind: CapabilityKind) -> &[String] {
        match kind {
            CapabilityKind::Filter => &self.filters,
            CapabilityKind::Shortcode => &self.shortcodes,
            CapabilityKind::Collection => &self.collections,
            CapabilityKind::Plugin => &self.plugins,
            CapabilityKind::MarkdownPlugin => &self.markdown_plugins,
        }
    }
}

/// Read-only table of bundles keyed by identifier.
#[derive(Debug, Default)]
pub struct BundleCatalog {
    bundles: IndexMap<String, Bundle>,
}

impl BundleCatalog {
    pub fn new(mut bundles: IndexMap<String, Bundle>) -> Self {
        for (id, bundle) in bundles.iter_mut() {
            bundle.id = id.clone();
        }
        Self { bundles }
    }

    /// Expands a bundle identifier into its member lists.
    ///
    /// Does not deduplicate across calls; that is left to the composer.
    pub fn expand(&self, id: &str) -> Result<&Bundle> {
        self.bundles
            .get(id)
            .ok_or_else(|| Error::BundleNotFound { id: id.to_string() })
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }
}
