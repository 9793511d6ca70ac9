use crate::catalog::capability::require_line;
use crate::catalog::{AddonRepository, BundleCatalog, CapabilityKind};
use crate::compose::module::{MarkdownUse, SetupStatement};
use crate::constants::{MARKDOWN_LIBRARY_BINDING, MARKDOWN_LIBRARY_PACKAGE};
use crate::error::Result;
use crate::manifest::ProjectManifest;
use indexmap::IndexSet;

/// Direct per-kind identifier lists plus bundle identifiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub bundles: Vec<String>,
    pub filters: Vec<String>,
    pub shortcodes: Vec<String>,
    pub collections: Vec<String>,
    pub plugins: Vec<String>,
    pub markdown_plugins: Vec<String>,
}

impl Selection {
    pub fn ids(&self, kind: CapabilityKind) -> &[String] {
        match kind {
            CapabilityKind::Filter => &self.filters,
            CapabilityKind::Shortcode => &self.shortcodes,
            CapabilityKind::Collection => &self.collections,
            CapabilityKind::Plugin => &self.plugins,
            CapabilityKind::MarkdownPlugin => &self.markdown_plugins,
        }
    }

    fn ids_mut(&mut self, kind: CapabilityKind) -> &mut Vec<String> {
        match kind {
            CapabilityKind::Filter => &mut self.filters,
            CapabilityKind::Shortcode => &mut self.shortcodes,
            CapabilityKind::Collection => &mut self.collections,
            CapabilityKind::Plugin => &mut self.plugins,
            CapabilityKind::MarkdownPlugin => &mut self.markdown_plugins,
        }
    }
}

impl From<&ProjectManifest> for Selection {
    fn from(manifest: &ProjectManifest) -> Self {
        let mut selection = Self { bundles: manifest.bundles.clone(), ..Default::default() };
        for kind in CapabilityKind::ALL {
            *selection.ids_mut(kind) = manifest.selected(kind).to_vec();
        }
        selection
    }
}

/// Module-level variable names handed out during one composition.
#[derive(Debug, Default)]
struct Bindings {
    taken: IndexSet<String>,
}

impl Bindings {
    /// Claims `base`, or `base2`, `base3`, ... when it is already taken.
    fn claim(&mut self, base: String) -> String {
        let mut candidate = base.clone();
        let mut suffix = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{base}{suffix}");
            suffix += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

/// Deduplicated, ordered wiring of every selected capability for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposedConfig {
    /// Import lines in first-appearance order, each exactly once.
    pub imports: Vec<String>,
    pub setup: Vec<SetupStatement>,
    /// Resolved plugin identifiers, feeding the install plan.
    pub plugins: Vec<String>,
    /// Resolved markdown plugin identifiers in chain order.
    pub markdown_plugins: Vec<String>,
}

/// Merges direct and bundle-derived selections into a `ComposedConfig`.
pub struct Composer<'a> {
    repository: &'a AddonRepository,
    bundles: &'a BundleCatalog,
}

impl<'a> Composer<'a> {
    pub fn new(repository: &'a AddonRepository, bundles: &'a BundleCatalog) -> Self {
        Self { repository, bundles }
    }

    /// Expands bundles into the direct lists and deduplicates every kind.
    ///
    /// Bundle members are appended after the direct selections, so a
    /// capability picked directly keeps its position. The returned selection
    /// has no bundles left.
    pub fn resolve(&self, selection: &Selection) -> Result<Selection> {
        let mut resolved = Selection { bundles: Vec::new(), ..selection.clone() };

        for bundle_id in &selection.bundles {
            let bundle = self.bundles.expand(bundle_id)?;
            log::debug!("Expanding bundle '{bundle_id}'");
            for kind in CapabilityKind::ALL {
                resolved.ids_mut(kind).extend(bundle.members(kind).iter().cloned());
            }
        }

        for kind in CapabilityKind::ALL {
            let ids = resolved.ids_mut(kind);
            let before = ids.len();
            *ids = dedup_preserving_order(ids);
            if ids.len() != before {
                log::debug!("Dropped {} duplicate {kind} selection(s)", before - ids.len());
            }
        }

        Ok(resolved)
    }

    /// Builds the composed configuration.
    ///
    /// All-or-nothing: the first unresolved identifier aborts with its error.
    pub fn compose(&self, selection: &Selection) -> Result<ComposedConfig> {
        let resolved = self.resolve(selection)?;
        let mut imports = IndexSet::new();
        let mut setup = Vec::new();
        let mut bindings = Bindings::default();
        if !resolved.markdown_plugins.is_empty() {
            bindings.claim(MARKDOWN_LIBRARY_BINDING.to_string());
        }

        for kind in CapabilityKind::FRAGMENT_KINDS {
            for id in resolved.ids(kind) {
                let capability = self.repository.lookup(kind, id)?;
                imports.extend(capability.imports);
                setup.push(SetupStatement::Fragment {
                    kind,
                    id: capability.id,
                    body: capability.source,
                });
            }
        }

        for id in &resolved.plugins {
            let capability = self.repository.lookup(CapabilityKind::Plugin, id)?;
            let binding = bindings.claim(capability.binding());
            imports.insert(require_line(&binding, &capability.id));
            setup.push(SetupStatement::RegisterPlugin { binding, options: capability.options });
        }

        if !resolved.markdown_plugins.is_empty() {
            imports.insert(require_line(MARKDOWN_LIBRARY_BINDING, MARKDOWN_LIBRARY_PACKAGE));
            let mut uses = Vec::with_capacity(resolved.markdown_plugins.len());
            for id in &resolved.markdown_plugins {
                let capability =
                    self.repository.lookup(CapabilityKind::MarkdownPlugin, id)?;
                let binding = bindings.claim(capability.binding());
                imports.insert(require_line(&binding, &capability.id));
                uses.push(MarkdownUse { binding, options: capability.options });
            }
            setup.push(SetupStatement::MarkdownLibrary { uses });
        }

        Ok(ComposedConfig {
            imports: imports.into_iter().collect(),
            setup,
            plugins: resolved.plugins,
            markdown_plugins: resolved.markdown_plugins,
        })
    }
}

/// Removes repeated identifiers, keeping the first occurrence of each.
pub fn dedup_preserving_order(ids: &[String]) -> Vec<String> {
    ids.iter().cloned().collect::<IndexSet<_>>().into_iter().collect()
}
