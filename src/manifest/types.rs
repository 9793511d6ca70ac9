//! Manifest data types

use crate::catalog::CapabilityKind;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use cruet::case::kebab::to_kebab_case;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The finalized record of one run's scaffolding choices.
///
/// Built once before anything touches the filesystem and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
    pub project: String,
    #[serde(default)]
    pub bundles: Vec<String>,
    #[serde(default)]
    pub filters: Vec<String>,
    #[serde(default)]
    pub shortcodes: Vec<String>,
    #[serde(default)]
    pub collections: Vec<String>,
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub markdown_plugins: Vec<String>,
    pub properties: Properties,
    pub assets: Assets,
}

/// Directory properties of the generated project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    pub input: String,
    pub output: String,
    pub data: String,
    pub includes: String,
    pub config_file: String,
}

/// Asset layout below the input directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assets {
    /// Directory the categories nest under; empty makes them siblings of data/includes.
    #[serde(default)]
    pub parent: String,
    pub css: String,
    pub js: String,
    pub img: String,
}

impl ProjectManifest {
    /// Directory name of the project: the kebab-cased project name.
    pub fn slug(&self) -> String {
        to_kebab_case(&self.project)
    }

    /// Directly selected identifiers of a kind.
    pub fn selected(&self, kind: CapabilityKind) -> &[String] {
        match kind {
            CapabilityKind::Filter => &self.filters,
            CapabilityKind::Shortcode => &self.shortcodes,
            CapabilityKind::Collection => &self.collections,
            CapabilityKind::Plugin => &self.plugins,
            CapabilityKind::MarkdownPlugin => &self.markdown_plugins,
        }
    }

    /// Checks invariants the schema cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.slug().is_empty() {
            return Err(Error::InvalidManifest(format!(
                "project name '{}' does not produce a usable directory name",
                self.project
            )));
        }

        let Properties { input, output, data, includes, config_file } = &self.properties;
        for (field, value) in [
            ("properties.input", input),
            ("properties.output", output),
            ("properties.data", data),
            ("properties.includes", includes),
            ("properties.configFile", config_file),
        ] {
            check_relative_segment(field, value)?;
        }

        if !self.assets.parent.is_empty() {
            check_relative_segment("assets.parent", &self.assets.parent)?;
        }
        for (category, value) in self.assets.categories() {
            check_relative_segment(&format!("assets.{category}"), value)?;
        }
        Ok(())
    }
}

impl Assets {
    /// Asset categories in declaration order: css, js, img.
    pub fn categories(&self) -> [(&'static str, &str); 3] {
        [("css", self.css.as_str()), ("js", self.js.as_str()), ("img", self.img.as_str())]
    }

    /// Path of a category directory relative to the input directory.
    ///
    /// A category named like its parent resolves to the parent itself.
    pub fn category_dir(&self, category: &str) -> PathBuf {
        if self.collapses_onto_parent(category) {
            return PathBuf::from(&self.parent);
        }
        Path::new(&self.parent).join(category)
    }

    /// Whether a category would collapse onto its own parent directory.
    pub fn collapses_onto_parent(&self, category: &str) -> bool {
        category == self.parent
    }
}

fn check_relative_segment(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidManifest(format!("{field} must not be empty")));
    }
    if !Path::new(value).is_contained_relative() {
        return Err(Error::InvalidManifest(format!(
            "{field} must be a relative path inside the project, got '{value}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest() -> ProjectManifest {
        serde_json::from_value(json!({
            "project": "My Blog",
            "filters": ["readableDate"],
            "markdownPlugins": ["markdown-it-anchor"],
            "properties": {
                "input": "src",
                "output": "dist",
                "data": "_data",
                "includes": "_includes",
                "configFile": "config.js"
            },
            "assets": {"parent": "assets", "css": "css", "js": "js", "img": "img"}
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let manifest = manifest();
        assert_eq!(manifest.properties.config_file, "config.js");
        assert_eq!(manifest.selected(CapabilityKind::MarkdownPlugin), ["markdown-it-anchor"]);
        assert!(manifest.bundles.is_empty());
    }

    #[test]
    fn slug_is_kebab_case() {
        assert_eq!(manifest().slug(), "my-blog");
    }

    #[test]
    fn rejects_empty_and_escaping_directories() {
        let mut empty = manifest();
        empty.properties.data = String::new();
        assert!(matches!(empty.validate(), Err(Error::InvalidManifest(_))));

        let mut escaping = manifest();
        escaping.properties.output = "../dist".into();
        assert!(matches!(escaping.validate(), Err(Error::InvalidManifest(_))));

        let mut absolute = manifest();
        absolute.assets.css = "/css".into();
        assert!(matches!(absolute.validate(), Err(Error::InvalidManifest(_))));
    }

    #[test]
    fn empty_asset_parent_is_allowed() {
        let mut flat = manifest();
        flat.assets.parent = String::new();
        assert!(flat.validate().is_ok());
        assert_eq!(flat.assets.category_dir("css"), PathBuf::from("css"));
    }

    #[test]
    fn category_named_like_parent_collapses() {
        let mut assets = manifest().assets;
        assets.img = "assets".into();
        assert_eq!(assets.category_dir(&assets.img), PathBuf::from("assets"));
        assert_eq!(assets.category_dir(&assets.css), PathBuf::from("assets/css"));
    }

    #[test]
    fn rejects_unusable_project_names() {
        let mut unnamed = manifest();
        unnamed.project = "   ".into();
        assert!(matches!(unnamed.validate(), Err(Error::InvalidManifest(_))));
    }
}
