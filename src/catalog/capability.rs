//! Capability kinds and catalog entries

use crate::error::Result;
use cruet::case::camel::to_camel_case;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Matches a CommonJS import line such as `const { DateTime } = require("luxon");`.
const IMPORT_LINE_PATTERN: &str =
    r#"^\s*const\s+[^=]+?=\s*require\(\s*["'][^"']+["']\s*\)\s*;?\s*$"#;

/// Kind of a composable unit of generated-config behavior.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityKind {
    Filter,
    Shortcode,
    Collection,
    Plugin,
    MarkdownPlugin,
}

impl CapabilityKind {
    pub const ALL: [CapabilityKind; 5] = [
        CapabilityKind::Filter,
        CapabilityKind::Shortcode,
        CapabilityKind::Collection,
        CapabilityKind::Plugin,
        CapabilityKind::MarkdownPlugin,
    ];

    /// Kinds backed by fragment files, in the order their setup statements are emitted.
    pub const FRAGMENT_KINDS: [CapabilityKind; 3] =
        [CapabilityKind::Filter, CapabilityKind::Shortcode, CapabilityKind::Collection];

    /// Catalog directory holding fragments of this kind.
    pub fn directory(&self) -> Option<&'static str> {
        match self {
            CapabilityKind::Filter => Some("filters"),
            CapabilityKind::Shortcode => Some("shortcodes"),
            CapabilityKind::Collection => Some("collections"),
            CapabilityKind::Plugin | CapabilityKind::MarkdownPlugin => None,
        }
    }

    pub fn from_directory(name: &str) -> Option<Self> {
        Self::FRAGMENT_KINDS.into_iter().find(|kind| kind.directory() == Some(name))
    }
}

impl Display for CapabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CapabilityKind::Filter => "filter",
            CapabilityKind::Shortcode => "shortcode",
            CapabilityKind::Collection => "collection",
            CapabilityKind::Plugin => "plugin",
            CapabilityKind::MarkdownPlugin => "markdown plugin",
        };
        write!(f, "{s}")
    }
}

/// Per-plugin entry of an options table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PluginMetadata {
    /// Object-literal body passed as the plugin's second argument; empty for none.
    #[serde(default)]
    pub options: String,
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Capability {
    pub id: String,
    pub kind: CapabilityKind,
    /// Fragment body with its import lines removed. Empty for plugins.
    pub source: String,
    pub imports: Vec<String>,
    pub options: Option<String>,
}

impl Capability {
    /// Builds a filter, shortcode or collection entry from the raw fragment text.
    pub fn from_fragment(kind: CapabilityKind, id: &str, text: &str) -> Result<Self> {
        let (imports, source) = split_imports(text)?;
        Ok(Self { id: id.to_string(), kind, source, imports, options: None })
    }

    /// Builds a plugin entry from its options table row.
    pub fn from_plugin(kind: CapabilityKind, id: &str, metadata: &PluginMetadata) -> Self {
        let options = metadata.options.trim();
        Self {
            id: id.to_string(),
            kind,
            source: String::new(),
            imports: vec![require_line(&plugin_binding(id), id)],
            options: (!options.is_empty()).then(|| options.to_string()),
        }
    }

    /// Variable name the capability is bound to in the generated module.
    pub fn binding(&self) -> String {
        plugin_binding(&self.id)
    }
}

/// Derives a binding from a package name: `@11ty/eleventy-plugin-rss` -> `eleventyPluginRss`.
pub fn plugin_binding(package: &str) -> String {
    let last_segment = package.rsplit('/').next().unwrap_or(package);
    to_camel_case(last_segment)
}

pub fn require_line(binding: &str, package: &str) -> String {
    format!("const {binding} = require({});", serde_json::Value::from(package))
}

/// Separates hoistable import lines from the remaining fragment body.
///
/// Import lines are returned trimmed. The body keeps its inner lines verbatim
/// but loses leading and trailing blank lines.
pub fn split_imports(text: &str) -> Result<(Vec<String>, String)> {
    let import_line = Regex::new(IMPORT_LINE_PATTERN)?;
    let mut imports = Vec::new();
    let mut body = Vec::new();

    for line in text.lines() {
        if import_line.is_match(line) {
            imports.push(line.trim().to_string());
        } else {
            body.push(line);
        }
    }

    let start = body.iter().position(|line| !line.trim().is_empty());
    let end = body.iter().rposition(|line| !line.trim().is_empty());
    let source = match (start, end) {
        (Some(start), Some(end)) => body[start..=end].join("\n"),
        _ => String::new(),
    };

    Ok((imports, source))
}
