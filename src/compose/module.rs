//! Typed representation of the generated configuration module

use crate::catalog::CapabilityKind;
use crate::compose::composer::ComposedConfig;
use crate::compose::formatter::ModuleFormatter;
use crate::manifest::{Assets, Properties};

/// One statement inside the generated factory function.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupStatement {
    /// A filter, shortcode or collection fragment, emitted verbatim.
    Fragment { kind: CapabilityKind, id: String, body: String },
    /// `addPlugin` call, with the options object body when present.
    RegisterPlugin { binding: String, options: Option<String> },
    /// The markdown library built as one chain of `.use` calls.
    MarkdownLibrary { uses: Vec<MarkdownUse> },
}

/// A markdown plugin applied to the markdown library, in chain order.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownUse {
    pub binding: String,
    pub options: Option<String>,
}

/// Directory map returned by the generated factory function.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryMap {
    pub input: String,
    pub output: String,
    pub data: String,
    pub includes: String,
}

impl From<&Properties> for DirectoryMap {
    fn from(properties: &Properties) -> Self {
        Self {
            input: properties.input.clone(),
            output: properties.output.clone(),
            data: properties.data.clone(),
            includes: properties.includes.clone(),
        }
    }
}

/// Top-level pieces of the generated module, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Import(String),
    Setup(SetupStatement),
    PassthroughCopy(String),
    ReturnDirectories(DirectoryMap),
}

/// The generated configuration module as an ordered list of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigModule {
    pub statements: Vec<Statement>,
}

impl ConfigModule {
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Import(line) => Some(line.as_str()),
            _ => None,
        })
    }

    pub fn setup(&self) -> impl Iterator<Item = &SetupStatement> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Setup(setup) => Some(setup),
            _ => None,
        })
    }

    pub fn passthrough_paths(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::PassthroughCopy(path) => Some(path.as_str()),
            _ => None,
        })
    }

    pub fn directories(&self) -> Option<&DirectoryMap> {
        self.statements.iter().find_map(|statement| match statement {
            Statement::ReturnDirectories(directories) => Some(directories),
            _ => None,
        })
    }
}

/// Passthrough-copy paths for the asset categories, in css, js, img order.
///
/// Paths are `input/parent/category`, or `input/category` when the parent is
/// empty. A category equal to its parent is skipped. Never mutates `assets`.
pub fn passthrough_paths(properties: &Properties, assets: &Assets) -> Vec<String> {
    assets
        .categories()
        .into_iter()
        .filter(|(_, category)| !assets.collapses_onto_parent(category))
        .map(|(_, category)| {
            [properties.input.as_str(), assets.parent.as_str(), category]
                .into_iter()
                .flat_map(|segment| segment.split('/'))
                .filter(|segment| !segment.is_empty())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

/// Lays out the composed configuration as module statements.
///
/// Order: imports, setup statements, passthrough copies, returned directory map.
pub fn synthesize(
    composed: &ComposedConfig,
    properties: &Properties,
    assets: &Assets,
) -> ConfigModule {
    let mut statements: Vec<Statement> =
        composed.imports.iter().cloned().map(Statement::Import).collect();
    statements.extend(composed.setup.iter().cloned().map(Statement::Setup));
    statements.extend(
        passthrough_paths(properties, assets).into_iter().map(Statement::PassthroughCopy),
    );
    statements.push(Statement::ReturnDirectories(DirectoryMap::from(properties)));
    ConfigModule { statements }
}

/// Synthesizes the module and prints it with the default formatter.
pub fn synthesize_to_string(
    composed: &ComposedConfig,
    properties: &Properties,
    assets: &Assets,
) -> String {
    ModuleFormatter::default().format(&synthesize(composed, properties, assets))
}
