//! Configuration composition and synthesis
//!
//! This module contains the composition components:
//! - `composer`: Bundle expansion, deduplication and setup statement ordering
//! - `module`: Typed statements of the generated configuration module
//! - `formatter`: Prints a module as CommonJS source

pub mod composer;
pub mod formatter;
pub mod module;

pub use composer::{ComposedConfig, Composer, Selection};
pub use formatter::ModuleFormatter;
pub use module::{
    passthrough_paths, synthesize, synthesize_to_string, ConfigModule, DirectoryMap,
    MarkdownUse, SetupStatement, Statement,
};
