//! Template rendering for project support files
//!
//! - `interface`: The `TemplateRenderer` trait
//! - `minijinja`: MiniJinja-backed implementation
//! - `filters`: Case conversion filters available to templates

pub mod filters;
pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;
