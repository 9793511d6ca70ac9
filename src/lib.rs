/// Handles argument parsing and the command-line workflow.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Capability catalog: fragments, plugin tables and bundles.
pub mod catalog;

/// Composes selected capabilities into a configuration module.
pub mod compose;

/// Constants shared across the crate.
pub mod constants;

/// Engine version pins.
pub mod engine;

/// Extension traits for standard library types.
pub mod ext;

/// Dependency installation plans and installers.
pub mod install;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Project manifest types, loading and validation.
pub mod manifest;

/// Template rendering for support files.
pub mod renderer;

/// User-facing progress output.
pub mod reporter;

/// Materializes a project from a manifest.
pub mod scaffold;
