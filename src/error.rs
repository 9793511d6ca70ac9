use std::process::ExitStatus;
use thiserror::Error;

use crate::catalog::CapabilityKind;
use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to walk the catalog directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Invalid pattern. Original error: {0}")]
    RegexError(#[from] regex::Error),

    /// A filter, shortcode or collection with this identifier is not in the catalog.
    #[error("No {kind} named '{id}' was found in the catalog.")]
    CapabilityNotFound { kind: CapabilityKind, id: String },

    #[error("No bundle named '{id}' was found in the catalog.")]
    BundleNotFound { id: String },

    /// A plugin was selected but its options table has no entry for it.
    #[error("The {kind} '{id}' has no entry in the plugin options table.")]
    MissingMetadata { kind: CapabilityKind, id: String },

    #[error("Cannot proceed: '{path}' already exists and is not an empty directory.")]
    AlreadyExists { path: String },

    #[error("Invalid manifest: {0}.")]
    InvalidManifest(String),

    #[error("Manifest file '{path}' does not exist.")]
    ManifestNotFound { path: String },

    #[error("Catalog error: {0}.")]
    CatalogError(String),

    #[error("Invalid engine version '{version}': {reason}.")]
    InvalidVersion { version: String, reason: String },

    #[error("{0}")]
    ConflictingFlags(String),

    /// The package manager ran but exited unsuccessfully.
    #[error("Failed to install '{dependency}': installer exited with status {status}.")]
    InstallError { dependency: String, status: ExitStatus },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
