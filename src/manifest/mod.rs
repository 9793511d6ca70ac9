//! Project manifest handling
//!
//! This module contains the manifest components:
//! - `types`: The manifest, directory properties and asset layout
//! - `loader`: Defaults and file/inline sources merged into one manifest
//! - `schema`: JSON Schema validation of the merged document

pub mod loader;
pub mod schema;
pub mod types;

pub use loader::{find_manifest_file, load_manifest, ManifestSources};
pub use types::{Assets, ProjectManifest, Properties};
