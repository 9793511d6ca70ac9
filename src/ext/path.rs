use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Extension trait for Path with conversions used when emitting generated files
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use sitebake::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Joins the normal components with `/`, regardless of the host separator.
    ///
    /// Generated configuration and templates always use forward slashes.
    fn to_forward_slashes(&self) -> String;

    /// Whether the path is relative and stays below its base (no root, prefix or `..`).
    fn is_contained_relative(&self) -> bool;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn to_forward_slashes(&self) -> String {
        self.components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    fn is_contained_relative(&self) -> bool {
        self.components().all(|component| {
            matches!(component, Component::Normal(_) | Component::CurDir)
        })
    }
}
