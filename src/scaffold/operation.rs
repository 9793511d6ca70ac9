use std::path::{Path, PathBuf};

/// One filesystem action taken while materializing a project.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaffoldOperation {
    CreateDirectory { target: PathBuf },
    Write { target: PathBuf, content: String },
}

impl ScaffoldOperation {
    pub fn target_path(&self) -> &Path {
        match self {
            ScaffoldOperation::CreateDirectory { target } => target,
            ScaffoldOperation::Write { target, .. } => target,
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            ScaffoldOperation::CreateDirectory { target } => {
                format!("{}Creating directory '{}'", prefix, target.display())
            }
            ScaffoldOperation::Write { target, content } => format!(
                "{}Writing to '{}' ({} bytes)",
                prefix,
                target.display(),
                content.len()
            ),
        }
    }
}
