#![allow(dead_code)]

use sitebake::catalog::Catalog;
use sitebake::cli::Args;
use sitebake::error::{Error, Result};
use sitebake::install::{Dependency, Installer, PackageManager};
use sitebake::manifest::ProjectManifest;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Records every dependency it is asked to install, optionally failing on one.
#[derive(Default)]
pub struct RecordingInstaller {
    pub installed: RefCell<Vec<String>>,
    pub roots: RefCell<Vec<PathBuf>>,
    pub fail_on: Option<String>,
}

impl RecordingInstaller {
    pub fn failing_on(spec: &str) -> Self {
        Self { fail_on: Some(spec.to_string()), ..Default::default() }
    }

    pub fn installed(&self) -> Vec<String> {
        self.installed.borrow().clone()
    }
}

impl Installer for RecordingInstaller {
    fn install(&self, root: &Path, dependency: &Dependency) -> Result<()> {
        let spec = dependency.to_string();
        if self.fail_on.as_deref() == Some(spec.as_str()) {
            return Err(Error::Other(anyhow::anyhow!("refusing to install {spec}")));
        }
        self.roots.borrow_mut().push(root.to_path_buf());
        self.installed.borrow_mut().push(spec);
        Ok(())
    }
}

/// Builds a manifest from JSON overlaid on the defaults, the way the CLI does.
pub fn manifest(answers: &str) -> ProjectManifest {
    let sources = sitebake::manifest::ManifestSources {
        answers: Some(answers.to_string()),
        ..Default::default()
    };
    sitebake::manifest::load_manifest(&sources, &Default::default()).unwrap()
}

pub fn builtin_catalog() -> Catalog {
    Catalog::builtin().unwrap()
}

/// Non-interactive CLI arguments writing into `output_dir` without installing anything.
pub fn args(output_dir: &Path, answers: &str) -> Args {
    Args {
        project: None,
        manifest: None,
        answers: Some(answers.to_string()),
        output_dir: output_dir.to_path_buf(),
        catalog: None,
        verbose: 2,
        silent: false,
        engine_version: "latest".to_string(),
        package_manager: PackageManager::Npm,
        skip_install: true,
        dry_run: false,
    }
}

/// Every path below `root`, relative and `/`-separated, sorted.
pub fn tree(root: &Path) -> Vec<String> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap();
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}
