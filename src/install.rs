//! Dependency installation for generated projects

use std::fmt::Display;
use std::path::Path;
use std::process::{Command, Stdio};

use clap::ValueEnum;

use crate::compose::ComposedConfig;
use crate::constants::{ENGINE_PACKAGE, MARKDOWN_LIBRARY_PACKAGE};
use crate::engine::EngineVersion;
use crate::error::{Error, Result};
use crate::reporter::Reporter;

/// Package manager used for installing dependencies and in generated scripts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Command prefix for running a package script, e.g. `npm run`.
    pub fn run_command(&self) -> String {
        format!("{} run", self.program())
    }

    /// Arguments that add one dependency to the project.
    pub fn install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["install"],
            PackageManager::Yarn | PackageManager::Pnpm | PackageManager::Bun => &["add"],
        }
    }

    pub fn install_command(&self) -> String {
        std::iter::once(self.program())
            .chain(self.install_args().iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A package to install, optionally pinned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub version: Option<String>,
}

impl Dependency {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), version: None }
    }

    pub fn pinned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { name: name.into(), version: Some(version.into()) }
    }
}

impl Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{version}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Installs a single dependency into a project.
pub trait Installer {
    fn install(&self, root: &Path, dependency: &Dependency) -> Result<()>;
}

/// Shells out to the package manager, one process per dependency.
#[derive(Debug, Clone, Copy)]
pub struct CommandInstaller {
    package_manager: PackageManager,
}

impl CommandInstaller {
    pub fn new(package_manager: PackageManager) -> Self {
        Self { package_manager }
    }
}

impl Installer for CommandInstaller {
    fn install(&self, root: &Path, dependency: &Dependency) -> Result<()> {
        let spec = dependency.to_string();
        log::debug!(
            "Running '{} {spec}' in '{}'",
            self.package_manager.install_command(),
            root.display()
        );

        let status = Command::new(self.package_manager.program())
            .args(self.package_manager.install_args())
            .arg(&spec)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(Error::InstallError { dependency: spec, status });
        }
        Ok(())
    }
}

/// Ordered dependencies of a generated project.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallPlan {
    pub package_manager: PackageManager,
    pub dependencies: Vec<Dependency>,
}

impl InstallPlan {
    /// Engine first, then plugins, then the markdown library and its plugins.
    pub fn new(
        package_manager: PackageManager,
        engine_version: &EngineVersion,
        composed: &ComposedConfig,
    ) -> Self {
        let mut dependencies = vec![Dependency::pinned(ENGINE_PACKAGE, engine_version.to_string())];
        dependencies.extend(composed.plugins.iter().map(Dependency::new));
        if !composed.markdown_plugins.is_empty() {
            dependencies.push(Dependency::new(MARKDOWN_LIBRARY_PACKAGE));
            dependencies.extend(composed.markdown_plugins.iter().map(Dependency::new));
        }
        Self { package_manager, dependencies }
    }

    /// Dependency strings as passed to the package manager.
    pub fn specs(&self) -> Vec<String> {
        self.dependencies.iter().map(ToString::to_string).collect()
    }

    /// Installs every dependency in order; the first failure stops the rest.
    pub fn execute(
        &self,
        root: &Path,
        installer: &dyn Installer,
        reporter: &dyn Reporter,
    ) -> Result<()> {
        let total = self.dependencies.len();
        let result = self.dependencies.iter().enumerate().try_for_each(|(index, dependency)| {
            reporter.progress(index + 1, total, &format!("Installing {dependency}"));
            installer.install(root, dependency)
        });
        reporter.finish_progress();
        result
    }
}
