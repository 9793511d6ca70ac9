use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::compose::{synthesize_to_string, Composer, Selection};
use crate::engine::EngineVersion;
use crate::error::Result;
use crate::install::{Dependency, InstallPlan, Installer, PackageManager};
use crate::ioutils::{create_dir_all, ensure_available, write_file};
use crate::manifest::ProjectManifest;
use crate::renderer::TemplateRenderer;
use crate::reporter::Reporter;
use crate::scaffold::layout::ProjectLayout;
use crate::scaffold::operation::ScaffoldOperation;
use crate::scaffold::support::{TemplateContext, SUPPORT_FILES};

#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Directory the project directory is created in.
    pub output_root: PathBuf,
    pub engine_version: EngineVersion,
    pub package_manager: PackageManager,
    pub skip_install: bool,
    pub dry_run: bool,
}

/// What a run created, or would create in a dry run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub files_created: Vec<PathBuf>,
    pub directories_created: Vec<PathBuf>,
    pub dependencies: Vec<Dependency>,
    /// Source of the generated configuration module.
    pub config_module: String,
}

/// Turns a manifest into a project on disk.
pub struct Scaffolder<'a> {
    catalog: &'a Catalog,
    renderer: &'a dyn TemplateRenderer,
    reporter: &'a dyn Reporter,
    installer: Option<&'a dyn Installer>,
    options: ScaffoldOptions,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        catalog: &'a Catalog,
        renderer: &'a dyn TemplateRenderer,
        reporter: &'a dyn Reporter,
        options: ScaffoldOptions,
    ) -> Self {
        Self { catalog, renderer, reporter, installer: None, options }
    }

    pub fn with_installer(mut self, installer: &'a dyn Installer) -> Self {
        self.installer = Some(installer);
        self
    }

    /// Generates the project described by `manifest`.
    ///
    /// Composition, synthesis and rendering all happen before the first
    /// filesystem mutation, so an unknown capability leaves the disk untouched.
    pub fn materialize(&self, manifest: &ProjectManifest) -> Result<ScaffoldReport> {
        manifest.validate()?;

        let composer = Composer::new(&self.catalog.addons, &self.catalog.bundles);
        let composed = composer.compose(&Selection::from(manifest))?;
        let config_module =
            synthesize_to_string(&composed, &manifest.properties, &manifest.assets);

        let layout = ProjectLayout::new(&self.options.output_root, manifest);
        let operations = self.plan_operations(manifest, &layout, &config_module)?;
        let plan = InstallPlan::new(
            self.options.package_manager,
            &self.options.engine_version,
            &composed,
        );

        ensure_available(&layout.root)?;

        let dry_run = self.options.dry_run;
        self.reporter.status(&format!(
            "{}Creating '{}' in '{}'",
            if dry_run { "[DRY RUN] " } else { "" },
            manifest.project,
            layout.root.display()
        ));

        let mut files_created = Vec::new();
        let mut directories_created = Vec::new();
        for operation in &operations {
            let message = operation.get_message(dry_run);
            log::info!("{message}");
            self.reporter.detail(&message);
            if !dry_run {
                self.apply(operation)?;
            }
            match operation {
                ScaffoldOperation::CreateDirectory { target } => {
                    directories_created.push(target.clone())
                }
                ScaffoldOperation::Write { target, .. } => files_created.push(target.clone()),
            }
        }

        if dry_run || self.options.skip_install {
            log::debug!("Skipping installation of {} dependencies", plan.dependencies.len());
        } else if let Some(installer) = self.installer {
            plan.execute(&layout.root, installer, self.reporter)?;
        }

        Ok(ScaffoldReport {
            root: layout.root,
            files_created,
            directories_created,
            dependencies: plan.dependencies,
            config_module,
        })
    }

    /// Every filesystem action of a run, in execution order.
    fn plan_operations(
        &self,
        manifest: &ProjectManifest,
        layout: &ProjectLayout,
        config_module: &str,
    ) -> Result<Vec<ScaffoldOperation>> {
        let mut operations: Vec<ScaffoldOperation> = layout
            .directories()
            .into_iter()
            .map(|target| ScaffoldOperation::CreateDirectory { target })
            .collect();

        operations.push(ScaffoldOperation::Write {
            target: layout.config_file.clone(),
            content: config_module.to_string(),
        });

        let context =
            TemplateContext::new(manifest, layout, self.options.package_manager).to_value()?;
        for file in SUPPORT_FILES {
            operations.push(ScaffoldOperation::Write {
                target: file.target(layout),
                content: file.content(self.renderer, &context)?,
            });
        }

        Ok(operations)
    }

    fn apply(&self, operation: &ScaffoldOperation) -> Result<()> {
        log::debug!("Handling scaffold operation: {}", operation.target_path().display());
        match operation {
            ScaffoldOperation::CreateDirectory { target } => create_dir_all(target),
            ScaffoldOperation::Write { target, content } => write_file(content, target),
        }
    }
}
