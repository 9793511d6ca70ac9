use crate::{
    catalog::Catalog,
    cli::Args,
    engine::EngineVersion,
    error::{Error, Result},
    install::CommandInstaller,
    ioutils::ensure_available,
    manifest::{find_manifest_file, load_manifest, ManifestSources, ProjectManifest},
    renderer::MiniJinjaRenderer,
    reporter::{reporter_for, Reporter},
    scaffold::{ScaffoldOptions, ScaffoldReport, Scaffolder},
};

/// Main CLI runner that orchestrates a whole scaffolding run
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete scaffolding workflow
    pub fn run(self) -> Result<ScaffoldReport> {
        self.check_flags()?;
        let reporter = reporter_for(self.args.verbose, self.args.silent);

        let engine_version: EngineVersion = self.args.engine_version.parse()?;
        let manifest = self.load_manifest(&engine_version)?;

        // Fail before reading the catalog if the target is already taken.
        ensure_available(self.args.output_dir.join(manifest.slug()))?;

        let catalog = self.load_catalog()?;
        let renderer = MiniJinjaRenderer::new();
        let installer = CommandInstaller::new(self.args.package_manager);

        let options = ScaffoldOptions {
            output_root: self.args.output_dir.clone(),
            engine_version,
            package_manager: self.args.package_manager,
            skip_install: self.args.skip_install,
            dry_run: self.args.dry_run,
        };
        let report = Scaffolder::new(&catalog, &renderer, reporter.as_ref(), options)
            .with_installer(&installer)
            .materialize(&manifest)?;

        self.summarize(&report, reporter.as_ref());
        Ok(report)
    }

    fn check_flags(&self) -> Result<()> {
        if self.args.silent && self.args.verbose > 0 {
            return Err(Error::ConflictingFlags(
                "--silent and --verbose cannot be used together".to_string(),
            ));
        }
        Ok(())
    }

    /// Merges defaults, the manifest file, inline answers and the project argument
    fn load_manifest(&self, engine_version: &EngineVersion) -> Result<ProjectManifest> {
        let file = match &self.args.manifest {
            Some(path) => Some(path.clone()),
            None => find_manifest_file(std::env::current_dir()?),
        };
        let sources = ManifestSources {
            file,
            answers: self.args.answers.clone(),
            project: self.args.project.clone(),
        };
        load_manifest(&sources, engine_version)
    }

    fn load_catalog(&self) -> Result<Catalog> {
        match &self.args.catalog {
            Some(dir) if !dir.is_dir() => Err(Error::CatalogError(format!(
                "catalog directory '{}' does not exist",
                dir.display()
            ))),
            Some(dir) => Catalog::load(dir),
            None => Catalog::builtin(),
        }
    }

    fn summarize(&self, report: &ScaffoldReport, reporter: &dyn Reporter) {
        if self.args.dry_run {
            println!("{}", report.config_module);
            return;
        }
        reporter.status(&format!(
            "Project created in {} ({} files, {} directories).",
            report.root.display(),
            report.files_created.len(),
            report.directories_created.len()
        ));
        if self.args.skip_install {
            let specs: Vec<String> =
                report.dependencies.iter().map(ToString::to_string).collect();
            reporter.status(&format!(
                "Install dependencies with: {} {}",
                self.args.package_manager.install_command(),
                specs.join(" ")
            ));
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run().map(|_| ())
}
