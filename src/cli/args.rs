use crate::constants::{exit_codes, verbosity, DEFAULT_ENGINE_VERSION};
use crate::install::PackageManager;
use clap::{error::ErrorKind, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for sitebake.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project name; overrides the name from the manifest.
    #[arg(value_name = "PROJECT")]
    pub project: Option<String>,

    /// Manifest file (`.json`, `.yaml` or `.yml`). Defaults to `sitebake.*` in the current directory.
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Manifest values as a JSON string or `-` to read from stdin.
    #[arg(short, long, value_name = "JSON|-")]
    pub answers: Option<String>,

    /// Directory the project directory is created in.
    #[arg(short, long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Catalog directory to use instead of the built-in catalog.
    #[arg(short, long, value_name = "DIR")]
    pub catalog: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all progress output.
    #[arg(short, long)]
    pub silent: bool,

    /// Engine version: a dist-tag (`latest`, `next`, `canary`, `beta`) or `MAJOR.MINOR.PATCH`.
    #[arg(short = 'e', long = "set", value_name = "VERSION", default_value = DEFAULT_ENGINE_VERSION)]
    pub engine_version: String,

    /// Package manager used to install dependencies.
    #[arg(short = 'i', long = "install", value_enum, value_name = "MANAGER", default_value = "npm")]
    pub package_manager: PackageManager,

    /// Generate files but do not install dependencies.
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Print the configuration module without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Parse command line arguments; usage errors exit with status 1.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            if let Err(print_err) = e.print() {
                eprintln!("Failed to display usage error: {print_err}");
            }
            std::process::exit(exit_codes::FAILURE);
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_from(["sitebake"]);
        assert_eq!(args.project, None);
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.engine_version, "latest");
        assert_eq!(args.package_manager, PackageManager::Npm);
        assert!(!args.skip_install);
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "sitebake",
            "My Blog",
            "-m",
            "site.yaml",
            "--answers",
            "{\"filters\":[]}",
            "-o",
            "out",
            "-c",
            "catalog",
            "-vv",
            "-e",
            "2.0.1",
            "-i",
            "pnpm",
            "--skip-install",
            "--dry-run",
        ]);
        assert_eq!(args.project.as_deref(), Some("My Blog"));
        assert_eq!(args.manifest, Some(PathBuf::from("site.yaml")));
        assert_eq!(args.answers.as_deref(), Some("{\"filters\":[]}"));
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert_eq!(args.catalog, Some(PathBuf::from("catalog")));
        assert_eq!(args.verbose, 2);
        assert_eq!(args.engine_version, "2.0.1");
        assert_eq!(args.package_manager, PackageManager::Pnpm);
        assert!(args.skip_install);
        assert!(args.dry_run);
    }

    #[test]
    fn rejects_unknown_package_manager() {
        assert!(Args::try_parse_from(["sitebake", "-i", "pip"]).is_err());
    }
}
