//! Constants used throughout sitebake

/// Package name of the static site engine installed into every project
pub const ENGINE_PACKAGE: &str = "@11ty/eleventy";

/// Default engine version pin
pub const DEFAULT_ENGINE_VERSION: &str = "latest";

/// Distribution tags accepted in place of a concrete version
pub const DIST_TAGS: &[&str] = &["latest", "next", "canary", "beta", "alpha"];

/// Newest engine major version the generated configuration targets
pub const MAX_SUPPORTED_MAJOR: u64 = 3;

/// Markdown library that markdown plugins are chained onto
pub const MARKDOWN_LIBRARY_PACKAGE: &str = "markdown-it";

/// Binding used for the markdown library inside the generated module
pub const MARKDOWN_LIBRARY_BINDING: &str = "markdownIt";

/// Name of the configuration object passed to the generated factory function
pub const CONFIG_PARAM: &str = "eleventyConfig";

/// Manifest file names looked up in the working directory, in order of preference
pub const MANIFEST_FILENAMES: &[&str] =
    &["sitebake.json", "sitebake.yaml", "sitebake.yml"];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Manifest defaults applied to fields the user leaves out
pub mod defaults {
    pub const PROJECT: &str = "my-11ty-project";
    pub const FILTERS: &[&str] = &["htmlDateString", "readableDate"];
    pub const INPUT: &str = "src";
    pub const OUTPUT: &str = "dist";
    pub const DATA: &str = "_data";
    pub const INCLUDES: &str = "_includes";
    pub const CONFIG_FILE: &str = "eleventy.config.js";
    pub const LEGACY_CONFIG_FILE: &str = ".eleventy.js";
    pub const ASSETS_PARENT: &str = "assets";
    pub const ASSETS_CSS: &str = "css";
    pub const ASSETS_JS: &str = "js";
    pub const ASSETS_IMG: &str = "img";
}

/// Catalog layout on disk
pub mod catalog {
    pub const ADDONS_DIR: &str = "addons";
    pub const PLUGINS_DIR: &str = "plugins";
    pub const ELEVENTY_PLUGINS_TABLE: &str = "eleventy";
    pub const MARKDOWN_PLUGINS_TABLE: &str = "markdown";
    pub const BUNDLES_TABLE: &str = "bundles";
    pub const FRAGMENT_EXTENSION: &str = "js";
    pub const TABLE_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
