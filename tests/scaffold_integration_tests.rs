use sitebake::engine::EngineVersion;
use sitebake::error::Error;
use sitebake::renderer::MiniJinjaRenderer;
use sitebake::reporter::SilentReporter;
use sitebake::scaffold::{ScaffoldOptions, Scaffolder};
use std::fs;
use test_log::test;
mod utils;
use utils::{builtin_catalog, manifest, tree, RecordingInstaller};

const MY_BLOG: &str = r#"{
    "project": "My Blog",
    "filters": ["readableDate"],
    "properties": {
        "input": "src", "output": "dist", "data": "_data",
        "includes": "_includes", "configFile": "config.js"
    },
    "assets": {"parent": "assets", "css": "css", "js": "js", "img": "img"}
}"#;

fn options(output_root: &std::path::Path) -> ScaffoldOptions {
    ScaffoldOptions { output_root: output_root.to_path_buf(), ..Default::default() }
}

#[test]
fn test_my_blog_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = builtin_catalog();
    let renderer = MiniJinjaRenderer::new();
    let installer = RecordingInstaller::default();

    let report = Scaffolder::new(&catalog, &renderer, &SilentReporter, options(tmp.path()))
        .with_installer(&installer)
        .materialize(&manifest(MY_BLOG))
        .unwrap();

    let root = tmp.path().join("my-blog");
    assert_eq!(report.root, root);
    for dir in ["src/_data", "src/_includes", "src/assets/css", "src/assets/js", "src/assets/img"] {
        assert!(root.join(dir).is_dir(), "missing directory {dir}");
    }

    let config = fs::read_to_string(root.join("config.js")).unwrap();
    assert!(config.contains("eleventyConfig.addFilter(\"readableDate\""));
    assert!(config.starts_with("const { DateTime } = require(\"luxon\");\n"));
    assert!(!config.contains("addPlugin"));
    assert!(!config.contains("setLibrary"));
    assert!(config.contains("eleventyConfig.addPassthroughCopy(\"src/assets/css\");"));
    assert!(config.contains("input: \"src\","));
    assert!(config.contains("includes: \"_includes\","));
    assert_eq!(report.config_module, config);

    assert_eq!(installer.installed(), ["@11ty/eleventy@latest"]);
    assert_eq!(*installer.roots.borrow(), [root.clone()]);
    let deps: Vec<String> = report.dependencies.iter().map(ToString::to_string).collect();
    assert_eq!(deps, ["@11ty/eleventy@latest"]);

    for file in ["README.md", ".gitignore", "package.json", "src/index.njk"] {
        assert!(root.join(file).is_file(), "missing file {file}");
    }
    assert!(root.join("src/_includes/base.njk").is_file());
    assert!(root.join("src/_data/site.json").is_file());
    assert!(root.join("src/assets/css/style.css").is_file());
    assert!(root.join("src/assets/img/logo.svg").is_file());
    assert_eq!(report.files_created.len(), 9);
}

#[test]
fn test_unknown_filter_leaves_filesystem_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = builtin_catalog();
    let renderer = MiniJinjaRenderer::new();
    let installer = RecordingInstaller::default();
    let manifest = manifest(r#"{"project": "Broken", "filters": ["does-not-exist"]}"#);

    let err = Scaffolder::new(&catalog, &renderer, &SilentReporter, options(tmp.path()))
        .with_installer(&installer)
        .materialize(&manifest)
        .unwrap_err();

    assert!(matches!(err, Error::CapabilityNotFound { ref id, .. } if id == "does-not-exist"));
    assert!(tree(tmp.path()).is_empty());
    assert!(installer.installed().is_empty());
}

#[test]
fn test_existing_project_directory_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("my-blog")).unwrap();
    fs::write(tmp.path().join("my-blog/keep.txt"), "mine").unwrap();
    let catalog = builtin_catalog();
    let renderer = MiniJinjaRenderer::new();

    let err = Scaffolder::new(&catalog, &renderer, &SilentReporter, options(tmp.path()))
        .materialize(&manifest(MY_BLOG))
        .unwrap_err();

    assert!(matches!(err, Error::AlreadyExists { .. }));
    assert_eq!(tree(tmp.path()), ["my-blog", "my-blog/keep.txt"]);
}

#[test]
fn test_empty_project_directory_is_reused() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("my-blog")).unwrap();
    let catalog = builtin_catalog();
    let renderer = MiniJinjaRenderer::new();

    let report = Scaffolder::new(&catalog, &renderer, &SilentReporter, options(tmp.path()))
        .materialize(&manifest(MY_BLOG))
        .unwrap();
    assert!(report.root.join("config.js").is_file());
}

#[test]
fn test_install_order_with_bundles_and_markdown() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = builtin_catalog();
    let renderer = MiniJinjaRenderer::new();
    let installer = RecordingInstaller::default();
    let manifest = manifest(
        r#"{
            "project": "Docs Site",
            "bundles": ["docs"],
            "plugins": ["@11ty/eleventy-plugin-rss"],
            "markdownPlugins": ["markdown-it-footnote", "markdown-it-anchor"]
        }"#,
    );
    let options = ScaffoldOptions {
        engine_version: "2.0.1".parse::<EngineVersion>().unwrap(),
        ..options(tmp.path())
    };

    let report = Scaffolder::new(&catalog, &renderer, &SilentReporter, options)
        .with_installer(&installer)
        .materialize(&manifest)
        .unwrap();

    assert_eq!(
        installer.installed(),
        [
            "@11ty/eleventy@2.0.1",
            "@11ty/eleventy-plugin-rss",
            "@11ty/eleventy-navigation",
            "@11ty/eleventy-plugin-syntaxhighlight",
            "eleventy-plugin-toc",
            "markdown-it",
            "markdown-it-footnote",
            "markdown-it-anchor",
            "markdown-it-attrs",
        ]
    );

    let config = &report.config_module;
    let footnote = config.find(".use(markdownItFootnote)").unwrap();
    let anchor = config.find(".use(markdownItAnchor, {").unwrap();
    let attrs = config.find(".use(markdownItAttrs);").unwrap();
    assert!(footnote < anchor && anchor < attrs);
    assert_eq!(config.matches("require(\"markdown-it\")").count(), 1);
    assert!(config.contains("eleventyConfig.addPlugin(eleventyPluginToc, {"));
    assert!(config.contains("eleventyConfig.setLibrary(\"md\", mdLib);"));
}

#[test]
fn test_install_failure_aborts_but_keeps_files() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = builtin_catalog();
    let renderer = MiniJinjaRenderer::new();
    let installer = RecordingInstaller::failing_on("@11ty/eleventy-plugin-rss");
    let manifest = manifest(
        r#"{"project": "Feed", "plugins": ["@11ty/eleventy-plugin-rss", "@11ty/eleventy-navigation"]}"#,
    );

    let result = Scaffolder::new(&catalog, &renderer, &SilentReporter, options(tmp.path()))
        .with_installer(&installer)
        .materialize(&manifest);

    assert!(result.is_err());
    assert_eq!(installer.installed(), ["@11ty/eleventy@latest"]);
    assert!(tmp.path().join("feed/eleventy.config.js").is_file());
}

#[test]
fn test_skip_install_and_dry_run() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = builtin_catalog();
    let renderer = MiniJinjaRenderer::new();
    let installer = RecordingInstaller::default();

    let skip = ScaffoldOptions { skip_install: true, ..options(tmp.path()) };
    let report = Scaffolder::new(&catalog, &renderer, &SilentReporter, skip)
        .with_installer(&installer)
        .materialize(&manifest(r#"{"project": "Quiet"}"#))
        .unwrap();
    assert!(installer.installed().is_empty());
    assert_eq!(report.dependencies.len(), 1);

    let dry = ScaffoldOptions { dry_run: true, ..options(tmp.path()) };
    let report = Scaffolder::new(&catalog, &renderer, &SilentReporter, dry)
        .with_installer(&installer)
        .materialize(&manifest(r#"{"project": "Preview"}"#))
        .unwrap();
    assert!(installer.installed().is_empty());
    assert!(!tmp.path().join("preview").exists());
    assert!(!report.files_created.is_empty());
    assert!(report.config_module.contains("module.exports = function (eleventyConfig) {"));
}

#[test]
fn test_flat_assets_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = builtin_catalog();
    let renderer = MiniJinjaRenderer::new();
    let manifest = manifest(r#"{"project": "Flat", "filters": [], "assets": {"parent": ""}}"#);

    let report = Scaffolder::new(&catalog, &renderer, &SilentReporter, options(tmp.path()))
        .materialize(&manifest)
        .unwrap();

    let root = tmp.path().join("flat");
    assert!(root.join("src/css/style.css").is_file());
    assert!(root.join("src/img/logo.svg").is_file());
    assert!(root.join("src/js").is_dir());
    assert!(report.config_module.contains("addPassthroughCopy(\"src/img\");"));
    assert!(!report.config_module.contains("require("));
}
