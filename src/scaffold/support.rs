//! Support files written next to the configuration module

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::install::PackageManager;
use crate::manifest::ProjectManifest;
use crate::renderer::TemplateRenderer;
use crate::scaffold::layout::ProjectLayout;

/// Directory a support file is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Root,
    Input,
    Includes,
    Data,
    Css,
    Img,
}

/// A file shipped with every generated project.
#[derive(Debug)]
pub struct SupportFile {
    pub template_name: &'static str,
    pub source: &'static str,
    pub location: Location,
    pub file_name: &'static str,
    /// Copied verbatim instead of rendered.
    pub verbatim: bool,
}

impl SupportFile {
    pub fn target(&self, layout: &ProjectLayout) -> PathBuf {
        let dir = match self.location {
            Location::Root => layout.root.clone(),
            Location::Input => layout.input.clone(),
            Location::Includes => layout.includes.clone(),
            Location::Data => layout.data.clone(),
            Location::Css => self.asset_dir(layout, "css"),
            Location::Img => self.asset_dir(layout, "img"),
        };
        dir.join(self.file_name)
    }

    fn asset_dir(&self, layout: &ProjectLayout, category: &str) -> PathBuf {
        layout.asset_dir(category).map(PathBuf::from).unwrap_or_else(|| layout.input.clone())
    }

    pub fn content(
        &self,
        renderer: &dyn TemplateRenderer,
        context: &serde_json::Value,
    ) -> Result<String> {
        if self.verbatim {
            return Ok(self.source.to_string());
        }
        renderer.render(self.source, context, Some(self.template_name))
    }
}

macro_rules! support_file {
    ($name:literal, $location:expr, $file_name:literal, $verbatim:literal) => {
        SupportFile {
            template_name: $name,
            source: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $name)),
            location: $location,
            file_name: $file_name,
            verbatim: $verbatim,
        }
    };
}

/// Support files in the order they are written.
pub const SUPPORT_FILES: &[SupportFile] = &[
    support_file!("README.md.j2", Location::Root, "README.md", false),
    support_file!("gitignore.j2", Location::Root, ".gitignore", false),
    support_file!("package.json.j2", Location::Root, "package.json", false),
    support_file!("index.njk.j2", Location::Input, "index.njk", false),
    support_file!("base.njk.j2", Location::Includes, "base.njk", false),
    support_file!("site.json.j2", Location::Data, "site.json", false),
    support_file!("style.css", Location::Css, "style.css", true),
    support_file!("logo.svg", Location::Img, "logo.svg", true),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetPaths {
    pub css: String,
    pub js: String,
    pub img: String,
}

/// Values available to support-file templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateContext {
    pub project: String,
    pub input: String,
    pub output: String,
    pub data: String,
    pub includes: String,
    pub config_file: String,
    pub assets: AssetPaths,
    pub run_cmd: String,
}

impl TemplateContext {
    pub fn new(
        manifest: &ProjectManifest,
        layout: &ProjectLayout,
        package_manager: PackageManager,
    ) -> Self {
        let properties = &manifest.properties;
        Self {
            project: manifest.project.clone(),
            input: properties.input.clone(),
            output: properties.output.clone(),
            data: properties.data.clone(),
            includes: properties.includes.clone(),
            config_file: properties.config_file.clone(),
            assets: AssetPaths {
                css: layout.asset_path("css"),
                js: layout.asset_path("js"),
                img: layout.asset_path("img"),
            },
            run_cmd: package_manager.run_command(),
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
