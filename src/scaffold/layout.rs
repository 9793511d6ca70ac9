use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::ext::PathExt;
use crate::manifest::ProjectManifest;

/// Absolute locations of everything a manifest asks to create.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub input: PathBuf,
    pub data: PathBuf,
    pub includes: PathBuf,
    /// Asset category directories in css, js, img order, keyed by category.
    pub assets: Vec<(&'static str, PathBuf)>,
    pub config_file: PathBuf,
}

impl ProjectLayout {
    /// Places the project at `<output_root>/<slug>`.
    ///
    /// Data, includes and asset directories live inside the input directory.
    pub fn new<P: AsRef<Path>>(output_root: P, manifest: &ProjectManifest) -> Self {
        let root = output_root.as_ref().join(manifest.slug());
        let properties = &manifest.properties;
        let input = root.join(&properties.input);
        let assets = manifest
            .assets
            .categories()
            .into_iter()
            .map(|(category, value)| (category, input.join(manifest.assets.category_dir(value))))
            .collect();

        Self {
            data: input.join(&properties.data),
            includes: input.join(&properties.includes),
            config_file: root.join(&properties.config_file),
            root,
            input,
            assets,
        }
    }

    pub fn asset_dir(&self, category: &str) -> Option<&Path> {
        self.assets
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, path)| path.as_path())
    }

    /// Asset category directory relative to the input directory, `/`-separated.
    pub fn asset_path(&self, category: &str) -> String {
        self.asset_dir(category)
            .and_then(|dir| dir.strip_prefix(&self.input).ok())
            .map(|relative| relative.to_forward_slashes())
            .unwrap_or_default()
    }

    /// Directories to create, parents first, each once.
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut directories = IndexSet::new();
        directories.insert(self.root.clone());
        directories.insert(self.input.clone());
        directories.insert(self.data.clone());
        directories.insert(self.includes.clone());
        for (_, dir) in &self.assets {
            directories.insert(dir.clone());
        }
        directories.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest(parent: &str) -> ProjectManifest {
        serde_json::from_value(json!({
            "project": "My Blog",
            "properties": {
                "input": "src", "output": "dist", "data": "_data",
                "includes": "_includes", "configFile": "config.js"
            },
            "assets": {"parent": parent, "css": "css", "js": "js", "img": "img"}
        }))
        .unwrap()
    }

    #[test]
    fn nests_assets_under_parent() {
        let layout = ProjectLayout::new("/out", &manifest("assets"));
        assert_eq!(layout.root, PathBuf::from("/out/my-blog"));
        assert_eq!(layout.data, PathBuf::from("/out/my-blog/src/_data"));
        assert_eq!(layout.config_file, PathBuf::from("/out/my-blog/config.js"));
        assert_eq!(layout.asset_dir("css"), Some(Path::new("/out/my-blog/src/assets/css")));
        assert_eq!(layout.asset_path("img"), "assets/img");
    }

    #[test]
    fn empty_parent_makes_assets_siblings() {
        let layout = ProjectLayout::new("/out", &manifest(""));
        assert_eq!(layout.asset_dir("js"), Some(Path::new("/out/my-blog/src/js")));
        assert_eq!(layout.asset_path("js"), "js");
    }

    #[test]
    fn directories_are_unique_and_parents_first() {
        let mut collapsed = manifest("static");
        collapsed.assets.img = "static".into();
        let layout = ProjectLayout::new("/out", &collapsed);
        let directories = layout.directories();
        assert_eq!(directories[0], PathBuf::from("/out/my-blog"));
        assert_eq!(directories[1], PathBuf::from("/out/my-blog/src"));
        assert_eq!(directories.len(), 7);
        assert_eq!(layout.asset_path("img"), "static");
    }
}
