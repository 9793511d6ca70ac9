//! Catalog shipped inside the binary.
//!
//! Mirrors the on-disk layout under `catalog/` so both sources go through the
//! same registration path. Entries are listed in lexical path order.

pub(crate) const ADDONS: &[(&str, &str)] = &[
    (
        "collections/posts.js",
        include_str!("../../catalog/addons/collections/posts.js"),
    ),
    (
        "collections/tagList.js",
        include_str!("../../catalog/addons/collections/tagList.js"),
    ),
    (
        "filters/filterTagList.js",
        include_str!("../../catalog/addons/filters/filterTagList.js"),
    ),
    (
        "filters/getAllTags.js",
        include_str!("../../catalog/addons/filters/getAllTags.js"),
    ),
    ("filters/head.js", include_str!("../../catalog/addons/filters/head.js")),
    (
        "filters/htmlDateString.js",
        include_str!("../../catalog/addons/filters/htmlDateString.js"),
    ),
    (
        "filters/readableDate.js",
        include_str!("../../catalog/addons/filters/readableDate.js"),
    ),
    (
        "shortcodes/excerpt.js",
        include_str!("../../catalog/addons/shortcodes/excerpt.js"),
    ),
    ("shortcodes/year.js", include_str!("../../catalog/addons/shortcodes/year.js")),
];

pub(crate) const ELEVENTY_PLUGINS: &str =
    include_str!("../../catalog/plugins/eleventy.yaml");

pub(crate) const MARKDOWN_PLUGINS: &str =
    include_str!("../../catalog/plugins/markdown.yaml");

pub(crate) const BUNDLES: &str = include_str!("../../catalog/bundles.yaml");
