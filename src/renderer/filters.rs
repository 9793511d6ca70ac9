pub use cruet::case::kebab::to_kebab_case;

/// Turns a project slug back into words: `my-blog` -> `my blog`.
pub fn words_filter(val: &str) -> String {
    val.split(['-', '_']).filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" ")
}
