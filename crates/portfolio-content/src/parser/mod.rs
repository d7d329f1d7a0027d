//! Line grammars for the hand-authored content files.
//!
//! Every parser here is total: unknown lines are ignored and missing values
//! fall back to defaults, so a typo in a content file degrades one record
//! instead of failing the whole build.
pub mod display;
pub mod project;
pub mod sections;
pub mod skills;

/// Returns the trimmed text after the first occurrence of `marker`.
///
/// `value_after("Year - 2023", "Year -")` → `Some("2023")`
pub(crate) fn value_after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker)
        .map(|pos| line[pos + marker.len()..].trim())
}

/// Splits a comma-separated value, trimming items and dropping empty ones.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lower-cases and joins whitespace runs with a hyphen, e.g. "Fusion 360" → "fusion-360".
pub(crate) fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
