/// Folds a lookup token into its comparison form.
///
/// Trims, collapses internal whitespace to single spaces and lower-cases.
/// Thai script has no case, so its codepoints pass through unchanged.
pub fn normalize(token: &str) -> String {
    token
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Activity-type identifier derived from an English display name.
///
/// This is the lookup string stored records were historically keyed by:
/// lower-cased, spaces and hyphens to `_`, parentheses dropped.
pub fn activity_slug(name_en: &str) -> String {
    name_en
        .to_lowercase()
        .replace(' ', "_")
        .replace(['(', ')'], "")
        .replace('-', "_")
}
