//! Identifier slugs derived from display names.

/// Normalize a display name into a lowercase identifier token.
///
/// `" & "` collapses to a single hyphen before the remaining spaces become
/// hyphens, so `"Data & Analytics"` yields `"data-analytics"`. Nothing else
/// is stripped or escaped.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(" & ", "-").replace(' ', "-")
}
