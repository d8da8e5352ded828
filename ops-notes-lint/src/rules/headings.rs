//! Required section headings.

/// Section markers every ops note must contain, in report order.
pub const REQUIRED_HEADINGS: &[&str] = &[
    "## Purpose",
    "## When to use this",
    "## Applies to",
    "## Does not apply to",
    "## Constraints",
    "## Follow-ups",
];

/// Return the required headings that do not occur in `content`.
///
/// A heading counts as present when its literal text appears anywhere in the
/// note, including inside code blocks or quotes; matching is neither
/// line-anchored nor markdown-aware. The result keeps the order of
/// [`REQUIRED_HEADINGS`]. An empty result means the note passes.
#[must_use]
pub fn missing_headings(content: &str) -> Vec<&'static str> {
    REQUIRED_HEADINGS
        .iter()
        .copied()
        .filter(|heading| !content.contains(*heading))
        .collect()
}
