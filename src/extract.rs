//! Fenced-block extraction from model responses.
//!
//! The final funnel response carries the compiled prompt inside a
//! triple-backtick fence. Only the first fence counts, and an optional
//! language tag directly after the opening marker is stripped.

use regex::Regex;
use std::sync::LazyLock;

// Deliberately permissive: fences are not anchored to line starts and the
// closing marker does not need its own line. A language tag only counts when
// a newline follows it, so a single-line fence keeps its leading word.
static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:[A-Za-z][A-Za-z0-9_+-]*\n)?(.*?)```").expect("fence regex is valid")
});

/// Returns the trimmed interior of the first triple-backtick fenced region,
/// or `None` when the text contains no fence.
///
/// `None` is distinct from a fence whose interior trims to the empty string.
pub fn fenced_block(text: &str) -> Option<String> {
    FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|content| content.as_str().trim().to_string())
}
