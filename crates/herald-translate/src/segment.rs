//! Changelog text segmentation

use regex::Regex;
use std::sync::LazyLock;

/// Regex splitting a line at sentence boundaries (period followed by whitespace)
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s+").expect("Invalid regex"));

/// Collapse interior whitespace runs to single spaces and trim the ends
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split raw changelog text into normalized statements.
///
/// Lines are split first, then each line is split at sentence boundaries.
/// Fragments are trimmed, stripped of leading and trailing periods, and
/// whitespace-normalized; fragments that end up empty are dropped. Empty
/// input yields an empty vector.
pub fn segment_statements(raw: &str) -> Vec<String> {
    let mut statements = Vec::new();

    for line in raw.split('\n') {
        for fragment in SENTENCE_BREAK.split(line) {
            let cleaned = normalize(fragment.trim().trim_matches('.'));
            if !cleaned.is_empty() {
                statements.push(cleaned);
            }
        }
    }

    statements
}
