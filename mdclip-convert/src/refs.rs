//! Reference-link definition extraction
//!
//! Scans the document for `[label]: url` definition lines, records them in a
//! lookup table keyed by lowercased label, and deletes the lines from the text.
//! Matches are rewritten in reverse textual order so earlier deletions never
//! invalidate later match offsets.
//!
//! Duplicate labels: because the reverse scan inserts the earliest definition
//! last, the first definition in document order wins. This is a deliberate,
//! documented policy rather than an accident of scan order.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static REF_DEF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\[([^\]]+)\]:[ \t]+(\S.*)$").unwrap());

/// Extracts every reference definition, returning the stripped text and the
/// label -> URL table. Zero matches is valid: empty table, text unchanged.
pub fn extract_references(text: &str) -> (String, HashMap<String, String>) {
    let mut refs = HashMap::new();
    let mut out = text.to_string();

    let matches: Vec<(usize, usize, String, String)> = REF_DEF_RE
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            let label = caps[1].to_lowercase();
            let target = caps[2].trim().to_string();
            (whole.start(), whole.end(), label, target)
        })
        .collect();

    for (start, end, label, target) in matches.into_iter().rev() {
        refs.insert(label, target);
        // Take the trailing newline with the definition line.
        let end = if out[end..].starts_with('\n') { end + 1 } else { end };
        out.replace_range(start..end, "");
    }

    (out, refs)
}
