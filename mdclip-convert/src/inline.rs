//! Inline conversion rules
//!
//! Applied once, after all block stages, to the full text. The rule order is a
//! contract: each rule must not re-match the output of an earlier one in the
//! same pass. Images run before links (a failed image must not become a link
//! with a `!` prefix), links before autolinks (an href URL is shielded by its
//! leading quote), emphasis before code spans (a backtick span is recognized
//! textually regardless of surrounding markers).
//!
//! `regex` has no lookbehind, so boundary-sensitive rules capture the
//! preceding character (autolinks) or collect match ranges and rewrite them in
//! reverse order (underscore italics) so offsets stay valid.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

// Code blocks were already emitted by the block stage; inline rules apply to
// what remains outside them. Blocks are single lines, so `.` never crosses one.
static PROTECTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<pre><code[^>]*>.*?</code></pre>").unwrap());

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!\[([^\]]*)\]\(([^)\s]+)(?: +"([^"]*)")?\)"#).unwrap()
});

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

static REF_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\[([^\]]+)\]").unwrap());

static AUTOLINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)(^|[^"=])\b(https?://[^\s<]+)"#).unwrap());

static BOLD_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static BOLD_UNDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.+?)__").unwrap());
static ITALIC_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());
static ITALIC_UNDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_([^_\n]+)_").unwrap());
static STRIKE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

/// Applies the inline rules in their fixed order, resolving reference links
/// against the table built by [`crate::refs::extract_references`]. Content of
/// already-emitted code blocks is passed through untouched.
pub fn convert(text: &str, refs: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for protected in PROTECTED_RE.find_iter(text) {
        out.push_str(&convert_segment(&text[last..protected.start()], refs));
        out.push_str(protected.as_str());
        last = protected.end();
    }
    out.push_str(&convert_segment(&text[last..], refs));
    out
}

fn convert_segment(text: &str, refs: &HashMap<String, String>) -> String {
    let text = convert_images(text);
    let text = convert_links(&text);
    let text = convert_ref_links(&text, refs);
    let text = convert_autolinks(&text);
    let text = convert_bold(&text);
    let text = convert_italic(&text);
    let text = STRIKE_RE.replace_all(&text, "<del>$1</del>").into_owned();
    CODE_RE.replace_all(&text, "<code>$1</code>").into_owned()
}

fn convert_images(text: &str) -> String {
    IMAGE_RE
        .replace_all(text, |caps: &Captures| {
            let alt = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let src = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            let title = caps.get(3).map(|m| m.as_str()).unwrap_or("");
            format!(r#"<img alt="{alt}" src="{src}" title="{title}">"#)
        })
        .into_owned()
}

fn convert_links(text: &str) -> String {
    LINK_RE
        .replace_all(text, r#"<a href="$2">$1</a>"#)
        .into_owned()
}

fn convert_ref_links(text: &str, refs: &HashMap<String, String>) -> String {
    REF_LINK_RE
        .replace_all(text, |caps: &Captures| {
            let label = caps[2].to_lowercase();
            match refs.get(&label) {
                Some(url) => format!(r#"<a href="{url}">{}</a>"#, &caps[1]),
                // Unresolvable labels stay literal; not an error.
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn convert_autolinks(text: &str) -> String {
    AUTOLINK_RE
        .replace_all(text, |caps: &Captures| {
            let prefix = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let url = &caps[2];
            format!(r#"{prefix}<a href="{url}">{url}</a>"#)
        })
        .into_owned()
}

fn convert_bold(text: &str) -> String {
    let text = BOLD_STAR_RE.replace_all(text, "<strong>$1</strong>");
    BOLD_UNDER_RE
        .replace_all(&text, "<strong>$1</strong>")
        .into_owned()
}

fn convert_italic(text: &str) -> String {
    let text = ITALIC_STAR_RE.replace_all(text, "<em>$1</em>").into_owned();
    convert_italic_underscore(&text)
}

/// `_text_` converts only when neither side touches a word character, `_` or
/// `*`. Matches are rewritten in reverse so offsets stay valid.
fn convert_italic_underscore(text: &str) -> String {
    let mut out = text.to_string();
    let matches: Vec<(usize, usize, String)> = ITALIC_UNDER_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0).unwrap();
            if boundary_blocks(text, whole.start(), whole.end()) {
                return None;
            }
            Some((whole.start(), whole.end(), caps[1].to_string()))
        })
        .collect();

    for (start, end, inner) in matches.into_iter().rev() {
        out.replace_range(start..end, &format!("<em>{inner}</em>"));
    }
    out
}

fn boundary_blocks(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    let blocks = |c: char| c.is_alphanumeric() || c == '_' || c == '*';
    before.is_some_and(blocks) || after.is_some_and(blocks)
}
