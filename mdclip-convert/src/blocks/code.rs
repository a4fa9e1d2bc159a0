//! Fenced code block conversion
//!
//! Recognizes blocks delimited by triple-backtick lines, optionally tagged with
//! a language token, and replaces them with a single-line
//! `<pre><code class="language-X">...</code></pre>`. The match is non-greedy:
//! a block ends at the nearest following fence, not the last one in the
//! document, so an unterminated fence is left as literal text.
//!
//! Inner newlines become `<br>` so rich-text editors keep line breaks on paste
//! and the later line-oriented stages never look inside the block. Content is
//! passed through verbatim otherwise; escaping is not this stage's concern.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^```([A-Za-z0-9_+.-]*)[ \t]*\n(.*?)^```[ \t]*$").unwrap()
});

pub fn convert(text: &str) -> String {
    FENCE_RE
        .replace_all(text, |caps: &Captures| {
            let language = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let body = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            // The capture ends just before the closing fence line, so it
            // carries one trailing newline that is fence syntax, not content.
            let body = body.strip_suffix('\n').unwrap_or(body);
            format!(
                "<pre><code class=\"language-{language}\">{}</code></pre>",
                body.replace('\n', "<br>")
            )
        })
        .into_owned()
}
