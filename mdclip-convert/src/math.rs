//! Math/diagram renderer collaborator seam
//!
//! The engine ships no rendering backend. Callers that have one (MathJax via
//! an embedded JS runtime, a LaTeX toolchain, a diagram renderer) implement
//! [`MathRenderer`] and attach it with `Converter::with_math_renderer`.
//!
//! The stage runs after the code-block stage and segments the text around the
//! emitted `<pre><code>` lines, so `$` characters inside fenced code are never
//! rendered. A fenced block tagged `mermaid` is the exception: its body is
//! routed through the renderer as a display diagram, replacing the code block.
//!
//! Dollar spans are located on the segment text and substituted in one pass,
//! display (`$$...$$`) matches shadowing any inline (`$...$`) match inside
//! them; rendered output is never re-scanned, so each span invokes the
//! renderer exactly once. A renderer failure degrades to a visible
//! `math-error` marker holding the escaped source (or, for diagrams, leaves
//! the code block as-is); it never fails the conversion.

use crate::error::ConvertError;
use regex::Regex;
use std::sync::LazyLock;

// Same shape the inline stage skips: single-line blocks from the code stage.
static CODE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<pre><code[^>]*>.*?</code></pre>").unwrap());

static MERMAID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<pre><code class="language-mermaid">(.*)</code></pre>$"#).unwrap()
});

static DISPLAY_MATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\$([^$]+)\$\$").unwrap());

static INLINE_MATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([^$\n]+)\$").unwrap());

/// External renderer for math/diagram source.
///
/// `display` distinguishes block spans (`$$`, mermaid diagrams) from inline
/// (`$`) spans. The returned string is substituted verbatim where the span was
/// found, so implementations usually return an `<img>` tag with a data URI,
/// or inline SVG.
pub trait MathRenderer {
    fn render(&self, source: &str, display: bool) -> Result<String, ConvertError>;
}

pub(crate) fn convert_math(text: &str, renderer: &dyn MathRenderer) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for block in CODE_BLOCK_RE.find_iter(text) {
        out.push_str(&convert_spans(&text[last..block.start()], renderer));
        out.push_str(&convert_code_block(block.as_str(), renderer));
        last = block.end();
    }
    out.push_str(&convert_spans(&text[last..], renderer));
    out
}

/// Mermaid blocks become rendered diagrams; any other code block is kept
/// verbatim. Failures keep the code block too, so the source stays readable.
fn convert_code_block(block: &str, renderer: &dyn MathRenderer) -> String {
    let Some(caps) = MERMAID_RE.captures(block) else {
        return block.to_string();
    };
    // The code stage collapsed the body to one line; give the renderer the
    // real line structure back.
    let source = caps[1].replace("<br>", "\n");
    match renderer.render(&source, true) {
        Ok(html) => format!(r#"<div class="diagram">{html}</div>"#),
        Err(_) => block.to_string(),
    }
}

/// Substitutes every dollar span in a code-free segment. All spans are located
/// on the input text first and rewritten back to front, so a rendered result
/// (or error marker) is never matched again.
fn convert_spans(text: &str, renderer: &dyn MathRenderer) -> String {
    let mut spans: Vec<(usize, usize, String)> = Vec::new();

    for caps in DISPLAY_MATH_RE.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let source = caps[1].trim();
        let html = match renderer.render(source, true) {
            Ok(html) => format!(r#"<div class="math math-display">{html}</div>"#),
            Err(_) => format!(
                r#"<div class="math math-display math-error">$${}$$</div>"#,
                escape(source)
            ),
        };
        spans.push((whole.start(), whole.end(), html));
    }

    for caps in INLINE_MATH_RE.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        // The inner dollars of a display span also match the inline pattern.
        if spans
            .iter()
            .any(|(start, end, _)| whole.start() < *end && *start < whole.end())
        {
            continue;
        }
        let source = caps[1].trim();
        let html = match renderer.render(source, false) {
            Ok(html) => format!(r#"<span class="math math-inline">{html}</span>"#),
            Err(_) => format!(
                r#"<span class="math math-inline math-error">${}$</span>"#,
                escape(source)
            ),
        };
        spans.push((whole.start(), whole.end(), html));
    }

    spans.sort_by_key(|(start, _, _)| *start);

    let mut out = text.to_string();
    for (start, end, html) in spans.into_iter().rev() {
        out.replace_range(start..end, &html);
    }
    out
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
