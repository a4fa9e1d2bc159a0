use mdclip_convert::convert;

#[test]
fn fenced_block_with_language() {
    let out = convert("```rust\nfn main() {}\n```");
    assert_eq!(
        out,
        "<pre><code class=\"language-rust\">fn main() {}</code></pre>"
    );
}

#[test]
fn fenced_block_without_language() {
    let out = convert("```\nplain text\n```");
    assert!(out.contains("<code class=\"language-\">plain text</code>"));
}

#[test]
fn multiline_code_keeps_line_breaks_as_br() {
    let out = convert("```python\ndef f():\n    return 1\n```");
    assert!(out.contains("def f():<br>    return 1"));
    assert!(!out.contains("<br></code>"));
}

#[test]
fn emphasis_markers_inside_code_survive() {
    let out = convert("```\n*not italic* and _not italic_\n```");
    assert!(out.contains("*not italic*"));
    assert!(out.contains("_not italic_"));
}

#[test]
fn unterminated_fence_degrades_to_text() {
    let out = convert("```\nno closing fence");
    assert!(!out.contains("<pre>"));
    assert!(out.contains("no closing fence"));
}

#[test]
fn text_around_code_block_is_still_converted() {
    let out = convert("# Before\n\n```\nbody\n```\n\nAfter paragraph.");
    assert!(out.contains("<h1>Before</h1>"));
    assert!(out.contains("<pre><code class=\"language-\">body</code></pre>"));
    assert!(out.contains("<p>After paragraph.</p>"));
}
