use mdclip_convert::convert;

#[test]
fn bold_and_italic_in_a_paragraph() {
    let out = convert("This is **bold** and *italic* text.\n");
    assert_eq!(
        out,
        "<p>This is <strong>bold</strong> and <em>italic</em> text.</p>"
    );
}

#[test]
fn underscore_forms() {
    let out = convert("both __bold__ and _italic_ here\n");
    assert!(out.contains("<strong>bold</strong>"));
    assert!(out.contains("<em>italic</em>"));
}

#[test]
fn snake_case_identifiers_survive_a_paragraph() {
    let out = convert("call parse_cells_fast then emit_row_to_html\n");
    assert!(out.contains("parse_cells_fast"));
    assert!(out.contains("emit_row_to_html"));
    assert!(!out.contains("<em>"));
}

#[test]
fn bold_marker_is_not_double_italicized() {
    let out = convert("**only bold**\n");
    assert_eq!(out, "<p><strong>only bold</strong></p>");
}

#[test]
fn strikethrough_with_surrounding_text() {
    let out = convert("keep ~~drop~~ keep\n");
    assert!(out.contains("keep <del>drop</del> keep"));
}

#[test]
fn inline_code_keeps_literal_markers() {
    let out = convert("run `cargo build --release` now\n");
    assert!(out.contains("<code>cargo build --release</code>"));
}

#[test]
fn mixed_emphasis_and_code_on_one_line() {
    let out = convert("**b** then `code` then *i*\n");
    assert!(out.contains("<strong>b</strong>"));
    assert!(out.contains("<code>code</code>"));
    assert!(out.contains("<em>i</em>"));
}
