use mdclip_convert::convert;

#[test]
fn single_line_quote() {
    assert_eq!(
        convert("> quoted\n"),
        "<blockquote><p>quoted</p></blockquote>"
    );
}

#[test]
fn consecutive_quote_lines_collapse_into_one_block() {
    let out = convert("> first\n> second\n");
    assert_eq!(out, "<blockquote><p>first second</p></blockquote>");
}

#[test]
fn quote_text_gets_inline_formatting() {
    let out = convert("> a **bold** word\n");
    assert_eq!(
        out,
        "<blockquote><p>a <strong>bold</strong> word</p></blockquote>"
    );
}

#[test]
fn indented_marker_is_not_a_quote() {
    let out = convert("  > not a quote\n");
    assert!(!out.contains("<blockquote>"));
}

#[test]
fn horizontal_rule_variants() {
    for input in ["---\n", "***\n", "___\n", "-----\n"] {
        let out = convert(input);
        assert_eq!(out, "<hr>", "input {input:?}");
    }
}

#[test]
fn two_dashes_are_not_a_rule() {
    let out = convert("--\n");
    assert!(!out.contains("<hr>"));
}

#[test]
fn rule_between_paragraphs() {
    let out = convert("above\n\n---\n\nbelow\n");
    let hr = out.find("<hr>").expect("rule emitted");
    let above = out.find("<p>above</p>").expect("first paragraph");
    let below = out.find("<p>below</p>").expect("second paragraph");
    assert!(above < hr && hr < below);
}
