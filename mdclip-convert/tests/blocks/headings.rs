use mdclip_convert::convert;

#[test]
fn converts_all_six_levels() {
    for level in 1..=6 {
        let input = format!("{} X", "#".repeat(level));
        let out = convert(&input);
        assert_eq!(out, format!("<h{level}>X</h{level}>"));
    }
}

#[test]
fn hash_without_space_is_not_a_header() {
    for level in 1..=6 {
        let input = format!("{}X", "#".repeat(level));
        let out = convert(&input);
        assert!(
            !out.contains(&format!("<h{level}>")),
            "'{input}' must not become a header, got: {out}"
        );
    }
}

#[test]
fn header_text_gets_inline_formatting() {
    let out = convert("## A **bold** title");
    assert_eq!(out, "<h2>A <strong>bold</strong> title</h2>");
}

#[test]
fn hash_inside_code_block_is_not_a_header() {
    let out = convert("```\n# comment\n```");
    assert!(!out.contains("<h1>"));
    assert!(out.contains("# comment"));
}
