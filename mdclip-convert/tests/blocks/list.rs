use mdclip_convert::convert;

#[test]
fn flat_list_end_to_end() {
    let out = convert("- List item 1\n- List item 2\n");
    assert_eq!(
        out,
        "<ul>\n<li>List item 1</li>\n<li>List item 2</li>\n</ul>"
    );
}

#[test]
fn nested_list_opens_inner_before_deeper_item_and_closes_everything() {
    let out = convert("- outer\n  - inner\n");
    assert_eq!(out.matches("<ul>").count(), 2);
    assert_eq!(out.matches("</ul>").count(), 2);

    let inner_open = out.find("<ul>\n<li>inner").or_else(|| {
        // The nested <ul> sits between the outer and inner items.
        let second_ul = out.match_indices("<ul>").nth(1).map(|(i, _)| i)?;
        let inner_li = out.find("<li>inner</li>")?;
        (second_ul < inner_li).then_some(second_ul)
    });
    assert!(inner_open.is_some(), "nested <ul> must open before the deeper <li>: {out}");
}

#[test]
fn ordered_and_unordered_nesting() {
    let out = convert("1. first\n   - sub\n2. second\n");
    assert!(out.contains("<ol>"));
    assert!(out.contains("<ul>"));
    let expected = "<ol>\n<li>first</li>\n<ul>\n<li>sub</li>\n</ul>\n<li>second</li>\n</ol>";
    assert_eq!(out, expected);
}

#[test]
fn task_items_render_unicode_checkboxes() {
    let out = convert("- [ ] A\n- [x] B\n");
    assert!(out.contains("\u{2610} A"));
    assert!(out.contains("\u{2611} B"));
    assert!(!out.contains("<input"));
}

#[test]
fn kind_change_at_same_indent_starts_a_new_list() {
    let out = convert("- bullet\n1. number\n");
    assert_eq!(
        out,
        "<ul>\n<li>bullet</li>\n</ul>\n<ol>\n<li>number</li>\n</ol>"
    );
}

#[test]
fn paragraph_after_list_closes_it() {
    let out = convert("- item\n\ntrailing text\n");
    let close = out.find("</ul>").expect("list closed");
    let para = out.find("<p>trailing text</p>").expect("paragraph follows");
    assert!(close < para);
}
