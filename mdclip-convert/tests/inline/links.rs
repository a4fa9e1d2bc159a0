use mdclip_convert::convert;

#[test]
fn inline_link_in_a_paragraph() {
    let out = convert("see [docs](https://example.com/docs) for more\n");
    assert!(out.contains(r#"<a href="https://example.com/docs">docs</a>"#));
}

#[test]
fn reference_link_resolves_against_a_later_definition() {
    let out = convert("search on [Google][gg] today\n\n[gg]: https://google.com\n");
    assert!(out.contains(r#"<a href="https://google.com">Google</a>"#));
    assert!(!out.contains("[gg]:"));
}

#[test]
fn first_definition_wins_on_duplicate_labels() {
    let input = "[x][l]\n\n[l]: https://first.example\n[l]: https://second.example\n";
    let out = convert(input);
    assert!(out.contains(r#"href="https://first.example""#));
    assert!(!out.contains("second.example"));
}

#[test]
fn undefined_reference_stays_literal() {
    let out = convert("a [broken][nope] ref\n");
    assert!(out.contains("[broken][nope]"));
    assert!(!out.contains("<a "));
}

#[test]
fn bare_url_becomes_a_link() {
    let out = convert("visit https://example.com today\n");
    assert!(out.contains(r#"<a href="https://example.com">https://example.com</a>"#));
}

#[test]
fn image_before_link_rule() {
    let out = convert("![logo](logo.png) and [home](https://example.com)\n");
    assert!(out.contains(r#"<img alt="logo" src="logo.png" title="">"#));
    assert!(out.contains(r#"<a href="https://example.com">home</a>"#));
    assert!(!out.contains("!<a"));
}

#[test]
fn url_inside_href_is_not_linked_twice() {
    let out = convert("[text](https://example.com)\n");
    assert_eq!(out.matches("<a href=").count(), 1);
}
