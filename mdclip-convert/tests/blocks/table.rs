use mdclip_convert::convert;

#[test]
fn basic_table() {
    let out = convert("| A | B |\n|---|---|\n| 1 | 2 |\n");
    assert!(out.starts_with("<table>"));
    assert!(out.ends_with("</table>"));
    assert!(out.contains("<th>A</th>"));
    assert!(out.contains("<th>B</th>"));
    assert!(out.contains("<td>1</td>"));
    assert!(out.contains("<td>2</td>"));
}

#[test]
fn alignment_styles_are_applied_per_column() {
    let out = convert("| L | C | R |\n|:--|:--:|--:|\n| a | b | c |\n");
    assert!(out.contains(r#"<td style="text-align:center">b</td>"#));
    assert!(out.contains(r#"<td style="text-align:right">c</td>"#));
    assert!(out.contains("<td>a</td>"));
}

#[test]
fn header_row_without_separator_stays_text() {
    let out = convert("| A | B |\njust text\n");
    assert!(!out.contains("<table>"));
    assert!(out.contains("| A | B |"));
}

#[test]
fn table_cells_get_inline_formatting() {
    let out = convert("| H |\n|---|\n| **x** |\n");
    assert!(out.contains("<td><strong>x</strong></td>"));
}

#[test]
fn table_ends_at_first_non_pipe_line() {
    let out = convert("| A |\n|---|\n| 1 |\nafter\n");
    assert!(out.contains("</table>"));
    assert!(out.contains("<p>after</p>"));
}
