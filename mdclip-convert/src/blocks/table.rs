//! Table conversion
//!
//! A line containing `|` followed by a line containing both `|` and `-` is a
//! header/separator pair. The separator yields an alignment vector applied
//! positionally to every cell in the table; all immediately following lines
//! containing `|` are body rows. A header candidate followed by anything else
//! is not a table and falls through to the paragraph stage as plain text.
//!
//! The whole table is emitted on a single line. Lines already produced by an
//! earlier stage (starting with `<`) are never treated as table headers.

/// Alignment per column as parsed from the separator row. The empty string
/// means no explicit style; cells beyond the vector get no style either.
fn parse_alignments(separator: &str) -> Vec<&'static str> {
    parse_cells(separator)
        .iter()
        .map(|cell| {
            let leading = cell.starts_with(':');
            let trailing = cell.ends_with(':');
            match (leading, trailing) {
                (true, true) => "center",
                (false, true) => "right",
                _ => "",
            }
        })
        .collect()
}

/// Splits a row on `|`, trimming cells and discarding the empty fragments
/// produced by leading/trailing pipes. Interior empty cells are kept.
fn parse_cells(line: &str) -> Vec<String> {
    let mut parts: Vec<&str> = line.split('|').collect();
    if parts.first().is_some_and(|p| p.trim().is_empty()) {
        parts.remove(0);
    }
    if parts.last().is_some_and(|p| p.trim().is_empty()) {
        parts.pop();
    }
    parts.iter().map(|p| p.trim().to_string()).collect()
}

fn emit_row(cells: &[String], alignments: &[&'static str], tag: &str, html: &mut String) {
    html.push_str("<tr>");
    for (idx, cell) in cells.iter().enumerate() {
        let align = alignments.get(idx).copied().unwrap_or("");
        if align.is_empty() {
            html.push_str(&format!("<{tag}>{cell}</{tag}>"));
        } else {
            html.push_str(&format!("<{tag} style=\"text-align:{align}\">{cell}</{tag}>"));
        }
    }
    html.push_str("</tr>");
}

pub fn convert(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut out: Vec<String> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let is_header = line.contains('|')
            && !line.starts_with('<')
            && lines
                .get(i + 1)
                .is_some_and(|next| next.contains('|') && next.contains('-'));

        if !is_header {
            out.push(line.to_string());
            i += 1;
            continue;
        }

        let alignments = parse_alignments(lines[i + 1]);
        let mut html = String::from("<table><thead>");
        emit_row(&parse_cells(line), &alignments, "th", &mut html);
        html.push_str("</thead><tbody>");

        i += 2;
        while i < lines.len() && lines[i].contains('|') {
            emit_row(&parse_cells(lines[i]), &alignments, "td", &mut html);
            i += 1;
        }
        html.push_str("</tbody></table>");
        out.push(html);
    }

    out.join("\n")
}
