//! Blockquote conversion
//!
//! Consumes maximal runs of consecutive `>`-prefixed lines, strips one leading
//! `>` plus surrounding whitespace from each, and joins them with single spaces
//! into one `<blockquote><p>...</p></blockquote>` line. A run ends at the first
//! line without the prefix, blank lines included. Multi-paragraph and nested
//! quotes are not supported; they collapse into the single paragraph.

pub fn convert(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut quoted: Vec<String> = Vec::new();

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix('>') {
            quoted.push(rest.trim().to_string());
        } else {
            flush(&mut quoted, &mut out);
            out.push(line.to_string());
        }
    }
    flush(&mut quoted, &mut out);

    out.join("\n")
}

fn flush(quoted: &mut Vec<String>, out: &mut Vec<String>) {
    if quoted.is_empty() {
        return;
    }
    out.push(format!("<blockquote><p>{}</p></blockquote>", quoted.join(" ")));
    quoted.clear();
}
