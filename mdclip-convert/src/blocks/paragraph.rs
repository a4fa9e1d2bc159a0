//! Paragraph wrapping
//!
//! Accumulates consecutive non-empty lines that do not start with `<` into a
//! buffer joined by spaces, flushing it as `<p>...</p>` on a blank line, on a
//! line starting with `<`, or at end of input. Lines starting with `<` are
//! HTML produced by earlier stages (or raw passthrough) and are emitted as-is;
//! they flush any pending paragraph first so block-level HTML never ends up
//! inside a `<p>`.

pub fn convert(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            flush(&mut buffer, &mut out);
        } else if line.starts_with('<') {
            flush(&mut buffer, &mut out);
            out.push(line.to_string());
        } else {
            buffer.push(line);
        }
    }
    flush(&mut buffer, &mut out);

    out.join("\n")
}

fn flush(buffer: &mut Vec<&str>, out: &mut Vec<String>) {
    if buffer.is_empty() {
        return;
    }
    let joined = buffer.join(" ");
    buffer.clear();
    if joined.trim().is_empty() {
        return;
    }
    out.push(format!("<p>{joined}</p>"));
}
