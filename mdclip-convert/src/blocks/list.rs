//! List conversion state machine
//!
//! Processes lines in order against a stack of open list frames. Each frame
//! records the list kind (ul/ol) and the indent column its items start at; the
//! stack is strictly increasing in indent from bottom to top.
//!
//! Reconciliation per item line: pop frames deeper than the current indent,
//! push a new frame when the item is deeper than the top, pop-then-push when
//! the kind changes at the same indent. Non-item lines close every open frame
//! and pass through unchanged, as does end of input.
//!
//! Open/close tags are emitted as flat sibling lines interleaved with the
//! `<li>` lines, not nested inside the parent `<li>`. HTML's permissive
//! parsing still renders this as visually nested lists.
//!
//! Task items (`- [ ]` / `- [x]`) become unordered items whose content is
//! prefixed with a Unicode checkbox symbol instead of an `<input>` element,
//! which survives pasting into editors that strip form controls.

use regex::Regex;
use std::sync::LazyLock;

const CHECKED: &str = "\u{2611} "; // ☑
const UNCHECKED: &str = "\u{2610} "; // ☐

static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\. +(.*)$").unwrap());
static TASK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^- \[( |x|X)\] (.*)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// One currently-open list.
struct Frame {
    kind: ListKind,
    indent: usize,
}

/// An item line classified as kind + content, or not an item at all.
fn classify(line: &str) -> Option<(ListKind, String)> {
    let trimmed = line.trim_start();

    if let Some(caps) = TASK_RE.captures(trimmed) {
        let symbol = match &caps[1] {
            " " => UNCHECKED,
            _ => CHECKED,
        };
        return Some((ListKind::Unordered, format!("{symbol}{}", &caps[2])));
    }

    for marker in ["- ", "* ", "+ "] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return Some((ListKind::Unordered, rest.to_string()));
        }
    }

    if let Some(caps) = ORDERED_RE.captures(trimmed) {
        return Some((ListKind::Ordered, caps[1].to_string()));
    }

    None
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

pub fn convert(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for line in text.lines() {
        let Some((kind, content)) = classify(line) else {
            close_all(&mut stack, &mut out);
            out.push(line.to_string());
            continue;
        };

        let indent = indent_of(line);

        while stack.last().is_some_and(|top| top.indent > indent) {
            let frame = stack.pop().unwrap();
            out.push(frame.kind.close_tag().to_string());
        }

        match stack.last() {
            Some(top) if top.indent == indent && top.kind != kind => {
                let frame = stack.pop().unwrap();
                out.push(frame.kind.close_tag().to_string());
                open(kind, indent, &mut stack, &mut out);
            }
            Some(top) if top.indent < indent => open(kind, indent, &mut stack, &mut out),
            None => open(kind, indent, &mut stack, &mut out),
            _ => {}
        }

        out.push(format!("<li>{content}</li>"));
    }

    close_all(&mut stack, &mut out);
    out.join("\n")
}

fn open(kind: ListKind, indent: usize, stack: &mut Vec<Frame>, out: &mut Vec<String>) {
    out.push(kind.open_tag().to_string());
    stack.push(Frame { kind, indent });
}

fn close_all(stack: &mut Vec<Frame>, out: &mut Vec<String>) {
    while let Some(frame) = stack.pop() {
        out.push(frame.kind.close_tag().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_unordered_list() {
        assert_eq!(
            convert("- a\n- b"),
            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn all_unordered_markers_work() {
        for marker in ["-", "*", "+"] {
            let out = convert(&format!("{marker} item"));
            assert_eq!(out, "<ul>\n<li>item</li>\n</ul>");
        }
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            convert("1. first\n2. second"),
            "<ol>\n<li>first</li>\n<li>second</li>\n</ol>"
        );
    }

    #[test]
    fn nested_list_opens_and_closes_all_frames() {
        let out = convert("- outer\n  - inner\n");
        assert_eq!(
            out,
            "<ul>\n<li>outer</li>\n<ul>\n<li>inner</li>\n</ul>\n</ul>"
        );
    }

    #[test]
    fn dedent_pops_back_to_outer_frame() {
        let out = convert("- a\n  - b\n- c");
        assert_eq!(
            out,
            "<ul>\n<li>a</li>\n<ul>\n<li>b</li>\n</ul>\n<li>c</li>\n</ul>"
        );
    }

    #[test]
    fn kind_change_at_same_indent_swaps_lists() {
        let out = convert("- a\n1. b");
        assert_eq!(
            out,
            "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>"
        );
    }

    #[test]
    fn task_items_use_unicode_checkboxes() {
        let out = convert("- [ ] todo\n- [x] done\n- [X] also done");
        assert!(out.contains("<li>\u{2610} todo</li>"));
        assert!(out.contains("<li>\u{2611} done</li>"));
        assert!(out.contains("<li>\u{2611} also done</li>"));
        assert!(!out.contains("checkbox"));
    }

    #[test]
    fn non_item_line_closes_open_lists() {
        let out = convert("- a\nplain");
        assert_eq!(out, "<ul>\n<li>a</li>\n</ul>\nplain");
    }
}
