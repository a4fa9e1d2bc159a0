//! Horizontal rule conversion
//!
//! A line consisting solely of three or more repetitions of one of `-`, `*`
//! or `_` (no mixing) becomes `<hr>`. Runs before the list stage so `***` is
//! never read as a `*` list item.

use regex::Regex;
use std::sync::LazyLock;

static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(-{3,}|\*{3,}|_{3,})$").unwrap());

pub fn convert(text: &str) -> String {
    RULE_RE.replace_all(text, "<hr>").into_owned()
}
