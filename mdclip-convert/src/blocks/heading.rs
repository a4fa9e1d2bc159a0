//! ATX header conversion
//!
//! Levels are matched from 6 down to 1 so a shorter hash run never falsely
//! matches the prefix of a longer one. The space after the hash run is
//! mandatory: `#NoSpace` stays literal text.

use regex::Regex;
use std::sync::LazyLock;

static HEADING_RES: LazyLock<Vec<(usize, Regex)>> = LazyLock::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let pattern = format!(r"(?m)^#{{{level}}} (.*)$");
            (level, Regex::new(&pattern).unwrap())
        })
        .collect()
});

pub fn convert(text: &str) -> String {
    let mut out = text.to_string();
    for (level, re) in HEADING_RES.iter() {
        out = re
            .replace_all(&out, format!("<h{level}>$1</h{level}>"))
            .into_owned();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_levels_convert() {
        for level in 1..=6 {
            let input = format!("{} Title", "#".repeat(level));
            assert_eq!(convert(&input), format!("<h{level}>Title</h{level}>"));
        }
    }

    #[test]
    fn missing_space_does_not_convert() {
        assert_eq!(convert("#NoSpace"), "#NoSpace");
        assert_eq!(convert("###Tight"), "###Tight");
    }

    #[test]
    fn seven_hashes_do_not_convert() {
        assert_eq!(convert("####### Deep"), "####### Deep");
    }

    #[test]
    fn mid_line_hashes_are_ignored() {
        assert_eq!(convert("see # this"), "see # this");
    }
}
