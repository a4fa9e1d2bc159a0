//! Document assembly (fragment -> full HTML document)
//!
//! Wraps a converted fragment in a complete HTML document with embedded CSS,
//! inside a `<body class="markdown-body">` container that the stylesheets
//! target. CSS layering follows the usual baseline-plus-theme scheme:
//! `css/baseline.css` always applies, a theme file may override it, and any
//! custom CSS is appended last.
//!
//! Assembly also normalizes whitespace for the clipboard: rich text editors
//! turn newlines between tags into visible gaps, so whitespace between tags is
//! removed and remaining newlines become spaces. Code blocks are unaffected
//! since the code stage already converted their newlines to `<br>`.

use crate::error::ConvertError;
use regex::Regex;
use std::sync::LazyLock;

static BETWEEN_TAGS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());

/// Available CSS themes for assembled documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HtmlTheme {
    /// GitHub light styling (baseline only)
    #[default]
    GithubLight,
    /// Dark color overrides layered on the baseline
    GithubDark,
}

impl HtmlTheme {
    /// Resolves a configuration/CLI theme name.
    pub fn from_name(name: &str) -> Result<Self, ConvertError> {
        match name {
            "github-light" | "light" | "default" => Ok(HtmlTheme::GithubLight),
            "github-dark" | "dark" => Ok(HtmlTheme::GithubDark),
            other => Err(ConvertError::Theme(other.to_string())),
        }
    }
}

/// Options for document assembly
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// CSS theme to use
    pub theme: HtmlTheme,
    /// Optional custom CSS appended after the baseline and theme CSS
    pub custom_css: Option<String>,
}

impl HtmlOptions {
    pub fn new(theme: HtmlTheme) -> Self {
        Self {
            theme,
            custom_css: None,
        }
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// The CSS a document assembled with this theme embeds, before custom CSS.
pub fn embedded_css(theme: HtmlTheme) -> String {
    let baseline = include_str!("../css/baseline.css");
    let theme_css = match theme {
        HtmlTheme::GithubLight => "",
        HtmlTheme::GithubDark => include_str!("../css/themes/theme-github-dark.css"),
    };
    if theme_css.is_empty() {
        baseline.to_string()
    } else {
        format!("{baseline}\n{theme_css}")
    }
}

/// Wraps an HTML fragment in a complete, clipboard-ready document.
pub fn assemble(fragment: &str, options: &HtmlOptions) -> String {
    let body = normalize_whitespace(fragment);
    let css = embedded_css(options.theme);
    let custom_css = options.custom_css.as_deref().unwrap_or("");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
{css}
{custom_css}
</style>
</head>
<body class="markdown-body">{body}</body>
</html>"#
    )
}

/// Removes whitespace between tags and converts remaining newlines to spaces
/// so pasted content has no stray gaps.
fn normalize_whitespace(html: &str) -> String {
    let collapsed = BETWEEN_TAGS_RE.replace_all(html, "><");
    collapsed.replace('\n', " ")
}
