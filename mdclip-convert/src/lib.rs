//! GitHub Flavored Markdown to rich-HTML conversion for mdclip
//!
//!     This crate turns GFM source text into an HTML fragment suitable for
//!     placement on the system clipboard as rich-text content, so pasting into
//!     word processors, chat apps and web editors keeps GitHub-style formatting.
//!
//!     TLDR: For stage authors:
//!         - The engine is a single-pass, multi-stage text rewriter. There is no AST;
//!           each stage takes the previous stage's string and produces a new one.
//!         - Stage order is a correctness contract, not a style choice. Code blocks must
//!           be consumed before headers and emphasis so `#`, `*` and `_` inside code are
//!           never mistaken for formatting. Do not reorder stages.
//!         - Every stage degrades to leaving malformed text unconverted. convert() is
//!           total: no panics, no Result, empty in -> empty out.
//!
//! Architecture
//!
//!     The pipeline runs in a fixed order over the whole document string:
//!
//!     raw text
//!       -> reference definitions extracted   (refs.rs)
//!       -> fenced code blocks                (blocks/code.rs)
//!       -> blockquotes                       (blocks/quote.rs)
//!       -> headers, 6 down to 1              (blocks/heading.rs)
//!       -> horizontal rules                  (blocks/rule.rs)
//!       -> tables                            (blocks/table.rs)
//!       -> lists (stateful frame stack)      (blocks/list.rs)
//!       -> paragraphs                        (blocks/paragraph.rs)
//!       -> inline rules                      (inline.rs)
//!       -> HTML fragment
//!
//!     Lines produced by a block stage start with `<` and are passed through
//!     untouched by everything downstream. Fenced code blocks are collapsed to a
//!     single line (inner newlines become `<br>`) both so rich-text editors keep the
//!     line breaks on paste and so the line-oriented stages never look inside them.
//!
//!     The file structure:
//!     .
//!     ├── lib.rs
//!     ├── error.rs            # ConvertError for collaborator seams
//!     ├── refs.rs             # reference-link definition extraction
//!     ├── blocks
//!     │   ├── code.rs         # fenced code blocks
//!     │   ├── quote.rs        # blockquote runs
//!     │   ├── heading.rs      # ATX headers
//!     │   ├── rule.rs         # horizontal rules
//!     │   ├── table.rs        # header/separator/body tables with alignment
//!     │   ├── list.rs         # nested list state machine, task items
//!     │   └── paragraph.rs    # paragraph accumulation and HTML passthrough
//!     ├── inline.rs           # images, links, autolinks, emphasis, code spans
//!     ├── math.rs             # optional MathRenderer collaborator seam
//!     ├── document.rs         # fragment -> full document assembly, CSS themes
//!     └── css/                # embedded baseline and theme stylesheets
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs              # declares subdirectory modules for discovery
//!     ├── blocks/...          # per-stage integration tests
//!     ├── inline/...
//!     └── pipeline.rs         # end-to-end and totality (proptest) tests
//!
//! Library Choices
//!
//!     The engine is regex-substitution based, using the `regex` crate with
//!     LazyLock statics compiled once per pattern. `regex` has no lookbehind, so
//!     rules that need boundary context (autolinks, underscore italics) either
//!     capture the boundary character or collect match ranges and rewrite them in
//!     reverse order so earlier replacements never invalidate later offsets.
//!
//!     The library is shell agnostic: no printing, no env vars, no process exit.
//!     Clipboard access, image fetching and editor invocation live in mdclip-cli.

pub mod blocks;
pub mod document;
pub mod error;
pub mod inline;
pub mod math;
pub mod refs;

pub use document::{assemble, HtmlOptions, HtmlTheme};
pub use error::ConvertError;
pub use math::MathRenderer;

/// Converts GitHub Flavored Markdown to an HTML fragment.
///
/// The result is body content only; use [`assemble`] to wrap it in a styled
/// document shell. The function is total over all string inputs: malformed
/// constructs are left as literal text rather than reported as errors.
pub fn convert(markdown: &str) -> String {
    Converter::new().convert(markdown)
}

/// Conversion pipeline with optional collaborator hooks.
///
/// The plain [`convert`] function covers the common case; the builder exists
/// for callers that want math/diagram spans rendered by an external backend.
#[derive(Default)]
pub struct Converter<'a> {
    math: Option<&'a dyn MathRenderer>,
}

impl<'a> Converter<'a> {
    pub fn new() -> Self {
        Self { math: None }
    }

    /// Renders `$...$` / `$$...$$` spans and `mermaid` code blocks through
    /// the given backend. Renderer failures degrade to a visible marker (or
    /// leave the code block in place), never a pipeline error.
    pub fn with_math_renderer(mut self, renderer: &'a dyn MathRenderer) -> Self {
        self.math = Some(renderer);
        self
    }

    /// Runs the full stage pipeline. See the module docs for the ordering contract.
    pub fn convert(&self, markdown: &str) -> String {
        let (text, refs) = refs::extract_references(markdown);
        let text = blocks::code::convert(&text);
        let text = match self.math {
            Some(renderer) => math::convert_math(&text, renderer),
            None => text,
        };
        let text = blocks::quote::convert(&text);
        let text = blocks::heading::convert(&text);
        let text = blocks::rule::convert(&text);
        let text = blocks::table::convert(&text);
        let text = blocks::list::convert(&text);
        let text = blocks::paragraph::convert(&text);
        inline::convert(&text, &refs)
    }
}
