// Command-line interface for mdclip
//
// Reads GitHub Flavored Markdown from a file or stdin, converts it to a
// styled HTML document and places it on the system clipboard, ready to paste
// into rich text editors (Word, Google Docs, Slack, mail clients).
//
// Usage:
//  mdclip README.md             - convert a file and copy to the clipboard
//  cat notes.md | mdclip        - convert stdin
//  mdclip -e                    - draft in $EDITOR, then convert
//  mdclip --stdout README.md    - print the HTML document instead
//  mdclip --fragment README.md  - print only the converted body fragment
//
// The conversion itself lives in mdclip-convert; configuration layering in
// mdclip-config. This binary only does shell work: argument parsing, file and
// stdin IO, the $EDITOR round trip, image inlining and clipboard placement.

mod clipboard;
mod editor;
mod images;

use clap::{Arg, ArgAction, Command, ValueHint};
use mdclip_config::{Loader, MdclipConfig};
use mdclip_convert::{assemble, document};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

fn build_cli() -> Command {
    Command::new("mdclip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert GitHub Flavored Markdown to rich HTML clipboard content")
        .long_about(
            "mdclip converts GitHub Flavored Markdown to styled HTML and copies it\n\
            to the system clipboard, so pasting into rich text editors keeps the\n\
            formatting.\n\n\
            Input comes from a file argument or stdin. By default the result goes\n\
            to the clipboard; use --stdout, --fragment or -o to print or save it\n\
            instead.\n\n\
            Examples:\n  \
            mdclip README.md               # Copy converted file to clipboard\n  \
            cat notes.md | mdclip          # Convert stdin\n  \
            mdclip -e                      # Draft in $EDITOR first\n  \
            mdclip --theme github-dark README.md\n  \
            mdclip --stdout README.md > page.html",
        )
        .arg(
            Arg::new("file")
                .help("Input markdown file (stdin if omitted)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("edit")
                .long("edit")
                .short('e')
                .help("Open $EDITOR on the input before converting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Write the HTML document to a file instead of the clipboard")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the HTML document to stdout instead of the clipboard")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("fragment")
                .long("fragment")
                .help("Print only the converted fragment, without the document shell")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("NAME")
                .help("CSS theme: github-light (default) or github-dark")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdclip.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("print-css")
                .long("print-css")
                .help("Print the embedded CSS for the selected theme and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-inline-images")
                .long("no-inline-images")
                .help("Keep image URLs instead of embedding base64 data URIs")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_one::<String>("theme").map(|s| s.as_str()),
    );

    let theme = config.html.theme().unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });

    if matches.get_flag("print-css") {
        print!("{}", document::embedded_css(theme));
        return;
    }

    let input_file = matches.get_one::<String>("file").map(|s| s.as_str());
    let edit_mode = matches.get_flag("edit");
    let (mut markdown, base_path) = read_input(input_file, edit_mode);

    if edit_mode {
        match editor::edit(&markdown, &config.editor.command) {
            Ok(edited) => markdown = edited,
            Err(err) => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
    }

    let fragment = mdclip_convert::convert(&markdown);

    if matches.get_flag("fragment") {
        print!("{fragment}");
        return;
    }

    let fragment = if matches.get_flag("no-inline-images") {
        fragment
    } else {
        images::inline_images(&fragment, base_path.as_deref())
    };

    let custom_css = config.html.custom_css.as_deref().map(|path| {
        fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading custom CSS '{path}': {e}");
            std::process::exit(1);
        })
    });
    let options = match config.html.options(custom_css) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let html = assemble(&fragment, &options);

    if let Some(path) = matches.get_one::<String>("output") {
        fs::write(path, &html).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        });
        return;
    }

    if matches.get_flag("stdout") {
        print!("{html}");
        return;
    }

    let plain_text = config.clipboard.plain_text_fallback.then_some(markdown.as_str());
    match clipboard::copy_html(&html, plain_text) {
        Ok(()) => eprintln!("Copied to clipboard"),
        Err(err) => {
            eprintln!("Error copying to clipboard: {err}");
            std::process::exit(1);
        }
    }
}

/// Reads the markdown source and notes the directory relative image paths
/// resolve against (the input file's parent; none for stdin).
fn read_input(input_file: Option<&str>, edit_mode: bool) -> (String, Option<PathBuf>) {
    if let Some(file_path) = input_file {
        let path = Path::new(file_path);
        let markdown = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file '{file_path}': {e}");
            std::process::exit(1);
        });
        let base = path
            .canonicalize()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));
        return (markdown, base);
    }

    // With --edit and no piped input, start from an empty draft.
    if edit_mode && io::stdin().is_terminal() {
        return (String::new(), None);
    }

    let mut markdown = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut markdown) {
        eprintln!("Error reading stdin: {e}");
        std::process::exit(1);
    }
    (markdown, None)
}

fn load_cli_config(explicit_path: Option<&str>, theme_override: Option<&str>) -> MdclipConfig {
    let loader = Loader::new().with_optional_file("mdclip.toml");
    let loader = match explicit_path {
        Some(path) => loader.with_file(path),
        None => loader,
    };
    let loader = match theme_override {
        Some(theme) => loader
            .set_override("html.theme", theme)
            .unwrap_or_else(|err| {
                eprintln!("Failed to apply theme override: {err}");
                std::process::exit(1);
            }),
        None => loader,
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
