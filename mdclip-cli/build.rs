use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI surface in src/main.rs; build scripts can't access src/
// modules, so the flag list is duplicated here.
fn completion_cli() -> Command {
    Command::new("mdclip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert GitHub Flavored Markdown to rich HTML clipboard content")
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
                .help("Open $EDITOR before converting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the HTML document to a file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the HTML document instead of copying")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("fragment")
                .long("fragment")
                .help("Print only the converted fragment")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .help("CSS theme: github-light or github-dark")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to an mdclip.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("print-css")
                .long("print-css")
                .help("Print the embedded CSS and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-inline-images")
                .long("no-inline-images")
                .help("Keep image URLs instead of embedding data URIs")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = completion_cli();

    generate_to(Bash, &mut cmd, "mdclip", &outdir)?;
    generate_to(Zsh, &mut cmd, "mdclip", &outdir)?;
    generate_to(Fish, &mut cmd, "mdclip", &outdir)?;

    Ok(())
}
