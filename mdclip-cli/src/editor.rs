//! `$EDITOR` round trip for `--edit`.
//!
//! The input is written to a temp file with an `.md` suffix (so editors pick
//! markdown mode), the editor runs to completion, and the file is read back.

use std::env;
use std::fs;
use std::io::Write;
use std::process::Command;
use tempfile::Builder;

/// Opens an editor on `initial` and returns the edited text. `fallback` is
/// the configured editor command, used when `$EDITOR` is unset.
pub fn edit(initial: &str, fallback: &str) -> Result<String, String> {
    let editor = env::var("EDITOR").unwrap_or_else(|_| fallback.to_string());

    let mut file = Builder::new()
        .prefix("mdclip-")
        .suffix(".md")
        .tempfile()
        .map_err(|e| format!("cannot create temp file: {e}"))?;
    file.write_all(initial.as_bytes())
        .map_err(|e| format!("cannot write temp file: {e}"))?;
    file.flush().map_err(|e| format!("cannot write temp file: {e}"))?;

    let status = Command::new(&editor)
        .arg(file.path())
        .status()
        .map_err(|e| format!("cannot launch editor '{editor}': {e}"))?;

    if !status.success() {
        return Err(format!("editor exited with status {status}"));
    }

    fs::read_to_string(file.path()).map_err(|e| format!("cannot read temp file back: {e}"))
}
