//! Clipboard placement for the converted document.
//!
//! The HTML flavor is what rich text editors read on paste; the optional
//! plain-text alternative carries the raw markdown for targets that cannot
//! accept HTML.

use arboard::Clipboard;
use std::error::Error;

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
use arboard::SetExtLinux;

/// Places HTML (and optionally a plain-text alternative) on the clipboard.
pub fn copy_html(html: &str, plain_text: Option<&str>) -> Result<(), Box<dyn Error>> {
    let mut clipboard = Clipboard::new()?;
    let alt = plain_text.map(|t| t.to_string());

    // On Linux the clipboard is owned by the process; wait() forks so the
    // content survives our exit.
    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    {
        clipboard.set().wait().html(html.to_string(), alt)?;
    }

    #[cfg(any(
        target_os = "macos",
        target_os = "windows",
        target_os = "android",
        target_os = "emscripten"
    ))]
    {
        clipboard.set_html(html, alt)?;
    }

    Ok(())
}
