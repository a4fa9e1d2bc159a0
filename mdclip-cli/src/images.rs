//! Image inlining: rewrites `<img src>` URLs into base64 data URIs so pasted
//! content carries the actual pixels instead of references the target
//! application may not be allowed to fetch.
//!
//! A source that cannot be fetched (missing file, network failure, path
//! escaping the document directory) is left as-is; inlining is best effort.

use base64::{engine::general_purpose::STANDARD, Engine};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

const MAX_REMOTE_BYTES: u64 = 10 * 1024 * 1024;
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

static IMG_SRC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img([^>]*?)\ssrc="([^"]+)"([^>]*)>"#).unwrap());

/// Rewrites every `<img>` source in `html` into a data URI. Relative paths
/// resolve against `base_path` (the input file's directory); repeated sources
/// are fetched once.
pub fn inline_images(html: &str, base_path: Option<&Path>) -> String {
    let mut result = html.to_string();
    let mut cache: HashMap<String, String> = HashMap::new();

    let tags: Vec<(usize, usize, String, String, String)> = IMG_SRC_RE
        .captures_iter(html)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            (
                whole.start(),
                whole.end(),
                caps[1].to_string(),
                caps[2].to_string(),
                caps[3].to_string(),
            )
        })
        .collect();

    // Rewrite back to front so earlier offsets stay valid.
    for (start, end, before, src, after) in tags.into_iter().rev() {
        if src.starts_with("data:") {
            continue;
        }

        let data_uri = match cache.get(&src) {
            Some(cached) => cached.clone(),
            None => {
                let uri = encode_source(&src, base_path).unwrap_or_else(|| src.clone());
                cache.insert(src.clone(), uri.clone());
                uri
            }
        };

        result.replace_range(start..end, &format!(r#"<img{before} src="{data_uri}"{after}>"#));
    }

    result
}

fn encode_source(src: &str, base_path: Option<&Path>) -> Option<String> {
    if src.starts_with("http://") || src.starts_with("https://") {
        encode_remote(src)
    } else {
        encode_local(src, base_path)
    }
}

fn encode_remote(url: &str) -> Option<String> {
    let response = ureq::get(url).timeout(FETCH_TIMEOUT).call().ok()?;
    let content_type = response
        .header("Content-Type")
        .unwrap_or("image/png")
        .to_string();

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_REMOTE_BYTES)
        .read_to_end(&mut bytes)
        .ok()?;

    Some(format!(
        "data:{content_type};base64,{}",
        STANDARD.encode(&bytes)
    ))
}

fn encode_local(src: &str, base_path: Option<&Path>) -> Option<String> {
    let path = resolve_local(src, base_path)?;
    let bytes = fs::read(&path).ok()?;
    Some(format!(
        "data:{};base64,{}",
        mime_for(&path),
        STANDARD.encode(&bytes)
    ))
}

/// Absolute sources are taken verbatim; relative ones resolve against the
/// document directory and must stay inside it after canonicalization.
fn resolve_local(src: &str, base_path: Option<&Path>) -> Option<std::path::PathBuf> {
    let src_path = Path::new(src);
    if src_path.is_absolute() {
        return Some(src_path.to_path_buf());
    }
    match base_path {
        Some(base) => {
            let joined = base.join(src_path);
            let canonical_base = base.canonicalize().ok()?;
            let canonical = joined.canonicalize().ok()?;
            canonical.starts_with(&canonical_base).then_some(joined)
        }
        None => Some(src_path.to_path_buf()),
    }
}

fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("bmp") => "image/bmp",
        _ => "image/png",
    }
}
