//! Path prefix normalization.
//!
//! The prefix argument may come from a Windows shell or carry doubled
//! separators from copy-pasted paths; the stored `media_parts.file` values
//! always use single forward slashes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches runs of two or more slashes (after backslash conversion).
static MULTI_SLASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"/{2,}").unwrap());

/// Normalize a user-supplied path prefix: backslashes become forward
/// slashes, runs of separators collapse to one. Pure transform, idempotent.
pub fn normalize_path(path: &str) -> String {
    let forward = path.replace('\\', "/");
    MULTI_SLASH.replace_all(&forward, "/").to_string()
}
