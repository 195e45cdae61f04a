//! Source/output name conversion.
//!
//! Output pages sit next to their source documents and share the base
//! name; only the suffix changes.

use std::path::{Path, PathBuf};

/// Replace `source_suffix` at the end of `name` with `output_suffix`.
///
/// Returns `None` if `name` does not end with `source_suffix`.
///
/// # Examples
/// ```ignore
/// output_name("intro.markdown", ".markdown", ".html") => Some("intro.html")
/// output_name("a.markdown.markdown", ".markdown", ".html") => Some("a.markdown.html")
/// output_name("notes.txt", ".markdown", ".html") => None
/// ```
pub fn output_name(name: &str, source_suffix: &str, output_suffix: &str) -> Option<String> {
    name.strip_suffix(source_suffix)
        .map(|stem| format!("{stem}{output_suffix}"))
}

/// Resolve a possibly relative path against `base`.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

/// Whether `a` and `b` name the same file.
///
/// Paths are compared component-wise first; when both exist they are also
/// compared after canonicalizing, which sees through `..` and symlinks.
pub fn same_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
