//! Parse, format, and relate dotted paths.

use crate::types::Path;

/// Parse a dotted path string into segments.
///
/// The empty string is the root path and yields no segments. Segments are
/// split on `.` without further interpretation; use
/// [`validate_dot_path`](crate::validate_dot_path) to reject empty ones.
pub fn parse_dot_path(path: &str) -> Path {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').map(str::to_owned).collect()
}

/// Format segments back into a dotted path string.
pub fn format_dot_path(path: &[String]) -> String {
    path.join(".")
}

/// Full dotted path of a field: the node prefix followed by the key.
///
/// Prefixes either are empty (the root) or already end with the separator,
/// so plain concatenation is the whole operation.
pub fn append_segment(prefix: &str, key: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + key.len());
    out.push_str(prefix);
    out.push_str(key);
    out
}

/// Path prefix carried by a child node installed under `key`.
pub fn child_prefix(prefix: &str, key: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + key.len() + 1);
    out.push_str(prefix);
    out.push_str(key);
    out.push('.');
    out
}

/// Check if a path addresses the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if `parent` strictly contains `child`.
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    if parent.len() >= child.len() {
        return false;
    }
    parent.iter().zip(child).all(|(a, b)| a == b)
}

/// Parent path of a given path; `None` at the root.
pub fn parent(path: &[String]) -> Option<&[String]> {
    path.split_last().map(|(_, rest)| rest)
}
