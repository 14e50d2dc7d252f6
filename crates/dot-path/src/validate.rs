//! Dotted path validation.

use thiserror::Error;

/// Why a path or segment was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A segment between separators was empty.
    #[error("empty path segment")]
    EmptySegment,
    /// A segment contains the separator and cannot round-trip.
    #[error("path segment contains '.'")]
    SegmentWithSeparator,
}

/// Validate a dotted path string.
///
/// The empty string (the root path) is valid; otherwise every
/// `.`-separated segment must be non-empty.
pub fn validate_dot_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Ok(());
    }
    if path.split('.').any(str::is_empty) {
        return Err(ValidationError::EmptySegment);
    }
    Ok(())
}

/// Validate parsed segments before formatting them into a path string.
pub fn validate_path(path: &[String]) -> Result<(), ValidationError> {
    for segment in path {
        if segment.is_empty() {
            return Err(ValidationError::EmptySegment);
        }
        if segment.contains('.') {
            return Err(ValidationError::SegmentWithSeparator);
        }
    }
    Ok(())
}
