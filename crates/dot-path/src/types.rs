//! Type definitions for dotted paths.

/// A single segment of a dotted path (an object key).
pub type PathStep = String;

/// A parsed dotted path.
pub type Path = Vec<PathStep>;
