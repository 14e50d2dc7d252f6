//! Dotted path utilities.
//!
//! Paths address fields in a nested record by joining segment names with
//! `.` (grammar `segment('.'segment)*`). The empty string is the root path.
//! Unlike JSON Pointer there are no escape sequences: segment names must
//! not contain the separator, which [`validate_path`] enforces.
//!
//! # Example
//!
//! ```
//! use dot_path::{parse_dot_path, format_dot_path, get};
//!
//! let path = parse_dot_path("child.x");
//! assert_eq!(path, vec!["child".to_string(), "x".to_string()]);
//! assert_eq!(format_dot_path(&path), "child.x");
//!
//! let doc = serde_json::json!({"child": {"x": 42}});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!(42)));
//! ```

pub mod get;
pub mod types;
pub mod util;
pub mod validate;

pub use get::get;
pub use types::{Path, PathStep};
pub use util::{
    append_segment, child_prefix, format_dot_path, is_child, is_root, parent, parse_dot_path,
};
pub use validate::{validate_dot_path, validate_path, ValidationError};
