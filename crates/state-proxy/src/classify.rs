//! Leaf vs structural classification of input values.

use serde_json::Value;

/// How a value participates in an observable tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A plain nested record that becomes its own observable node.
    Structural,
    /// Copied verbatim into a backing store; never intercepted.
    Leaf,
}

/// Classifies a value as structural or leaf.
///
/// Only JSON objects are structural. Arrays stay atomic leaves so index
/// positions never become event paths, and scalars have nothing to
/// intercept. Classification is total: anything not recognized as a plain
/// record is a leaf.
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Object(_) => Kind::Structural,
        _ => Kind::Leaf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_are_structural() {
        assert_eq!(classify(&json!({})), Kind::Structural);
        assert_eq!(classify(&json!({"a": 1})), Kind::Structural);
    }

    #[test]
    fn everything_else_is_a_leaf() {
        assert_eq!(classify(&json!(null)), Kind::Leaf);
        assert_eq!(classify(&json!(true)), Kind::Leaf);
        assert_eq!(classify(&json!(3.5)), Kind::Leaf);
        assert_eq!(classify(&json!("s")), Kind::Leaf);
        assert_eq!(classify(&json!([1, 2, 3])), Kind::Leaf);
        assert_eq!(classify(&json!([{"a": 1}])), Kind::Leaf);
    }
}
