//! Event payload types delivered through the controller.

use serde_json::Value;

/// Describes one completed mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    /// Property name within its node.
    pub prop: String,
    /// Full dotted path from the tree root.
    pub path: String,
    /// The value written.
    pub value: Value,
}

/// Payload delivered to bus listeners.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    /// Exact-path event: the value just written at that path.
    Value(Value),
    /// Generic change event: the full mutation record.
    Change(ChangeEvent),
}
