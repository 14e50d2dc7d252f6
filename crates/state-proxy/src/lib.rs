//! Deep-reactive state container.
//!
//! Builds a live, observable tree from a nested plain value: reads and
//! writes go through node handles, and every accepted mutation is
//! deduplicated and broadcast over the tree's shared [`Controller`],
//! once under the field's full dotted path and once under the generic
//! [`CHANGE_EVENT`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use state_proxy::StateTree;
//!
//! let root = StateTree::build(&json!({"child": {"x": 0}})).unwrap();
//!
//! let controller = root.controller();
//! controller.on_path("child.x", |value| {
//!     println!("child.x is now {value}");
//! });
//!
//! let child = root.get("child").unwrap().as_node().cloned().unwrap();
//! assert!(child.set("x", json!(1)));
//! assert_eq!(root.view(), json!({"child": {"x": 1}}));
//! ```

pub mod classify;
pub mod controller;
pub mod event_bus;
pub mod events;
pub mod handle;
pub mod tree;

pub use classify::{classify, Kind};
pub use controller::{Controller, CHANGE_EVENT, RESERVED_KEY};
pub use event_bus::{EventBus, ListenerId};
pub use events::{ChangeEvent, EventPayload};
pub use handle::{FieldValue, NodeRef};
pub use tree::{StateTree, TreeError};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
