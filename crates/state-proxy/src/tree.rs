//! Arena-backed tree construction.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::classify::{classify, Kind};
use crate::controller::Controller;
use crate::handle::NodeRef;

/// Construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The input value cannot anchor a tree: only plain objects can.
    #[error("root value is not a plain object")]
    RootNotStructural,
}

/// A field slot in a node's backing store.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Slot {
    /// A value copied verbatim.
    Leaf(Value),
    /// Arena index of a wrapped child node.
    Child(u32),
}

/// Backing record for one structural node. Exclusively owned by its tree;
/// callers only ever see [`NodeRef`] handles.
pub(crate) struct StateNode {
    /// Dotted path prefix: empty at the root, `"child."` one level down.
    pub(crate) prefix: String,
    pub(crate) fields: IndexMap<String, Slot>,
}

/// One observable tree: the node arena plus its single controller.
///
/// Node records live in a `Vec` arena and refer to each other by `u32`
/// index, so parent/child links never form `Rc` cycles. A subtree
/// orphaned by overwriting its parent slot stays allocated until the
/// whole tree is dropped.
pub struct StateTree {
    pub(crate) nodes: RefCell<Vec<StateNode>>,
    pub(crate) controller: Rc<Controller>,
}

struct WorkItem<'a> {
    src: &'a Map<String, Value>,
    node: u32,
    parent: Option<(u32, String)>,
}

impl StateTree {
    /// Builds the observable tree mirroring `source` and returns the root
    /// handle. The controller is reachable from any node handle.
    ///
    /// Traversal is an explicit last-in-first-out work list, so input
    /// nesting depth is not limited by the call stack. Leaves are copied
    /// in source order; each structural child gets a fresh pre-allocated
    /// arena record and is linked into its parent only when its own item
    /// is popped, with its record fully in place. Builder writes go
    /// straight to the backing stores: no events fire during
    /// construction.
    pub fn build(source: &Value) -> Result<NodeRef, TreeError> {
        let Value::Object(root_map) = source else {
            return Err(TreeError::RootNotStructural);
        };

        let controller = Controller::new();
        let mut nodes = vec![StateNode {
            prefix: String::new(),
            fields: IndexMap::new(),
        }];
        let mut stack = vec![WorkItem {
            src: root_map,
            node: 0,
            parent: None,
        }];

        while let Some(item) = stack.pop() {
            for (key, value) in item.src {
                match (classify(value), value) {
                    (Kind::Structural, Value::Object(child_map)) => {
                        let prefix =
                            dot_path::child_prefix(&nodes[item.node as usize].prefix, key);
                        let child = nodes.len() as u32;
                        nodes.push(StateNode {
                            prefix,
                            fields: IndexMap::new(),
                        });
                        stack.push(WorkItem {
                            src: child_map,
                            node: child,
                            parent: Some((item.node, key.clone())),
                        });
                    }
                    _ => {
                        nodes[item.node as usize]
                            .fields
                            .insert(key.clone(), Slot::Leaf(value.clone()));
                    }
                }
            }
            if let Some((parent, key)) = item.parent {
                nodes[parent as usize].fields.insert(key, Slot::Child(item.node));
            }
        }

        let tree = Rc::new(StateTree {
            nodes: RefCell::new(nodes),
            controller,
        });
        Ok(NodeRef::new(tree, 0))
    }
}
