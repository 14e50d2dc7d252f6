//! Caller-facing node handles and the per-node interception contract.

use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::controller::{Controller, CHANGE_EVENT, RESERVED_KEY};
use crate::events::{ChangeEvent, EventPayload};
use crate::tree::{Slot, StateTree};

/// What reading one field produces.
#[derive(Clone)]
pub enum FieldValue {
    /// A leaf value, cloned out of the backing store.
    Leaf(Value),
    /// A handle to a nested observable node.
    Node(NodeRef),
    /// The shared controller, answered for the reserved key.
    Controller(Rc<Controller>),
}

impl FieldValue {
    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            FieldValue::Leaf(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&NodeRef> {
        match self {
            FieldValue::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_controller(&self) -> Option<&Rc<Controller>> {
        match self {
            FieldValue::Controller(controller) => Some(controller),
            _ => None,
        }
    }
}

/// Handle to one structural node of an observable tree.
///
/// Cheap to clone; two handles compare equal when they address the same
/// node of the same tree, so re-reading an unchanged nested field yields
/// an equal handle every time.
#[derive(Clone)]
pub struct NodeRef {
    tree: Rc<StateTree>,
    index: u32,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree) && self.index == other.index
    }
}

impl Eq for NodeRef {}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("prefix", &self.path_prefix())
            .field("index", &self.index)
            .finish()
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Leaf(value) => f.debug_tuple("Leaf").field(value).finish(),
            FieldValue::Node(node) => f.debug_tuple("Node").field(node).finish(),
            FieldValue::Controller(_) => f.write_str("Controller"),
        }
    }
}

impl NodeRef {
    pub(crate) fn new(tree: Rc<StateTree>, index: u32) -> Self {
        Self { tree, index }
    }

    /// Reads one field. The reserved key always answers with the
    /// controller, shadowing any stored field of that name; absent fields
    /// answer `None`.
    pub fn get(&self, key: &str) -> Option<FieldValue> {
        if key == RESERVED_KEY {
            return Some(FieldValue::Controller(self.controller()));
        }
        let nodes = self.tree.nodes.borrow();
        match nodes[self.index as usize].fields.get(key)? {
            Slot::Leaf(value) => Some(FieldValue::Leaf(value.clone())),
            Slot::Child(child) => Some(FieldValue::Node(NodeRef::new(
                Rc::clone(&self.tree),
                *child,
            ))),
        }
    }

    /// Writes one field and reports whether the write was accepted.
    ///
    /// The reserved key is immutable: that write is refused and nothing
    /// is emitted. Writing a value equal to the stored leaf is an
    /// accepted no-op with no events. Any other write lands in the
    /// backing store before the exact-path event and then the generic
    /// change event fire, so a listener re-reading through any handle
    /// observes the new state. Values assigned here are stored as leaves
    /// even when object-shaped; they are not wrapped into new nodes.
    pub fn set(&self, key: &str, value: Value) -> bool {
        if key == RESERVED_KEY {
            return false;
        }
        let path = {
            let mut nodes = self.tree.nodes.borrow_mut();
            let node = &mut nodes[self.index as usize];
            if matches!(node.fields.get(key), Some(Slot::Leaf(prev)) if *prev == value) {
                return true;
            }
            let path = dot_path::append_segment(&node.prefix, key);
            node.fields.insert(key.to_owned(), Slot::Leaf(value.clone()));
            path
        };
        // store borrow released: handlers may re-read freely
        let controller = self.controller();
        controller.emit(&path, &EventPayload::Value(value.clone()));
        controller.emit(
            CHANGE_EVENT,
            &EventPayload::Change(ChangeEvent {
                prop: key.to_owned(),
                path,
                value,
            }),
        );
        true
    }

    /// The shared controller; the reserved accessor as a method.
    pub fn controller(&self) -> Rc<Controller> {
        Rc::clone(&self.tree.controller)
    }

    /// Dotted path prefix of this node: empty at the root, `"child."`
    /// one level down.
    pub fn path_prefix(&self) -> String {
        self.tree.nodes.borrow()[self.index as usize].prefix.clone()
    }

    /// Whether a field of that name is stored on this node. The reserved
    /// key is not a stored field.
    pub fn has(&self, key: &str) -> bool {
        self.tree.nodes.borrow()[self.index as usize]
            .fields
            .contains_key(key)
    }

    /// Names of the stored fields, in backing-store order.
    pub fn keys(&self) -> Vec<String> {
        self.tree.nodes.borrow()[self.index as usize]
            .fields
            .keys()
            .cloned()
            .collect()
    }

    /// Walks a dotted path from this node. The empty path answers the
    /// node itself; intermediate segments must name child nodes.
    pub fn find(&self, path: &str) -> Option<FieldValue> {
        let segments = dot_path::parse_dot_path(path);
        let Some((last, walk)) = segments.split_last() else {
            return Some(FieldValue::Node(self.clone()));
        };
        let mut current = self.clone();
        for segment in walk {
            current = match current.get(segment)? {
                FieldValue::Node(node) => node,
                _ => return None,
            };
        }
        current.get(last)
    }

    /// Reconstructs the plain nested value this subtree currently
    /// mirrors. Stored fields are emitted verbatim (a stored
    /// reserved-key data field included, since only `get` shadows it)
    /// and child nodes appear as nested objects.
    pub fn view(&self) -> Value {
        let nodes = self.tree.nodes.borrow();
        // Child indices are strictly greater than their parent's, so one
        // reverse pass materializes children before the nodes that embed
        // them, without recursing.
        let mut built: Vec<Option<Value>> = (0..nodes.len()).map(|_| None).collect();
        for index in (0..nodes.len()).rev() {
            let mut map = Map::new();
            for (key, slot) in &nodes[index].fields {
                let value = match slot {
                    Slot::Leaf(leaf) => leaf.clone(),
                    Slot::Child(child) => built[*child as usize].take().unwrap_or(Value::Null),
                };
                map.insert(key.clone(), value);
            }
            built[index] = Some(Value::Object(map));
        }
        built[self.index as usize].take().unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::StateTree;
    use serde_json::json;

    #[test]
    fn reserved_key_reads_controller_and_refuses_writes() {
        let root = StateTree::build(&json!({"a": 1})).unwrap();
        assert!(root.get(RESERVED_KEY).unwrap().as_controller().is_some());
        assert!(!root.set(RESERVED_KEY, json!(5)));
        assert!(root.get(RESERVED_KEY).unwrap().as_controller().is_some());
    }

    #[test]
    fn equal_leaf_write_is_an_accepted_noop() {
        let root = StateTree::build(&json!({"a": 1})).unwrap();
        assert!(root.set("a", json!(1)));
        assert_eq!(root.get("a").unwrap().as_leaf(), Some(&json!(1)));
    }

    #[test]
    fn writing_over_a_child_node_demotes_it_to_a_leaf() {
        let root = StateTree::build(&json!({"child": {"x": 1}})).unwrap();
        assert!(root.get("child").unwrap().as_node().is_some());
        assert!(root.set("child", json!(9)));
        assert_eq!(root.get("child").unwrap().as_leaf(), Some(&json!(9)));
    }

    #[test]
    fn find_walks_nested_nodes() {
        let root = StateTree::build(&json!({"a": {"b": {"c": 3}}})).unwrap();
        assert_eq!(
            root.find("a.b.c").unwrap().as_leaf(),
            Some(&json!(3))
        );
        assert!(root.find("a.b").unwrap().as_node().is_some());
        assert_eq!(root.find("").unwrap().as_node(), Some(&root));
        assert!(root.find("a.c").is_none());
        // leaves are atomic: paths cannot continue through them
        assert!(root.find("a.b.c.d").is_none());
    }

    #[test]
    fn view_round_trips_nested_input() {
        let source = json!({
            "name": "n",
            "child": {"x": 0, "tags": [1, 2]},
            "flags": null
        });
        let root = StateTree::build(&source).unwrap();
        assert_eq!(root.view(), source);
        let child = root.get("child").unwrap().as_node().cloned().unwrap();
        assert_eq!(child.view(), json!({"x": 0, "tags": [1, 2]}));
    }
}
