//! Shared controller owning one tree's event bus.

use std::rc::Rc;

use serde_json::Value;

use crate::event_bus::{EventBus, ListenerId};
use crate::events::{ChangeEvent, EventPayload};

/// Name of the generic event fired on every mutation anywhere in a tree.
pub const CHANGE_EVENT: &str = "change";

/// Field name reserved on every node for reaching the controller.
pub const RESERVED_KEY: &str = "$";

/// Owns exactly one event bus, shared by reference across every node of
/// one observable tree. Obtained from any node handle via
/// [`controller()`](crate::NodeRef::controller) or by reading the
/// reserved key.
///
/// Listener de-registration is the caller's responsibility: a handler
/// that captures a node handle keeps the whole tree alive until it is
/// removed with [`off`](Self::off).
pub struct Controller {
    bus: EventBus<EventPayload>,
}

impl Controller {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            bus: EventBus::new(),
        })
    }

    /// Registers a listener for `name`: either [`CHANGE_EVENT`] or an
    /// exact dotted path. Duplicate registrations each fire.
    pub fn on(
        &self,
        name: impl Into<String>,
        handler: impl FnMut(&EventPayload) + 'static,
    ) -> ListenerId {
        self.bus.on(name, handler)
    }

    /// As [`on`](Self::on), auto-removed after its first invocation.
    pub fn once(
        &self,
        name: impl Into<String>,
        handler: impl FnMut(&EventPayload) + 'static,
    ) -> ListenerId {
        self.bus.once(name, handler)
    }

    /// Removes one registration; `false` if absent.
    pub fn off(&self, name: &str, id: ListenerId) -> bool {
        self.bus.off(name, id)
    }

    /// Emits `payload` to every listener registered for `name`,
    /// synchronously and in registration order.
    pub fn emit(&self, name: &str, payload: &EventPayload) {
        self.bus.emit(name, payload);
    }

    /// Registers for the generic change event with a typed payload.
    pub fn on_change(&self, mut handler: impl FnMut(&ChangeEvent) + 'static) -> ListenerId {
        self.bus.on(CHANGE_EVENT, move |payload| {
            if let EventPayload::Change(event) = payload {
                handler(event);
            }
        })
    }

    /// As [`on_change`](Self::on_change), auto-removed after one event.
    pub fn once_change(&self, mut handler: impl FnMut(&ChangeEvent) + 'static) -> ListenerId {
        self.bus.once(CHANGE_EVENT, move |payload| {
            if let EventPayload::Change(event) = payload {
                handler(event);
            }
        })
    }

    /// Removes a [`on_change`](Self::on_change) registration.
    pub fn off_change(&self, id: ListenerId) -> bool {
        self.bus.off(CHANGE_EVENT, id)
    }

    /// Registers for mutations at one exact dotted path; the handler
    /// receives the newly written value.
    pub fn on_path(
        &self,
        path: impl Into<String>,
        mut handler: impl FnMut(&Value) + 'static,
    ) -> ListenerId {
        self.bus.on(path, move |payload| {
            if let EventPayload::Value(value) = payload {
                handler(value);
            }
        })
    }

    /// As [`on_path`](Self::on_path), auto-removed after one event.
    pub fn once_path(
        &self,
        path: impl Into<String>,
        mut handler: impl FnMut(&Value) + 'static,
    ) -> ListenerId {
        self.bus.once(path, move |payload| {
            if let EventPayload::Value(value) = payload {
                handler(value);
            }
        })
    }

    /// Number of live registrations for `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.bus.listener_count(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use serde_json::json;

    #[test]
    fn typed_helpers_filter_by_payload_variant() {
        let controller = Controller::new();
        let values = Rc::new(RefCell::new(Vec::new()));
        let changes = Rc::new(RefCell::new(Vec::new()));

        let v = Rc::clone(&values);
        controller.on_path("a.b", move |value| v.borrow_mut().push(value.clone()));
        let c = Rc::clone(&changes);
        controller.on_change(move |event| c.borrow_mut().push(event.clone()));

        controller.emit("a.b", &EventPayload::Value(json!(1)));
        let event = ChangeEvent {
            prop: "b".into(),
            path: "a.b".into(),
            value: json!(1),
        };
        controller.emit(CHANGE_EVENT, &EventPayload::Change(event.clone()));

        assert_eq!(*values.borrow(), vec![json!(1)]);
        assert_eq!(*changes.borrow(), vec![event]);
    }

    #[test]
    fn once_change_fires_for_a_single_event() {
        let controller = Controller::new();
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        controller.once_change(move |_| *c.borrow_mut() += 1);
        let payload = EventPayload::Change(ChangeEvent {
            prop: "p".into(),
            path: "p".into(),
            value: json!(1),
        });
        controller.emit(CHANGE_EVENT, &payload);
        controller.emit(CHANGE_EVENT, &payload);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn off_change_removes_the_registration() {
        let controller = Controller::new();
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        let id = controller.on_change(move |_| *c.borrow_mut() += 1);
        assert!(controller.off_change(id));
        controller.emit(
            CHANGE_EVENT,
            &EventPayload::Change(ChangeEvent {
                prop: "p".into(),
                path: "p".into(),
                value: json!(0),
            }),
        );
        assert_eq!(*count.borrow(), 0);
    }
}
