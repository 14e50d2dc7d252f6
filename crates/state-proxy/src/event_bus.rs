//! Named-event publish/subscribe registry.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Identifies one registration on an [`EventBus`].
pub type ListenerId = u64;

type Handler<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Registration<T> {
    id: ListenerId,
    once: bool,
    handler: Handler<T>,
}

/// A named-event registry with synchronous dispatch.
///
/// Listener lists are interior-mutable so handlers may subscribe and
/// unsubscribe while an emit is in flight: handlers registered during an
/// emit run from the next emit on, and handlers removed mid-emit that have
/// not yet run are skipped.
pub struct EventBus<T> {
    inner: RefCell<Inner<T>>,
}

struct Inner<T> {
    next_id: ListenerId,
    channels: BTreeMap<String, Vec<Registration<T>>>,
}

impl<T> EventBus<T> {
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(Inner {
                next_id: 1,
                channels: BTreeMap::new(),
            }),
        }
    }

    /// Registers a handler for `name`. Every registration is independent:
    /// registering the same handler twice fires it twice.
    pub fn on(&self, name: impl Into<String>, handler: impl FnMut(&T) + 'static) -> ListenerId {
        self.register(name.into(), false, handler)
    }

    /// As [`on`](Self::on), but deregistered before its first invocation
    /// runs, so a reentrant emit from inside the handler cannot fire it a
    /// second time.
    pub fn once(&self, name: impl Into<String>, handler: impl FnMut(&T) + 'static) -> ListenerId {
        self.register(name.into(), true, handler)
    }

    fn register(&self, name: String, once: bool, handler: impl FnMut(&T) + 'static) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id = inner.next_id.saturating_add(1);
        inner.channels.entry(name).or_default().push(Registration {
            id,
            once,
            handler: Rc::new(RefCell::new(handler)),
        });
        id
    }

    /// Removes the registration with the given id; `false` if absent.
    pub fn off(&self, name: &str, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(list) = inner.channels.get_mut(name) else {
            return false;
        };
        let Some(pos) = list.iter().position(|r| r.id == id) else {
            return false;
        };
        list.remove(pos);
        if list.is_empty() {
            inner.channels.remove(name);
        }
        true
    }

    /// Number of live registrations for `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.inner.borrow().channels.get(name).map_or(0, Vec::len)
    }

    /// Synchronously invokes every handler registered for `name` at emit
    /// start, in registration order. Unknown names are a no-op. A
    /// panicking handler propagates to the caller; later handlers for
    /// this event do not run.
    pub fn emit(&self, name: &str, payload: &T) {
        let snapshot: Vec<(ListenerId, bool, Handler<T>)> = {
            let inner = self.inner.borrow();
            match inner.channels.get(name) {
                Some(list) => list
                    .iter()
                    .map(|r| (r.id, r.once, Rc::clone(&r.handler)))
                    .collect(),
                None => return,
            }
        };
        for (id, once, handler) in snapshot {
            let live = self
                .inner
                .borrow()
                .channels
                .get(name)
                .is_some_and(|list| list.iter().any(|r| r.id == id));
            if !live {
                continue;
            }
            if once {
                self.off(name, id);
            }
            (handler.borrow_mut())(payload);
        }
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}
