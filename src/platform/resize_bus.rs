use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use tracing::trace;

use crate::core::Viewport;

type Listener = Rc<RefCell<dyn FnMut(Viewport)>>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: IndexMap<u64, Listener>,
}

/// Resize event source owned by the surface-hosting layer.
///
/// Listeners are registered through [`ResizeBus::subscribe`] and stay live
/// only as long as the returned [`ResizeSubscription`]. Clones share the
/// same listener table. Single-threaded by construction.
#[derive(Clone, Default)]
pub struct ResizeBus {
    inner: Rc<RefCell<BusInner>>,
}

impl ResizeBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn subscribe(&self, listener: impl FnMut(Viewport) + 'static) -> ResizeSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner
            .listeners
            .insert(id, Rc::new(RefCell::new(listener)) as Listener);
        trace!(subscription = id, "resize listener added");
        ResizeSubscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Dispatches `viewport` to every live listener in subscription order.
    ///
    /// Returns the number of listeners invoked. A listener cancelled by an
    /// earlier one during the same dispatch is skipped.
    pub fn emit(&self, viewport: Viewport) -> usize {
        let snapshot: Vec<(u64, Listener)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        let mut delivered = 0;
        for (id, listener) in snapshot {
            if !self.inner.borrow().listeners.contains_key(&id) {
                continue;
            }
            // A listener re-entering `emit` would find itself borrowed; skip it.
            let Ok(mut callback) = listener.try_borrow_mut() else {
                continue;
            };
            (&mut *callback)(viewport);
            delivered += 1;
        }
        delivered
    }

    /// Whether `other` shares this bus's listener table.
    #[must_use]
    pub fn same_bus(&self, other: &ResizeBus) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for ResizeBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Live registration of one resize listener. Dropping it removes the listener.
#[derive(Debug)]
#[must_use = "dropping a subscription removes its listener immediately"]
pub struct ResizeSubscription {
    id: u64,
    bus: Weak<RefCell<BusInner>>,
}

impl ResizeSubscription {
    #[must_use]
    pub fn is_active(&self) -> bool {
        let Some(bus) = self.bus.upgrade() else {
            return false;
        };
        let active = bus.borrow().listeners.contains_key(&self.id);
        active
    }

    /// Removes the listener now. Equivalent to dropping the subscription.
    pub fn cancel(self) {}
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let Some(bus) = self.bus.upgrade() else {
            return;
        };
        if let Ok(mut inner) = bus.try_borrow_mut() {
            inner.listeners.shift_remove(&self.id);
            trace!(subscription = self.id, "resize listener removed");
        }
    }
}
