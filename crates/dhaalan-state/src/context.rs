#![forbid(unsafe_code)]

//! Shared observable value with synchronous change notification.
//!
//! [`ContextValue<T>`] wraps a value in shared, reference-counted storage
//! (`Rc<RefCell<..>>`). When the value changes (by `PartialEq`), all live
//! subscribers are notified synchronously, in registration order, before
//! `set` returns. This is what makes locale and theme switches complete
//! re-renders before the next user gesture is processed.
//!
//! # Invariants
//!
//! 1. `version` increments by exactly 1 on each value-changing mutation.
//! 2. `set(v)` where `v == current` is a no-op (no notify, no bump).
//! 3. Subscribers are notified in registration order.
//! 4. Dropped [`Subscription`] guards are pruned lazily on the next notify.
//!
//! # Failure Modes
//!
//! Calling `set` from within a subscriber callback panics (RefCell borrow
//! rules). Re-entrant mutation indicates a cycle in the subscriber graph.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

type Callback<T> = Rc<dyn Fn(&T)>;
type WeakCallback<T> = Weak<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    version: u64,
    subscribers: Vec<WeakCallback<T>>,
}

/// A shared, version-tracked value with change notification.
///
/// Cloning a `ContextValue` creates another handle to the same inner
/// state; both handles see the same value and share subscribers.
pub struct ContextValue<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for ContextValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ContextValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ContextValue")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> ContextValue<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Read the current value by reference, without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replace the value. Notifies subscribers only if the value changed.
    pub fn set(&self, value: T) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
            true
        };
        if changed {
            self.notify();
        }
    }

    /// Subscribe to changes. The callback fires with the new value on every
    /// value-changing `set`. Dropping the returned guard unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: Callback<T> = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().subscribers.push(weak);
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Version counter; bumps by one on each value-changing mutation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Registered subscribers, including dead ones not yet pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn notify(&self) {
        // Collect live callbacks first so the borrow is released before
        // any callback runs.
        let callbacks: Vec<Callback<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner.subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        if callbacks.is_empty() {
            return;
        }
        debug!(listeners = callbacks.len(), "context value changed");
        let value = self.inner.borrow().value.clone();
        for cb in &callbacks {
            cb(&value);
        }
    }
}

/// RAII guard for a subscriber callback.
///
/// The observable holds only a weak reference to the callback; dropping
/// the guard makes the callback unreachable, and the dead entry is pruned
/// on the next notification cycle.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn get_set_and_version() {
        let ctx = ContextValue::new(1);
        assert_eq!(ctx.get(), 1);
        assert_eq!(ctx.version(), 0);

        ctx.set(2);
        assert_eq!(ctx.get(), 2);
        assert_eq!(ctx.version(), 1);
    }

    #[test]
    fn equal_value_is_noop() {
        let ctx = ContextValue::new("same".to_string());
        let hits = Rc::new(Cell::new(0u32));
        let hits_cb = Rc::clone(&hits);
        let _sub = ctx.subscribe(move |_| hits_cb.set(hits_cb.get() + 1));

        ctx.set("same".to_string());
        assert_eq!(ctx.version(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn notification_is_synchronous_and_ordered() {
        let ctx = ContextValue::new(0);
        let log = Rc::new(RefCell::new(Vec::new()));

        let l1 = Rc::clone(&log);
        let _s1 = ctx.subscribe(move |v| l1.borrow_mut().push(('a', *v)));
        let l2 = Rc::clone(&log);
        let _s2 = ctx.subscribe(move |v| l2.borrow_mut().push(('b', *v)));

        ctx.set(7);
        // Both callbacks ran before set returned, in registration order.
        assert_eq!(*log.borrow(), vec![('a', 7), ('b', 7)]);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let ctx = ContextValue::new(0);
        let hits = Rc::new(Cell::new(0u32));
        let hits_cb = Rc::clone(&hits);
        let sub = ctx.subscribe(move |_| hits_cb.set(hits_cb.get() + 1));

        ctx.set(1);
        assert_eq!(hits.get(), 1);

        drop(sub);
        ctx.set(2);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dead_subscribers_pruned_on_notify() {
        let ctx = ContextValue::new(0);
        let sub = ctx.subscribe(|_| {});
        let _kept = ctx.subscribe(|_| {});
        assert_eq!(ctx.subscriber_count(), 2);

        drop(sub);
        assert_eq!(ctx.subscriber_count(), 2); // not yet pruned
        ctx.set(1);
        assert_eq!(ctx.subscriber_count(), 1);
    }

    #[test]
    fn clone_shares_state_and_subscribers() {
        let a = ContextValue::new(0);
        let b = a.clone();
        let hits = Rc::new(Cell::new(0u32));
        let hits_cb = Rc::clone(&hits);
        let _sub = a.subscribe(move |_| hits_cb.set(hits_cb.get() + 1));

        b.set(5);
        assert_eq!(a.get(), 5);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn with_reads_by_reference() {
        let ctx = ContextValue::new(vec![1, 2, 3]);
        let sum: i32 = ctx.with(|v| v.iter().sum());
        assert_eq!(sum, 6);
    }
}
