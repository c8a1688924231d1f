//! Event Channel - Listener registry with scoped subscriptions
//!
//! One channel per host event type. `add_listener` returns a [`Subscription`]
//! that deregisters the listener when removed or dropped, so a handler can
//! never fire after its owner is gone.
//!
//! # Example
//!
//! ```ignore
//! let channel: EventChannel<LayoutEvent> = EventChannel::new("layout");
//!
//! let subscription = channel.add_listener(|event| {
//!     println!("{}x{}", event.width, event.height);
//! });
//!
//! channel.emit(&LayoutEvent { width: 320.0, height: 80.0 });
//! subscription.remove();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// Boxed listener. Shared so dispatch can run without holding the registry borrow.
pub type Listener<E> = Rc<dyn Fn(&E)>;

struct ListenerRegistry<E> {
    listeners: Vec<(usize, Listener<E>)>,
    next_id: usize,
}

impl<E> ListenerRegistry<E> {
    fn new() -> Self {
        Self { listeners: Vec::new(), next_id: 0 }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Host event channel. Cloning yields another handle to the same registry.
pub struct EventChannel<E> {
    name: &'static str,
    registry: Rc<RefCell<ListenerRegistry<E>>>,
}

impl<E> Clone for EventChannel<E> {
    fn clone(&self) -> Self {
        Self { name: self.name, registry: self.registry.clone() }
    }
}

impl<E: 'static> EventChannel<E> {
    pub fn new(name: &'static str) -> Self {
        Self { name, registry: Rc::new(RefCell::new(ListenerRegistry::new())) }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Register a listener. It stays registered until the returned
    /// subscription is removed or dropped.
    #[must_use = "dropping the subscription removes the listener immediately"]
    pub fn add_listener<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&E) + 'static,
    {
        let listener: Listener<E> = Rc::new(listener);
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id();
            registry.listeners.push((id, listener));
            id
        };
        tracing::trace!(channel = self.name, id, "listener added");

        let registry = Rc::downgrade(&self.registry);
        let name = self.name;
        Subscription::new(move || {
            // Channel may already be gone; nothing left to release then.
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                tracing::trace!(channel = name, id, "listener removed");
            }
        })
    }

    /// Deliver `event` to every listener registered at the time of the call.
    /// Returns how many listeners ran.
    pub fn emit(&self, event: &E) -> usize {
        let snapshot: Vec<Listener<E>> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in &snapshot {
            listener(event);
        }
        snapshot.len()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn has_listeners(&self) -> bool {
        self.listener_count() > 0
    }
}

// =============================================================================
// SUBSCRIPTION
// =============================================================================

/// Handle to a registered listener. Releases it exactly once, on
/// [`Subscription::remove`] or on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Release the listener now.
    pub fn remove(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.release.is_some()).finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
