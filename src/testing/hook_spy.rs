use std::{fmt, sync::Arc};

use parking_lot::Mutex;

use crate::Event;

/// A spy hook that records every event it receives.
///
/// Register the handler returned by [`handler()`](HookSpy::handler) and
/// inspect afterwards:
/// - Whether and how often the hook ran
/// - The events it was passed, in delivery order
///
/// Cloning a spy shares its buffer, so the same spy can be registered
/// under several names or moved into several threads.
pub struct HookSpy<E> {
    received: Arc<Mutex<Vec<E>>>,
}

impl<E: Event + Clone> HookSpy<E> {
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a handler that records a clone of every event it receives.
    ///
    /// Pass it to [`Registry::add_hook`](crate::Registry::add_hook). Each
    /// call produces a fresh handler backed by the same buffer.
    pub fn handler(&self) -> impl Fn(&E) + Send + Sync + 'static {
        let received = Arc::clone(&self.received);
        move |event: &E| received.lock().push(event.clone())
    }

    /// Returns true if the hook ran at least once.
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Returns the number of times the hook ran.
    pub fn call_count(&self) -> usize {
        self.received.lock().len()
    }

    /// Returns the recorded events in delivery order.
    pub fn received(&self) -> Vec<E> {
        self.received.lock().clone()
    }

    /// Returns the first recorded event.
    pub fn first(&self) -> Option<E> {
        self.received.lock().first().cloned()
    }

    /// Returns the most recently recorded event.
    pub fn last(&self) -> Option<E> {
        self.received.lock().last().cloned()
    }
}

impl<E: Event + Clone> Default for HookSpy<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for HookSpy<E> {
    fn clone(&self) -> Self {
        Self {
            received: Arc::clone(&self.received),
        }
    }
}

impl<E> fmt::Debug for HookSpy<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookSpy")
            .field("call_count", &self.received.lock().len())
            .finish_non_exhaustive()
    }
}
