use std::{collections::HashMap, fmt};

use parking_lot::Mutex;

use crate::{Event, EventName, HookHandler};

/// Thread-safe registry of named event hooks.
///
/// Hooks are registered under an [`EventName`] with [`add_hook`](Registry::add_hook)
/// and run by [`trigger`](Registry::trigger) in registration order. The
/// registry holds no events and exposes no removal: the hook sequence for a
/// given name only grows.
///
/// Construct one explicitly and share it (by reference or `Arc`) with the
/// code that registers and triggers; there is no process-wide instance.
///
/// All access is serialized through a single internal lock, held for the
/// full duration of both operations — including handler execution during a
/// trigger. Two triggers never overlap, even for different event names, and
/// every hook registered before a trigger call is visible to it.
///
/// # Example
///
/// ```rust
/// use hooks::{Event, Registry};
///
/// #[derive(Clone, Debug)]
/// struct Tick(u64);
///
/// impl Event for Tick {
///     fn name(&self) -> &str {
///         "tick"
///     }
/// }
///
/// let registry = Registry::new();
/// registry.add_hook("tick", |event: &Tick| {
///     println!("tick {}", event.0);
/// });
///
/// registry.trigger(&Tick(1));
/// ```
pub struct Registry<E: Event> {
    hooks: Mutex<HashMap<EventName, Vec<HookHandler<E>>>>,
}

impl<E: Event> Registry<E> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            hooks: Mutex::new(HashMap::new()),
        }
    }

    /// Registers `handler` for `name`, appending it to the hooks already
    /// registered under that name.
    ///
    /// Never fails. Names are not validated (the empty string is allowed)
    /// and handlers are not deduplicated: registering the same handler
    /// twice runs it twice per trigger.
    pub fn add_hook<F>(&self, name: impl Into<EventName>, handler: F)
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let name = name.into();
        let mut hooks = self.hooks.lock();
        let handlers = hooks.entry(name.clone()).or_default();
        handlers.push(Box::new(handler));
        tracing::trace!(event = %name, hooks = handlers.len(), "hook registered");
    }

    /// Triggers `event`, running every hook registered under
    /// [`event.name()`](Event::name) in registration order.
    ///
    /// A name with no registered hooks is a silent no-op; triggering never
    /// mutates the registry.
    ///
    /// Hooks run synchronously and sequentially while the registry lock is
    /// held. The lock is not reentrant: a hook that calls back into
    /// `add_hook` or `trigger` on the same registry deadlocks, and a hook
    /// that blocks stalls every other registry user for the duration.
    ///
    /// # Panics
    ///
    /// A panicking hook unwinds through `trigger` unmodified; hooks later
    /// in the same sequence do not run. The lock is released on unwind and
    /// the registry remains usable afterwards.
    pub fn trigger(&self, event: &E) {
        let hooks = self.hooks.lock();
        let Some(handlers) = hooks.get(event.name()) else {
            tracing::trace!(event = event.name(), "no hooks registered");
            return;
        };

        tracing::trace!(event = event.name(), hooks = handlers.len(), "triggering hooks");
        for handler in handlers {
            handler(event);
        }
    }

    /// Returns the number of hooks registered under `name`.
    pub fn hook_count(&self, name: &str) -> usize {
        self.hooks.lock().get(name).map_or(0, Vec::len)
    }

    /// Returns true if at least one hook is registered under `name`.
    pub fn has_hooks(&self, name: &str) -> bool {
        self.hook_count(name) > 0
    }
}

impl<E: Event> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hooks = self.hooks.lock();
        f.debug_struct("Registry")
            .field("events", &hooks.len())
            .field("hooks", &hooks.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}
