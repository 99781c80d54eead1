use std::{fmt, sync::Arc};

use parking_lot::Mutex;

use crate::Event;

/// A shared, ordered log of labels recorded by hooks.
///
/// Use it to assert on invocation order across several hooks, where a
/// [`HookSpy`](crate::testing::HookSpy) would only show what one hook saw:
///
/// ```rust
/// use hooks::{Event, Registry};
/// use hooks::testing::CallLog;
///
/// #[derive(Clone, Debug)]
/// struct Tick;
///
/// impl Event for Tick {
///     fn name(&self) -> &str { "tick" }
/// }
///
/// let registry = Registry::new();
/// let log = CallLog::new();
///
/// let l = log.clone();
/// registry.add_hook("tick", move |_: &Tick| l.record("audit"));
/// let l = log.clone();
/// registry.add_hook("tick", move |_: &Tick| l.record("notify"));
///
/// registry.trigger(&Tick);
///
/// assert!(log.exact(&["audit", "notify"]));
/// ```
///
/// Cloning a log shares its entries.
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends `label` to the log.
    pub fn record(&self, label: impl Into<String>) {
        self.entries.lock().push(label.into());
    }

    /// Returns a handler that records `label` each time its event fires.
    pub fn handler<E: Event>(&self, label: &str) -> impl Fn(&E) + Send + Sync + 'static {
        let entries = Arc::clone(&self.entries);
        let label = label.to_owned();
        move |_: &E| entries.lock().push(label.clone())
    }

    /// Returns the recorded labels in order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Returns the number of recorded labels.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the log matches `expected` exactly — every label,
    /// in order, with nothing extra.
    pub fn exact(&self, expected: &[&str]) -> bool {
        let entries = self.entries.lock();
        entries.len() == expected.len() && entries.iter().zip(expected).all(|(a, b)| a == b)
    }
}

impl Default for CallLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CallLog {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl fmt::Debug for CallLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallLog")
            .field("entries", &*self.entries.lock())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let log = CallLog::new();

        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.exact(&[]));
    }

    #[test]
    fn records_labels_in_order() {
        let log = CallLog::new();
        log.record("a");
        log.record("b");

        assert_eq!(log.entries(), vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn exact_requires_full_ordered_match() {
        let log = CallLog::new();
        log.record("a");
        log.record("b");

        assert!(log.exact(&["a", "b"]));
        assert!(!log.exact(&["b", "a"]));
        assert!(!log.exact(&["a"]));
        assert!(!log.exact(&["a", "b", "c"]));
    }

    #[test]
    fn clones_share_entries() {
        let log = CallLog::new();
        let clone = log.clone();

        clone.record("shared");

        assert!(log.exact(&["shared"]));
    }

    #[test]
    fn handler_records_its_label_per_invocation() {
        #[derive(Clone, Debug)]
        struct Tick;

        impl Event for Tick {
            fn name(&self) -> &str {
                "tick"
            }
        }

        let log = CallLog::new();
        let handler = log.handler::<Tick>("tick seen");

        handler(&Tick);
        handler(&Tick);

        assert!(log.exact(&["tick seen", "tick seen"]));
    }
}
