use std::{borrow::Borrow, hash::Hash, sync::Arc};

/// Key under which hooks are registered.
///
/// Produced by [`Registry::add_hook`](crate::Registry::add_hook) from
/// anything string-like, and compared against [`Event::name()`](crate::Event::name)
/// on trigger. Use `EventName` to:
///
/// - Key hook registrations (`"User::create"`, `"config.reloaded"`, ...)
/// - Reference event names in diagnostics and test assertions
///
/// `EventName` is cheap to clone and safe to serialize. Equality works
/// correctly across serialization boundaries (uses string comparison with a
/// fast-path for pointer equality when names share the same allocation).
/// Any string is a valid name, including the empty string; names are
/// never validated or normalized.
#[derive(Debug, Clone, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventName(Arc<str>);

impl EventName {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the string representation of this event name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EventName {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for EventName {}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for EventName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// Lets the registry probe its map with the `&str` from `Event::name()`
// without allocating. Consistent with Eq/Hash above: both delegate to the
// underlying string.
impl Borrow<str> for EventName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EventName {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn as_str_returns_original_string() {
        let name = EventName::new("User::create");
        assert_eq!(name.as_str(), "User::create");
    }

    #[test]
    fn display_matches_as_str() {
        let name = EventName::new("config.reloaded");
        assert_eq!(name.to_string(), "config.reloaded");
    }

    #[test]
    fn clones_compare_equal_via_pointer_fast_path() {
        let name = EventName::new("tick");
        let clone = name.clone();
        assert_eq!(name, clone);
    }

    #[test]
    fn separate_allocations_compare_by_content() {
        let a = EventName::new("tick");
        let b = EventName::from(String::from("tick"));
        assert_eq!(a, b);
        assert_ne!(a, EventName::new("tock"));
    }

    #[test]
    fn empty_string_is_a_valid_name() {
        let name = EventName::new("");
        assert_eq!(name.as_str(), "");
        assert_eq!(name, EventName::from(""));
    }

    #[test]
    fn map_lookup_works_with_borrowed_str() {
        let mut map = HashMap::new();
        map.insert(EventName::new("User::create"), 1);

        assert_eq!(map.get("User::create"), Some(&1));
        assert_eq!(map.get("User::delete"), None);
    }
}
