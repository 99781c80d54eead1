/// Trait for events delivered through the hook registry.
///
/// Implement this for your event type (often an enum, one variant per
/// event name). Events must be `Send + Sync + 'static` because they:
/// - Are passed by reference to handlers that are stored in the registry
///   and shared across threads (Send, Sync)
/// - Appear in the type of those boxed handlers (`'static`)
///
/// [`name()`](Event::name) selects which hook sequence runs when the event
/// is [triggered](crate::Registry::trigger). The registry treats the rest
/// of the payload opaquely and never keeps an event beyond the duration of
/// a single trigger call.
///
/// # Example
///
/// ```rust
/// use hooks::Event;
///
/// #[derive(Clone, Debug)]
/// enum UserEvent {
///     Created { user_id: String },
///     Renamed { user_id: String, name: String },
/// }
///
/// impl Event for UserEvent {
///     fn name(&self) -> &str {
///         match self {
///             UserEvent::Created { .. } => "User::create",
///             UserEvent::Renamed { .. } => "User::rename",
///         }
///     }
/// }
/// ```
pub trait Event: Send + Sync + 'static {
    /// Returns the name used to look up registered hooks for this event.
    fn name(&self) -> &str;
}
