/// Callback invoked when its registered event name is triggered.
///
/// Handlers receive the triggering event by reference, return nothing, and
/// cannot fail through the API; a handler that panics unwinds through
/// [`Registry::trigger`](crate::Registry::trigger). They must be
/// `Send + Sync` because the registry that stores them is shared across
/// threads.
///
/// [`Registry::add_hook`](crate::Registry::add_hook) boxes any matching
/// closure for you; this alias is the stored form.
pub type HookHandler<E> = Box<dyn Fn(&E) + Send + Sync + 'static>;
