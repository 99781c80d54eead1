#![cfg_attr(docsrs, feature(doc_cfg))]
//! # Hooks
//!
//! A minimal thread-safe event hook registry: register named hooks, then
//! trigger a named event and every hook registered under that name runs
//! synchronously, in registration order.
//!
//! There is no routing, no async delivery, and no unregistration — the
//! registry is a single locked map from event name to an append-only hook
//! sequence. That makes its guarantees easy to state: hooks run in the
//! order they were registered, triggers never overlap, and every hook
//! registered before a trigger is visible to it.
//!
//! ## Quick Start
//!
//! ```rust
//! use hooks::{Event, Registry};
//!
//! // Define your events
//! #[derive(Clone, Debug)]
//! enum UserEvent {
//!     Created { user_id: String },
//! }
//!
//! impl Event for UserEvent {
//!     fn name(&self) -> &str {
//!         match self {
//!             UserEvent::Created { .. } => "User::create",
//!         }
//!     }
//! }
//!
//! let registry = Registry::new();
//!
//! registry.add_hook("User::create", |event: &UserEvent| {
//!     let UserEvent::Created { user_id } = event;
//!     println!("sending welcome mail to {user_id}");
//! });
//!
//! registry.trigger(&UserEvent::Created { user_id: "jan".into() });
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Event`] | Trait giving an event its name (usually on an enum) |
//! | [`Registry`] | Locked map from event name to ordered hooks |
//! | [`EventName`] | Cheap-to-clone key hooks are registered under |
//! | [`HookHandler`] | Stored form of a registered hook |
//!
//! ## Concurrency
//!
//! Any number of threads may register and trigger on a shared registry.
//! One internal lock serializes everything, and it stays held while hooks
//! run — so a hook must not call back into its own registry, and a slow
//! hook delays every other registry user. Hooks that need parallel fan-out
//! should hand the work off and return.
//!
//! ## Failure
//!
//! Registration never fails and triggering an unknown name is a no-op. A
//! panicking hook unwinds through [`Registry::trigger`] to the caller and
//! stops the remaining hooks in its sequence; the registry itself stays
//! usable.
//!
//! ## Features
//!
//! - **`serde`** - `Serialize`/`Deserialize` for [`EventName`]
//! - **`test-harness`** - [`testing`] spies for recording and asserting on
//!   hook invocations

mod event;
mod event_name;
mod handler;
mod registry;

#[cfg(any(test, feature = "test-harness"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-harness")))]
pub mod testing;

pub use event::Event;
pub use event_name::EventName;
pub use handler::HookHandler;
pub use registry::Registry;
