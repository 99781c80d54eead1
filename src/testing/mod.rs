//! Test utilities for observing and asserting on hook invocations.
//!
//! Enable with the `test-harness` feature:
//!
//! ```toml
//! [dev-dependencies]
//! hooks = { version = "0.1", features = ["test-harness"] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use hooks::{Event, Registry};
//! use hooks::testing::HookSpy;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct UserCreated { user_id: String }
//!
//! impl Event for UserCreated {
//!     fn name(&self) -> &str { "User::create" }
//! }
//!
//! let registry = Registry::new();
//! let spy = HookSpy::new();
//! registry.add_hook("User::create", spy.handler());
//!
//! registry.trigger(&UserCreated { user_id: "jan".into() });
//!
//! assert_eq!(spy.call_count(), 1);
//! assert_eq!(spy.first().unwrap().user_id, "jan");
//! ```
//!
//! Use [`CallLog`] when the assertion is about ordering across several
//! hooks rather than the payloads one hook received.
//!
//! # Warning
//!
//! **Do not use in production.** Spies buffer every recorded event for the
//! lifetime of the spy; they are designed for test scopes only.

mod call_log;
mod hook_spy;

pub use call_log::CallLog;
pub use hook_spy::HookSpy;
