//! Browsing history
//!
//! Records the logical contexts (named, URI-addressed views) a user visits, as a
//! bounded newest-first list kept in the user's session.

pub mod browser;
pub mod context;
pub mod queue;

pub use browser::{Browser, HISTORY_SESSION_VARIABLE};
pub use context::Context;
pub use queue::{HistoryQueue, PushOutcome};
