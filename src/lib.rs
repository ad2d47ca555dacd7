//! Trail: session-backed browsing history
//!
//! Keeps a bounded, deduplicated, newest-first list of the contexts (named,
//! URI-addressed views) a user visited, stored in that user's session.

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod request;
pub mod session;

pub use error::{HistoryError, StorageError};
pub use history::{Browser, Context, HistoryQueue, HISTORY_SESSION_VARIABLE};
pub use request::{Request, RequestDescriptor};
pub use session::{MemorySessionStore, SessionStore};
