//! Browser: per-request history tracker.
//!
//! A `Browser` is built for one request. Construction loads the session's history
//! queue (creating it when absent) and shrinks it to the caller's `max_size`.
//! Every push is written back to the session immediately.

use crate::error::HistoryError;
use crate::history::context::Context;
use crate::history::queue::HistoryQueue;
use crate::request::RequestDescriptor;
use crate::session::{read_value, write_value, SessionStore};
use tracing::debug;

/// Session key holding the history queue.
pub const HISTORY_SESSION_VARIABLE: &str = "HISTORY_SESSION_VARIABLE";

/// Tracks which contexts the current user visited.
pub struct Browser<'s, R, S: SessionStore + ?Sized> {
    request: R,
    session: &'s S,
    max_size: usize,
    history: HistoryQueue,
}

impl<'s, R, S> Browser<'s, R, S>
where
    R: RequestDescriptor,
    S: SessionStore + ?Sized,
{
    /// Load the session's history for this request.
    ///
    /// Initializes the session variable to an empty queue when missing. A stored
    /// queue longer than `max_size` is truncated to its newest entries and written
    /// back before this returns.
    pub fn new(request: R, session: &'s S, max_size: usize) -> Result<Self, HistoryError> {
        if max_size == 0 {
            return Err(HistoryError::InvalidArgument(
                "history max size must be at least 1".to_string(),
            ));
        }

        let history = load_history(session, max_size)?;
        Ok(Self {
            request,
            session,
            max_size,
            history,
        })
    }

    /// Record the current request as the context `name`.
    ///
    /// Only GET requests may be recorded. Nothing is written when validation fails.
    pub fn keep_current_context(&mut self, name: &str) -> Result<(), HistoryError> {
        if !self.request.is_read_only() {
            return Err(HistoryError::InvalidOperation(format!(
                "contexts can only be kept for GET requests (got {})",
                self.request.method()
            )));
        }
        let context = Context::new(name, self.request.uri())?;

        let mut history = self.history.clone();
        let outcome = history.push(context, self.max_size);
        write_value(self.session, HISTORY_SESSION_VARIABLE, &history)?;

        if let Some(previous) = &outcome.replaced {
            debug!(name, previous_uri = previous.uri(), "Context moved to front");
        }
        for evicted in &outcome.evicted {
            debug!(name = evicted.name(), "Context evicted from history");
        }
        self.history = history;
        Ok(())
    }

    /// History as held by this tracker, newest first.
    pub fn get_context_history(&self) -> &[Context] {
        self.history.contexts()
    }

    /// Newest context, if any.
    pub fn get_last_context(&self) -> Option<&Context> {
        self.history.newest()
    }

    /// Re-read the session, picking up writes made by other trackers.
    pub fn reload(&mut self) -> Result<(), HistoryError> {
        self.history = load_history(self.session, self.max_size)?;
        Ok(())
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn request(&self) -> &R {
        &self.request
    }
}

fn load_history<S>(session: &S, max_size: usize) -> Result<HistoryQueue, HistoryError>
where
    S: SessionStore + ?Sized,
{
    if !session.has(HISTORY_SESSION_VARIABLE)? {
        let empty = HistoryQueue::new();
        write_value(session, HISTORY_SESSION_VARIABLE, &empty)?;
        debug!("History session variable initialized");
        return Ok(empty);
    }

    let mut history: HistoryQueue =
        read_value(session, HISTORY_SESSION_VARIABLE)?.unwrap_or_default();
    let dropped = history.truncate(max_size);
    if !dropped.is_empty() {
        write_value(session, HISTORY_SESSION_VARIABLE, &history)?;
        debug!(
            max_size,
            dropped = dropped.len(),
            "Stored history truncated to current size limit"
        );
    }
    Ok(history)
}
