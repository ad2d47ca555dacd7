//! History queue: bounded, deduplicating, newest-first list of contexts.

use crate::history::context::Context;
use serde::{Deserialize, Serialize};

/// What a push did to the queue besides inserting the new entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushOutcome {
    /// Previous entry with the same name, removed before the insert.
    pub replaced: Option<Context>,
    /// Entries dropped from the tail to honor the size limit, oldest first.
    pub evicted: Vec<Context>,
}

/// Most-recently-used list of contexts, newest at index 0.
///
/// Serialized as a plain JSON array so the session value stays readable. A stored
/// array holding the same name twice is rejected on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Context>", into = "Vec<Context>")]
pub struct HistoryQueue {
    entries: Vec<Context>,
}

impl HistoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Contexts, newest first.
    pub fn contexts(&self) -> &[Context] {
        &self.entries
    }

    pub fn newest(&self) -> Option<&Context> {
        self.entries.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Context> {
        self.entries.iter()
    }

    /// Keep only the `max_size` newest entries. Returns the dropped entries.
    pub fn truncate(&mut self, max_size: usize) -> Vec<Context> {
        if self.entries.len() <= max_size {
            return Vec::new();
        }
        self.entries.split_off(max_size)
    }

    /// Insert `context` at the front.
    ///
    /// An entry with the same name is removed first, then entries are evicted
    /// from the tail one at a time until the length is at most `max_size`.
    pub fn push(&mut self, context: Context, max_size: usize) -> PushOutcome {
        let replaced = self
            .entries
            .iter()
            .position(|existing| existing.same_as(&context))
            .map(|index| self.entries.remove(index));

        self.entries.insert(0, context);

        let mut evicted = Vec::new();
        while self.entries.len() > max_size {
            match self.entries.pop() {
                Some(oldest) => evicted.push(oldest),
                None => break,
            }
        }

        PushOutcome { replaced, evicted }
    }

    /// True when no two entries share a name.
    pub fn has_unique_names(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.entries.iter().all(|c| seen.insert(c.name()))
    }
}

impl<'a> IntoIterator for &'a HistoryQueue {
    type Item = &'a Context;
    type IntoIter = std::slice::Iter<'a, Context>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl TryFrom<Vec<Context>> for HistoryQueue {
    type Error = String;

    fn try_from(entries: Vec<Context>) -> Result<Self, Self::Error> {
        let queue = Self { entries };
        if !queue.has_unique_names() {
            return Err("history holds the same context name more than once".to_string());
        }
        Ok(queue)
    }
}

impl From<HistoryQueue> for Vec<Context> {
    fn from(queue: HistoryQueue) -> Self {
        queue.entries
    }
}
