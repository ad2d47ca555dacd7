//! Context: a named, URI-tagged marker for a visited view.

use crate::error::HistoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical page or view visited by a user.
///
/// Contexts are immutable once built. Within a history queue they are
/// identified by `name` alone; see [`Context::same_as`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContext")]
pub struct Context {
    name: String,
    uri: String,
}

/// Stored shape of a context, validated through [`Context::new`].
#[derive(Deserialize)]
struct RawContext {
    name: String,
    uri: String,
}

impl TryFrom<RawContext> for Context {
    type Error = HistoryError;

    fn try_from(raw: RawContext) -> Result<Self, Self::Error> {
        Context::new(raw.name, raw.uri)
    }
}

impl Context {
    /// Build a context, rejecting an empty name.
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Result<Self, HistoryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(HistoryError::InvalidArgument(
                "context name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            uri: uri.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Dedupe identity: two contexts are the same entry when their names match,
    /// whatever their URIs.
    pub fn same_as(&self, other: &Context) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.uri)
    }
}
