//! Request descriptors
//!
//! The tracker only needs the method and URI of the request being served, so any
//! framework request type can take part by implementing [`RequestDescriptor`].

use serde::{Deserialize, Serialize};

/// The read-only retrieval method. Compared case-sensitively.
pub const READ_ONLY_METHOD: &str = "GET";

/// Narrow view of an inbound request.
pub trait RequestDescriptor {
    fn method(&self) -> &str;
    fn uri(&self) -> &str;

    /// True only for the literal `"GET"`.
    fn is_read_only(&self) -> bool {
        self.method() == READ_ONLY_METHOD
    }
}

impl<T: RequestDescriptor + ?Sized> RequestDescriptor for &T {
    fn method(&self) -> &str {
        (**self).method()
    }

    fn uri(&self) -> &str {
        (**self).uri()
    }
}

/// Owned request descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    method: String,
    uri: String,
}

impl Request {
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
        }
    }

    pub fn get(uri: impl Into<String>) -> Self {
        Self::new(READ_ONLY_METHOD, uri)
    }
}

impl RequestDescriptor for Request {
    fn method(&self) -> &str {
        &self.method
    }

    fn uri(&self) -> &str {
        &self.uri
    }
}
