use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque todo identifier as seen by API clients.
///
/// Each store backend decides what a well-formed id looks like (an object id
/// for the document store, a row number for PostgreSQL) and parses it on the
/// way in. Everything above the store only ever passes it through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for TodoId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
