//! Core types used throughout the crate
//!
//! Identifiers are kept opaque: the engine only compares them,
//! it never interprets their contents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account ID - opaque, unique, immutable after assignment.
///
/// # Ordering:
/// `Ord` is derived so callers that share accounts between threads can
/// acquire per-account locks in a fixed order (`min` first, then `max`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Transfer ID - ULID, one per applied transfer.
///
/// Never reused: repeating an identical request yields a new ID.
pub type TransferId = ulid::Ulid;
