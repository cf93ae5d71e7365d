//! Transfer State Definitions
//!
//! ```text
//! PENDING ──▶ APPLIED
//!    │
//!    └──────▶ REJECTED
//! ```
//!
//! Nothing is persisted between states: a transfer is `Pending` only while
//! its preconditions are being checked inside a single `execute` call.

use std::fmt;

/// Transfer States
///
/// Terminal states: APPLIED, REJECTED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferState {
    /// Request received, preconditions not yet decided
    Pending,

    /// Terminal: both balances updated
    Applied,

    /// Terminal: a precondition failed, no balance touched
    Rejected,
}

impl TransferState {
    /// Check if this is a terminal state (no more transitions possible)
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransferState::Applied | TransferState::Rejected)
    }

    /// Get human-readable state name
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferState::Pending => "PENDING",
            TransferState::Applied => "APPLIED",
            TransferState::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for TransferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(TransferState::Applied.is_terminal());
        assert!(TransferState::Rejected.is_terminal());
        assert!(!TransferState::Pending.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(TransferState::Pending.to_string(), "PENDING");
        assert_eq!(TransferState::Applied.to_string(), "APPLIED");
        assert_eq!(TransferState::Rejected.to_string(), "REJECTED");
    }
}
