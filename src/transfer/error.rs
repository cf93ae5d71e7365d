//! Transfer Error Types
//!
//! Every variant is a precondition violation detected before any balance is
//! touched. None of them is retried by the engine.

use thiserror::Error;

use crate::balance::BalanceError;
use crate::money::MoneyError;

/// Transfer error types
///
/// Error codes are stable and meant for API responses and journals.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferError {
    #[error("Amount must be a finite number greater than zero")]
    InvalidAmount,

    #[error("Source and target account cannot be the same")]
    SameAccount,

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Amount would cause overflow")]
    Overflow,
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            TransferError::SameAccount => "SAME_ACCOUNT",
            TransferError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            TransferError::Overflow => "OVERFLOW",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::InvalidAmount
            | TransferError::SameAccount
            | TransferError::Overflow => 400,
            TransferError::InsufficientFunds => 422,
        }
    }

    /// Get process exit code suggestion for command-line callers
    pub fn exit_code(&self) -> i32 {
        match self {
            TransferError::InvalidAmount => 2,
            TransferError::SameAccount => 3,
            TransferError::InsufficientFunds => 4,
            TransferError::Overflow => 5,
        }
    }
}

impl From<BalanceError> for TransferError {
    fn from(e: BalanceError) -> Self {
        match e {
            BalanceError::InsufficientFunds => TransferError::InsufficientFunds,
            BalanceError::Overflow => TransferError::Overflow,
        }
    }
}

/// Unparseable or non-finite client amounts are invalid amounts.
impl From<MoneyError> for TransferError {
    fn from(_: MoneyError) -> Self {
        TransferError::InvalidAmount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TransferError::InvalidAmount.code(), "INVALID_AMOUNT");
        assert_eq!(TransferError::SameAccount.code(), "SAME_ACCOUNT");
        assert_eq!(
            TransferError::InsufficientFunds.code(),
            "INSUFFICIENT_FUNDS"
        );
        assert_eq!(TransferError::Overflow.code(), "OVERFLOW");
    }

    #[test]
    fn test_http_status() {
        assert_eq!(TransferError::InvalidAmount.http_status(), 400);
        assert_eq!(TransferError::SameAccount.http_status(), 400);
        assert_eq!(TransferError::InsufficientFunds.http_status(), 422);
    }

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let codes = [
            TransferError::InvalidAmount.exit_code(),
            TransferError::SameAccount.exit_code(),
            TransferError::InsufficientFunds.exit_code(),
            TransferError::Overflow.exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_conversions() {
        assert_eq!(
            TransferError::from(BalanceError::InsufficientFunds),
            TransferError::InsufficientFunds
        );
        assert_eq!(
            TransferError::from(MoneyError::NotFinite),
            TransferError::InvalidAmount
        );
    }

    #[test]
    fn test_display() {
        let err = TransferError::InsufficientFunds;
        assert_eq!(err.to_string(), "Insufficient funds");
    }
}
