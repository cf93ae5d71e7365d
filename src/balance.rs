/// ENFORCED BALANCE TYPE - Used by Account
///
/// This is the SINGLE source of truth for balance arithmetic.
/// ALL balance mutations MUST go through these methods.
///
/// # Enforcement Strategy:
/// 1. Fields are PRIVATE - no direct access
/// 2. All mutations return Result - errors are explicit
/// 3. Version auto-increments - audit trail
/// 4. checked_add/sub - overflow protection
/// 5. Mutators are crate-private - only the engine moves funds
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Balance arithmetic errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceError {
    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Balance arithmetic overflow")]
    Overflow,
}

/// Balance of a single account
///
/// # Invariants (ENFORCED by private fields):
/// - `amount` only changes through debit/credit
/// - A debit never takes `amount` below zero
/// - `version` increments once per successful mutation
/// - A failed operation leaves both fields untouched
///
/// # Usage:
/// ```ignore
/// let mut balance = Balance::new(dec!(100));
/// balance.debit(dec!(30))?;  // amount = 70, version = 1
/// balance.credit(dec!(5))?;  // amount = 75, version = 2
/// ```
///
/// Serialize only: a `Balance` can only be created through `new`/`default`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct Balance {
    amount: Decimal, // PRIVATE - ONLY modified through debit/credit
    version: u64,    // PRIVATE - Incremented on every debit/credit
}

impl Balance {
    /// Opening balance as loaded by the caller. Version starts at 0.
    pub const fn new(amount: Decimal) -> Self {
        Self { amount, version: 0 }
    }

    // ============================================================
    // READ-ONLY GETTERS
    // ============================================================

    #[inline(always)]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    #[inline(always)]
    pub const fn version(&self) -> u64 {
        self.version
    }

    // ============================================================
    // DRY-RUN ARITHMETIC (no mutation)
    // ============================================================

    /// Balance after debiting `amount`, without applying it.
    pub fn checked_debit(&self, amount: Decimal) -> Result<Decimal, BalanceError> {
        if self.amount < amount {
            return Err(BalanceError::InsufficientFunds);
        }
        self.amount
            .checked_sub(amount)
            .ok_or(BalanceError::Overflow)
    }

    /// Balance after crediting `amount`, without applying it.
    pub fn checked_credit(&self, amount: Decimal) -> Result<Decimal, BalanceError> {
        self.amount
            .checked_add(amount)
            .ok_or(BalanceError::Overflow)
    }

    // ============================================================
    // VALIDATED MUTATIONS (crate-private)
    // ============================================================

    /// Remove funds
    ///
    /// # Errors
    /// - `InsufficientFunds` if balance < amount
    /// - `Overflow` on arithmetic error
    pub(crate) fn debit(&mut self, amount: Decimal) -> Result<(), BalanceError> {
        self.amount = self.checked_debit(amount)?;
        self.version = self.version.wrapping_add(1);
        Ok(())
    }

    /// Add funds
    ///
    /// # Errors
    /// - `Overflow` on arithmetic error
    pub(crate) fn credit(&mut self, amount: Decimal) -> Result<(), BalanceError> {
        self.amount = self.checked_credit(amount)?;
        self.version = self.version.wrapping_add(1);
        Ok(())
    }
}

// ============================================================
// TESTS - Prove enforcement works
// ============================================================
