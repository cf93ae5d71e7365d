//! Transfer Engine
//!
//! Validates and applies a balance transfer between two accounts.
//!
//! # Safety Invariants
//!
//! 1. **Validate-Before-Mutate**: every precondition, including arithmetic
//!    overflow, is decided before either balance is written
//! 2. **All-or-Nothing**: both balances change, or neither does
//! 3. **Exclusive Access**: both accounts are borrowed `&mut` for the whole
//!    call, so no reader can observe a half-applied transfer
//! 4. **No Side Channels**: no logging, no I/O, no clock reads other than the
//!    record timestamp
//!
//! The engine is stateless; callers sharing accounts across threads must
//! serialize access themselves (e.g. lock `min(id)` then `max(id)`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::error::TransferError;
use super::types::{TransferRecord, TransferResult};
use crate::account::Account;
use crate::core_types::TransferId;
use crate::money;

/// Source of record timestamps
pub type Clock = fn() -> DateTime<Utc>;

/// Stateless transfer engine
#[derive(Debug, Clone, Copy)]
pub struct TransferEngine {
    clock: Clock,
}

impl Default for TransferEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferEngine {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Engine stamping records with a custom clock
    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }

    /// Check all preconditions without mutating anything.
    ///
    /// Returns the post-transfer balances `(from, to)`.
    ///
    /// # Errors (checked in this order)
    /// - `InvalidAmount` if `amount <= 0`
    /// - `SameAccount` if both accounts share an id
    /// - `InsufficientFunds` if `from.balance < amount`
    /// - `Overflow` if crediting `to` overflows
    pub fn validate(
        &self,
        from: &Account,
        to: &Account,
        amount: Decimal,
    ) -> Result<(Decimal, Decimal), TransferError> {
        if amount <= Decimal::ZERO {
            return Err(TransferError::InvalidAmount);
        }

        if from.id() == to.id() {
            return Err(TransferError::SameAccount);
        }

        let from_after = from.balance_ref().checked_debit(amount)?;
        let to_after = to.balance_ref().checked_credit(amount)?;

        Ok((from_after, to_after))
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// Not idempotent: calling twice with the same arguments moves the
    /// amount twice, each with its own `transfer_id`.
    pub fn execute(
        &self,
        from: &mut Account,
        to: &mut Account,
        amount: Decimal,
    ) -> Result<TransferResult, TransferError> {
        self.validate(from, to, amount)?;

        // Cannot fail: the same arithmetic was just checked
        from.debit(amount)?;
        to.credit(amount)?;

        let record = TransferRecord {
            transfer_id: TransferId::new(),
            from_id: from.id().clone(),
            to_id: to.id().clone(),
            amount,
            timestamp: (self.clock)(),
        };

        Ok(TransferResult {
            from: from.clone(),
            to: to.clone(),
            record,
        })
    }

    /// `execute` for callers holding a binary float amount.
    ///
    /// NaN and infinities are rejected with `InvalidAmount`.
    pub fn execute_f64(
        &self,
        from: &mut Account,
        to: &mut Account,
        amount: f64,
    ) -> Result<TransferResult, TransferError> {
        let amount = money::amount_from_f64(amount)?;
        self.execute(from, to, amount)
    }
}
