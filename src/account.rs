use rust_decimal::Decimal;
use serde::Serialize;

use crate::balance::{Balance, BalanceError};
use crate::core_types::AccountId;

/// Account represents a single-currency balance holder.
///
/// # Lifecycle:
/// Constructed by the caller with its current balance (loaded from wherever
/// the caller keeps account state), mutated in place by
/// [`TransferEngine::execute`](crate::transfer::TransferEngine::execute),
/// and saved back by the caller.
///
/// # Invariants (enforced by private fields):
/// 1. `id` is immutable after creation
/// 2. `balance` can only be read through `balance()`
/// 3. All mutations go through crate-private `debit`/`credit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    id: AccountId,    // PRIVATE - use id()
    balance: Balance, // PRIVATE - use balance()
}

impl Account {
    pub fn new(id: impl Into<AccountId>, balance: Decimal) -> Self {
        Self {
            id: id.into(),
            balance: Balance::new(balance),
        }
    }

    #[inline(always)]
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Current balance amount
    #[inline(always)]
    pub fn balance(&self) -> Decimal {
        self.balance.amount()
    }

    /// Number of successful mutations since construction
    #[inline(always)]
    pub fn version(&self) -> u64 {
        self.balance.version()
    }

    #[inline(always)]
    pub(crate) fn balance_ref(&self) -> &Balance {
        &self.balance
    }

    pub(crate) fn debit(&mut self, amount: Decimal) -> Result<(), BalanceError> {
        self.balance.debit(amount)
    }

    pub(crate) fn credit(&mut self, amount: Decimal) -> Result<(), BalanceError> {
        self.balance.credit(amount)
    }
}
