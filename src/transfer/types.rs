//! Transfer request, record and result types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::core_types::{AccountId, TransferId};

/// A transfer as asked for by a caller. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Decimal,
}

impl TransferRequest {
    pub fn new(from: impl Into<AccountId>, to: impl Into<AccountId>, amount: Decimal) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

/// Immutable record of one applied transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub transfer_id: TransferId,
    pub from_id: AccountId,
    pub to_id: AccountId,
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// Outcome of a successful `execute`
///
/// `from` and `to` are snapshots taken right after both balances were
/// updated; the caller's accounts hold the same values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferResult {
    pub from: Account,
    pub to: Account,
    pub record: TransferRecord,
}
