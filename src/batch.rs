//! Batch Runner - drives the transfer engine over a list of requests
//!
//! This is a caller of the engine, not part of it: it owns the account book
//! for one run, resolves ids to accounts, logs every outcome and produces
//! the journal. Requests are applied strictly in input order.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core_types::AccountId;
use crate::csv_io::{AccountBook, TransferRow};
use crate::ledger::JournalEntry;
use crate::logging::TRANSFER_TRACE_TARGET;
use crate::money::parse_amount;
use crate::transfer::{TransferEngine, TransferError, TransferRequest, TransferResult};

/// Why a batch row was not applied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}

impl BatchError {
    pub fn code(&self) -> &'static str {
        match self {
            BatchError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            BatchError::Transfer(e) => e.code(),
        }
    }
}

/// Resolve both ids in `book` and run the engine on them.
///
/// A request naming the same id twice still reaches the engine (with a
/// throwaway copy as target) so that it is rejected with the engine's own
/// precondition order.
pub fn apply_request(
    engine: &TransferEngine,
    book: &mut AccountBook,
    req: &TransferRequest,
) -> Result<TransferResult, BatchError> {
    let mut from = book
        .remove(&req.from)
        .ok_or_else(|| BatchError::AccountNotFound(req.from.clone()))?;

    let outcome = match book.get_mut(&req.to) {
        Some(to) => engine.execute(&mut from, to, req.amount).map_err(BatchError::from),
        None if req.to == req.from => {
            let mut alias = from.clone();
            engine
                .execute(&mut from, &mut alias, req.amount)
                .map_err(BatchError::from)
        }
        None => Err(BatchError::AccountNotFound(req.to.clone())),
    };

    book.insert(from.id().clone(), from);
    outcome
}

/// Totals of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub journal: Vec<JournalEntry>,
    pub applied: usize,
    pub rejected: usize,
    /// Sum of all applied amounts
    pub volume: Decimal,
}

/// Process `rows` in order against `book`.
///
/// Rejections never stop the batch; each row yields one journal entry.
pub fn run_batch(
    engine: &TransferEngine,
    book: &mut AccountBook,
    rows: &[TransferRow],
    max_scale: u32,
    display_scale: u32,
) -> BatchReport {
    let mut report = BatchReport::default();

    for row in rows {
        let outcome = parse_amount(&row.amount, max_scale)
            .map_err(|e| {
                debug!(line = row.line, amount = %row.amount, error = %e, "Unparseable amount");
                BatchError::from(TransferError::from(e))
            })
            .and_then(|amount| {
                let req = TransferRequest::new(row.from_id.clone(), row.to_id.clone(), amount);
                apply_request(engine, book, &req)
            });

        let entry = match outcome {
            Ok(result) => {
                report.applied += 1;
                report.volume += result.record.amount;
                info!(
                    target: TRANSFER_TRACE_TARGET,
                    transfer_id = %result.record.transfer_id,
                    from_balance = %result.from.balance(),
                    to_balance = %result.to.balance(),
                    "Balances after transfer"
                );
                debug!(
                    line = row.line,
                    transfer_id = %result.record.transfer_id,
                    "Transfer applied: {} -> {} ({})",
                    result.record.from_id,
                    result.record.to_id,
                    result.record.amount
                );
                JournalEntry::applied(&result.record, display_scale)
            }
            Err(e) => {
                report.rejected += 1;
                warn!(
                    line = row.line,
                    from = %row.from_id,
                    to = %row.to_id,
                    amount = %row.amount,
                    code = e.code(),
                    "Transfer rejected: {}",
                    e
                );
                JournalEntry::rejected(row.from_id.clone(), row.to_id.clone(), &row.amount, e.code())
            }
        };
        report.journal.push(entry);
    }

    info!(
        applied = report.applied,
        rejected = report.rejected,
        volume = %report.volume,
        "Batch finished"
    );
    report
}
