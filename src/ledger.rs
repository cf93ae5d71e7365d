//! Transfer Journal - audit log of processed requests
//!
//! One CSV row per transfer request, applied or rejected.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::core_types::{AccountId, TransferId};
use crate::money::format_amount_exact;
use crate::transfer::{TransferRecord, TransferState};

pub const JOURNAL_HEADER: &str = "transfer_id,from_id,to_id,amount,timestamp,status,error_code";

/// Journal entry for one transfer request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    /// Present only for applied transfers
    pub transfer_id: Option<TransferId>,
    pub from_id: AccountId,
    pub to_id: AccountId,
    /// Raw input for rejected rows whose amount did not parse
    pub amount: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub state: TransferState,
    pub error_code: Option<&'static str>,
}

impl JournalEntry {
    /// Amount written at full precision, padded to `display_scale` digits
    pub fn applied(record: &TransferRecord, display_scale: u32) -> Self {
        Self {
            transfer_id: Some(record.transfer_id),
            from_id: record.from_id.clone(),
            to_id: record.to_id.clone(),
            amount: format_amount_exact(record.amount, display_scale),
            timestamp: Some(record.timestamp),
            state: TransferState::Applied,
            error_code: None,
        }
    }

    pub fn rejected(
        from_id: AccountId,
        to_id: AccountId,
        amount: impl Into<String>,
        error_code: &'static str,
    ) -> Self {
        Self {
            transfer_id: None,
            from_id,
            to_id,
            amount: amount.into(),
            timestamp: None,
            state: TransferState::Rejected,
            error_code: Some(error_code),
        }
    }
}

/// Writes journal entries as CSV
pub struct JournalWriter<W: Write> {
    out: W,
    entry_count: u64,
}

impl JournalWriter<BufWriter<File>> {
    /// Create a journal file at the given path
    pub fn create(path: &str) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("Failed to create journal {}", path))?;
        JournalWriter::new(BufWriter::new(file))
    }
}

impl<W: Write> JournalWriter<W> {
    pub fn new(mut out: W) -> Result<Self> {
        writeln!(out, "{}", JOURNAL_HEADER)?;
        Ok(Self {
            out,
            entry_count: 0,
        })
    }

    pub fn write_entry(&mut self, entry: &JournalEntry) -> Result<()> {
        writeln!(
            self.out,
            "{},{},{},{},{},{},{}",
            entry
                .transfer_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            entry.from_id,
            entry.to_id,
            entry.amount,
            entry
                .timestamp
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
                .unwrap_or_default(),
            entry.state,
            entry.error_code.unwrap_or_default()
        )?;
        self.entry_count += 1;
        Ok(())
    }

    /// Get total number of entries written
    pub fn entry_count(&self) -> u64 {
        self.entry_count
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
