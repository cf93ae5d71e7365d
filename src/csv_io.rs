//! CSV I/O - Load account and transfer fixtures, dump final balances
//!
//! Parsing is line based: files are small, comma separated, with one header
//! line and no quoting.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;

use crate::account::Account;
use crate::core_types::AccountId;
use crate::money::{format_amount_exact, parse_amount};

// ============================================================
// File names (relative to input/output dirs)
// ============================================================

pub const ACCOUNTS_CSV: &str = "accounts.csv";
pub const TRANSFERS_CSV: &str = "transfers.csv";
pub const JOURNAL_CSV: &str = "transfers_journal.csv";
pub const BALANCES_FINAL_CSV: &str = "balances_final.csv";

/// Accounts of one batch run, keyed (and dumped) in id order
pub type AccountBook = BTreeMap<AccountId, Account>;

/// One row of the transfers file, amount kept raw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRow {
    /// 1-based line number in the source file
    pub line: usize,
    pub from_id: AccountId,
    pub to_id: AccountId,
    pub amount: String,
}

// ============================================================
// Loading
// ============================================================

/// Parse `account_id,balance` rows
///
/// A trailing `version` column (as written by [`write_balances`]) is
/// accepted and ignored, so a dumped balances file loads back as input.
///
/// # Errors
/// Malformed rows, duplicate ids and negative opening balances abort the
/// load: account state is never guessed.
pub fn read_accounts<R: BufRead>(reader: R, max_scale: u32) -> Result<AccountBook> {
    let mut book = AccountBook::new();

    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_num = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if !(2..=3).contains(&parts.len()) || parts[0].is_empty() {
            bail!("Malformed account row at line {}: {:?}", line_num, line);
        }

        let balance: Decimal = parse_amount(parts[1], max_scale)
            .with_context(|| format!("Invalid balance at line {}", line_num))?;
        if balance.is_sign_negative() && !balance.is_zero() {
            bail!("Negative opening balance at line {}", line_num);
        }

        let id = AccountId::new(parts[0]);
        if book.contains_key(&id) {
            bail!("Duplicate account {} at line {}", id, line_num);
        }
        book.insert(id.clone(), Account::new(id, balance));
    }

    Ok(book)
}

pub fn load_accounts(path: &str, max_scale: u32) -> Result<AccountBook> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
    read_accounts(BufReader::new(file), max_scale).with_context(|| format!("Failed to load {}", path))
}

/// Parse `from_id,to_id,amount` rows
///
/// Amounts are not validated here; a bad amount is a per-transfer rejection,
/// not a load failure.
pub fn read_transfers<R: BufRead>(reader: R) -> Result<Vec<TransferRow>> {
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_num = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            bail!("Malformed transfer row at line {}: {:?}", line_num, line);
        }

        rows.push(TransferRow {
            line: line_num,
            from_id: AccountId::new(parts[0]),
            to_id: AccountId::new(parts[1]),
            amount: parts[2].to_string(),
        });
    }

    Ok(rows)
}

pub fn load_transfers(path: &str) -> Result<Vec<TransferRow>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
    read_transfers(BufReader::new(file)).with_context(|| format!("Failed to load {}", path))
}

// ============================================================
// Output
// ============================================================

/// Balances are written at full precision (padded to `display_scale`), so
/// the file reloads into exactly the in-memory state.
pub fn write_balances<W: Write>(
    book: &AccountBook,
    out: &mut W,
    display_scale: u32,
) -> Result<()> {
    writeln!(out, "account_id,balance,version")?;
    for account in book.values() {
        writeln!(
            out,
            "{},{},{}",
            account.id(),
            format_amount_exact(account.balance(), display_scale),
            account.version()
        )?;
    }
    Ok(())
}

pub fn dump_balances(book: &AccountBook, path: &str, display_scale: u32) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path))?;
    let mut out = BufWriter::new(file);
    write_balances(book, &mut out, display_scale)?;
    out.flush()?;
    Ok(())
}
