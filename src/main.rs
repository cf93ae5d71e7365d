//! Account Transfer - batch runner
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │ Accounts │───▶│  Batch   │───▶│ Transfer │───▶│ Journal  │
//! │  (CSV)   │    │  Runner  │    │  Engine  │    │ Balances │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//!      ▲               ▲
//!      │          ┌──────────┐
//!      │          │Transfers │
//!      └──────────│  (CSV)   │
//!                 └──────────┘
//! ```
//!
//! Usage: `account_transfer [--env dev] [--input fixtures] [--output output]`

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use account_transfer::TransferEngine;
use account_transfer::batch::run_batch;
use account_transfer::config::AppConfig;
use account_transfer::csv_io::{
    ACCOUNTS_CSV, BALANCES_FINAL_CSV, JOURNAL_CSV, TRANSFERS_CSV, dump_balances, load_accounts,
    load_transfers,
};
use account_transfer::ledger::JournalWriter;
use account_transfer::logging::init_logging;

// ============================================================
// ARGUMENTS
// ============================================================

fn get_arg(names: &[&str]) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if names.contains(&args[i].as_str()) && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn get_env() -> String {
    get_arg(&["--env", "-e"]).unwrap_or_else(|| "dev".to_string())
}

fn path_in(dir: &str, file: &str) -> String {
    Path::new(dir).join(file).to_string_lossy().into_owned()
}

// ============================================================
// MAIN
// ============================================================

fn main() -> Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(input) = get_arg(&["--input"]) {
        app_config.transfer.input_dir = input;
    }
    if let Some(output) = get_arg(&["--output"]) {
        app_config.transfer.output_dir = output;
    }
    let _log_guard = init_logging(&app_config)?;

    let cfg = &app_config.transfer;
    tracing::info!(
        env = %env,
        git = env!("GIT_HASH"),
        input = %cfg.input_dir,
        output = %cfg.output_dir,
        "Starting account transfer batch"
    );

    let start = Instant::now();
    let mut book = load_accounts(&path_in(&cfg.input_dir, ACCOUNTS_CSV), cfg.max_scale)?;
    let rows = load_transfers(&path_in(&cfg.input_dir, TRANSFERS_CSV))?;
    tracing::info!(
        accounts = book.len(),
        transfers = rows.len(),
        "Fixtures loaded"
    );

    let engine = TransferEngine::new();
    let report = run_batch(&engine, &mut book, &rows, cfg.max_scale, cfg.display_scale);

    fs::create_dir_all(&cfg.output_dir)
        .with_context(|| format!("Failed to create output dir {}", cfg.output_dir))?;

    let mut journal = JournalWriter::create(&path_in(&cfg.output_dir, JOURNAL_CSV))?;
    for entry in &report.journal {
        journal.write_entry(entry)?;
    }
    let written = journal.entry_count();
    journal.finish()?;

    dump_balances(
        &book,
        &path_in(&cfg.output_dir, BALANCES_FINAL_CSV),
        cfg.display_scale,
    )?;

    println!(
        "Processed {} transfers in {:?}: {} applied, {} rejected, journal rows {}",
        rows.len(),
        start.elapsed(),
        report.applied,
        report.rejected,
        written
    );

    Ok(())
}
