//! Account Transfer - validated balance transfers between two accounts
//!
//! # Modules
//!
//! - [`core_types`] - Identifier types (AccountId, TransferId)
//! - [`balance`] - Enforced balance type
//! - [`account`] - Account entity
//! - [`money`] - Amount parsing and formatting
//! - [`transfer`] - Transfer engine, errors, states and records
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup
//! - [`csv_io`] - CSV loading/saving for batch runs
//! - [`ledger`] - Transfer journal
//! - [`batch`] - Batch runner driving the engine

// Core types - must be first!
pub mod core_types;

// Transfer core
pub mod account;
pub mod balance;
pub mod money;
pub mod transfer;

// Batch runner
pub mod batch;
pub mod config;
pub mod csv_io;
pub mod ledger;
pub mod logging;

// Convenient re-exports at crate root
pub use account::Account;
pub use balance::{Balance, BalanceError};
pub use core_types::{AccountId, TransferId};
pub use transfer::{
    TransferEngine, TransferError, TransferRecord, TransferRequest, TransferResult, TransferState,
};
