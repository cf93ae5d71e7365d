//! Account Transfer
//!
//! Moves a fixed amount from one account's balance to another's.
//!
//! # State Machine
//!
//! ```text
//! PENDING → APPLIED
//!    ↓
//! REJECTED
//! ```
//!
//! # Preconditions (checked in order, before any mutation)
//!
//! 1. **Positive Amount**: `amount > 0`, finite
//! 2. **Distinct Accounts**: `from.id != to.id`
//! 3. **Sufficient Funds**: `from.balance >= amount`
//! 4. **No Overflow**: the credit fits in the decimal range

pub mod engine;
pub mod error;
pub mod state;
pub mod types;

// Re-exports for convenience
pub use engine::TransferEngine;
pub use error::TransferError;
pub use state::TransferState;
pub use types::{TransferRecord, TransferRequest, TransferResult};
