//! Wallet ledger: the coupling between record creation and wallet deduction.
//!
//! This module implements:
//! - Validated expense plans built from raw record input
//! - The per-attempt state machine driven by the persistence layer
//! - Error types for ledger operations

pub mod attempt;
pub mod error;
pub mod plan;

#[cfg(test)]
mod attempt_props;

pub use attempt::{AttemptState, ExpenseAttempt};
pub use error::LedgerError;
pub use plan::{ExpenseInput, ExpensePlan};
