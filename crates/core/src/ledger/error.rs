//! Ledger error types.

use artha_shared::AppError;
use artha_shared::types::{Amount, UserId};
use thiserror::Error;

use super::attempt::AttemptState;
use crate::record::RecordError;
use crate::wallet::WalletError;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Input rejected before any mutation.
    #[error("{0}")]
    InvalidInput(String),

    /// The acting user has no wallet.
    #[error("Wallet not found for user {0}")]
    WalletNotFound(UserId),

    /// Wallet balance does not cover the amount.
    #[error("Insufficient balance: {balance} available, {requested} requested")]
    InsufficientFunds {
        /// Balance observed inside the transaction.
        balance: Amount,
        /// Amount of the rejected record.
        requested: Amount,
    },

    /// The store failed; the transaction was rolled back.
    #[error("Persistence failure: {0}")]
    Persistence(String),

    /// The attempt state machine was driven out of order.
    #[error("Invalid attempt transition from {from} to {to}")]
    InvalidTransition {
        /// State the attempt was in.
        from: AttemptState,
        /// State that was requested.
        to: AttemptState,
    },
}

impl From<RecordError> for LedgerError {
    fn from(e: RecordError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<LedgerError> for AppError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::InvalidInput(msg) => Self::InvalidInput(msg),
            LedgerError::WalletNotFound(_) => Self::NotFound(WalletError::NotFound.to_string()),
            LedgerError::InsufficientFunds { balance, requested } => {
                WalletError::InsufficientFunds { balance, requested }.into()
            }
            LedgerError::Persistence(msg) => Self::Persistence(msg),
            LedgerError::InvalidTransition { .. } => Self::Internal(e.to_string()),
        }
    }
}
