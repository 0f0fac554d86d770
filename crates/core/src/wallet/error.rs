//! Wallet error types.

use artha_shared::AppError;
use artha_shared::types::Amount;
use thiserror::Error;

/// Errors raised by wallet operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The user has no wallet.
    #[error("Wallet not found")]
    NotFound,

    /// The user already has a wallet.
    #[error("Wallet already exists")]
    AlreadyExists,

    /// Balance does not cover the requested amount.
    #[error("Insufficient balance: {balance} available, {requested} requested")]
    InsufficientFunds {
        /// Balance at the time of the check.
        balance: Amount,
        /// Amount that was requested.
        requested: Amount,
    },

    /// Amount rejected before any mutation.
    #[error("{0}")]
    InvalidAmount(String),

    /// Name rejected before any mutation.
    #[error("{0}")]
    InvalidName(String),
}

impl From<WalletError> for AppError {
    fn from(e: WalletError) -> Self {
        match e {
            WalletError::NotFound => Self::NotFound(e.to_string()),
            WalletError::AlreadyExists => Self::Conflict(e.to_string()),
            WalletError::InsufficientFunds { .. } => Self::InsufficientFunds(e.to_string()),
            WalletError::InvalidAmount(msg) | WalletError::InvalidName(msg) => {
                Self::InvalidInput(msg)
            }
        }
    }
}
