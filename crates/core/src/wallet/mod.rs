//! Wallet rules.
//!
//! The wallet is the only mutable balance in the system. Persistence applies
//! these rules with conditional updates; the functions here are the
//! arithmetic those updates must agree with.

pub mod error;

pub use error::WalletError;

use artha_shared::types::Amount;
use serde::{Deserialize, Serialize};

/// Name given to a wallet created without one.
pub const DEFAULT_WALLET_NAME: &str = "Wallet";

/// Longest allowed wallet name, in characters.
pub const MAX_WALLET_NAME_LEN: usize = 64;

/// Public view of a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    /// Display name.
    pub wallet_name: String,
    /// Current balance.
    pub balance: Amount,
}

/// Trims a wallet name and checks its length.
pub fn validate_wallet_name(raw: &str) -> Result<String, WalletError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(WalletError::InvalidName("Wallet name is required".to_string()));
    }
    if name.chars().count() > MAX_WALLET_NAME_LEN {
        return Err(WalletError::InvalidName(format!(
            "Wallet name must be at most {MAX_WALLET_NAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

/// Resolves the optional name supplied when creating a wallet.
pub fn wallet_name_or_default(raw: Option<&str>) -> Result<String, WalletError> {
    match raw {
        Some(name) if !name.trim().is_empty() => validate_wallet_name(name),
        _ => Ok(DEFAULT_WALLET_NAME.to_string()),
    }
}

/// Balance after paying `amount` out of `balance`.
pub fn deduct(balance: Amount, amount: Amount) -> Result<Amount, WalletError> {
    balance
        .checked_sub(amount)
        .ok_or(WalletError::InsufficientFunds {
            balance,
            requested: amount,
        })
}
