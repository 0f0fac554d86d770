//! Closed enumerations carried by every record.
//!
//! Wire spellings are exact and case-sensitive (`"Credit Card"`, `"UPI"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::RecordError;

/// Spending category of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Recurring bills.
    Bills,
    /// Tuition, courses, books.
    Education,
    /// Leisure and entertainment.
    Entertainment,
    /// Food and groceries.
    Food,
    /// Medical and health.
    Health,
    /// Shopping.
    Shopping,
    /// Travel and commute.
    Transport,
    /// Household.
    Home,
    /// Utilities.
    Utilities,
    /// Anything else.
    Others,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Bills,
        Self::Education,
        Self::Entertainment,
        Self::Food,
        Self::Health,
        Self::Shopping,
        Self::Transport,
        Self::Home,
        Self::Utilities,
        Self::Others,
    ];

    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bills => "Bills",
            Self::Education => "Education",
            Self::Entertainment => "Entertainment",
            Self::Food => "Food",
            Self::Health => "Health",
            Self::Shopping => "Shopping",
            Self::Transport => "Transport",
            Self::Home => "Home",
            Self::Utilities => "Utilities",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| RecordError::UnknownCategory(s.to_string()))
    }
}

/// How a record was paid.
///
/// `Wallet` is the only method that touches the wallet balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash.
    Cash,
    /// Credit card.
    #[serde(rename = "Credit Card")]
    CreditCard,
    /// Debit card.
    #[serde(rename = "Debit Card")]
    DebitCard,
    /// Net banking transfer.
    #[serde(rename = "Net Banking")]
    NetBanking,
    /// Unified Payments Interface.
    #[serde(rename = "UPI")]
    Upi,
    /// The user's stored wallet balance.
    Wallet,
    /// Anything else.
    Others,
}

impl PaymentMethod {
    /// Every payment method, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Cash,
        Self::CreditCard,
        Self::DebitCard,
        Self::NetBanking,
        Self::Upi,
        Self::Wallet,
        Self::Others,
    ];

    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::NetBanking => "Net Banking",
            Self::Upi => "UPI",
            Self::Wallet => "Wallet",
            Self::Others => "Others",
        }
    }

    /// Returns true if paying this way deducts from the wallet.
    #[must_use]
    pub const fn uses_wallet(&self) -> bool {
        matches!(self, Self::Wallet)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| RecordError::UnknownPaymentMethod(s.to_string()))
    }
}
