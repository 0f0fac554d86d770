//! Dashboard data types.

use artha_shared::types::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Category, PaymentMethod};
use crate::wallet::WalletSnapshot;

/// The fields of a record the dashboard aggregates over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFacts {
    /// When the expense happened.
    pub date: DateTime<Utc>,
    /// Category.
    pub category: Category,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Amount.
    pub amount: Amount,
}

/// Records dashboard response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsDashboard {
    /// The user's wallet, or `null` when none exists.
    pub user_wallet: Option<WalletSnapshot>,
    /// Number of records.
    pub total_number_of_records: u64,
    /// Sum of all record amounts.
    pub total_amount_spent: Amount,
    /// Totals per category, categories without records omitted.
    pub category_wise_records: Vec<CategoryTotal>,
    /// Totals per payment method, methods without records omitted.
    pub payment_method_wise_records: Vec<PaymentMethodTotal>,
}

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    /// Category.
    pub category: Category,
    /// Amount spent.
    pub total_amount: Amount,
}

/// Total spent through one payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodTotal {
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Amount spent.
    pub total_amount: Amount,
}

/// Total spent in one calendar month (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    /// Year.
    pub year: i32,
    /// Month, 1 through 12.
    pub month: u32,
    /// Amount spent.
    pub total_amount: Amount,
}
