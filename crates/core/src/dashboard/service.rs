//! Dashboard aggregation service.

use std::collections::BTreeMap;

use artha_shared::types::Amount;
use chrono::Datelike;

use super::types::{CategoryTotal, MonthlyTotal, PaymentMethodTotal, RecordFacts, RecordsDashboard};
use crate::wallet::WalletSnapshot;

/// Stateless dashboard aggregation.
pub struct DashboardService;

impl DashboardService {
    /// Summarizes a user's records alongside their wallet.
    ///
    /// Buckets follow the declaration order of `Category` and
    /// `PaymentMethod`.
    #[must_use]
    pub fn summarize(records: &[RecordFacts], wallet: Option<WalletSnapshot>) -> RecordsDashboard {
        let mut by_category = BTreeMap::new();
        let mut by_method = BTreeMap::new();

        for record in records {
            accumulate(&mut by_category, record.category, record.amount);
            accumulate(&mut by_method, record.payment_method, record.amount);
        }

        RecordsDashboard {
            user_wallet: wallet,
            total_number_of_records: records.len() as u64,
            total_amount_spent: records.iter().map(|r| r.amount).sum(),
            category_wise_records: by_category
                .into_iter()
                .map(|(category, total_amount)| CategoryTotal {
                    category,
                    total_amount,
                })
                .collect(),
            payment_method_wise_records: by_method
                .into_iter()
                .map(|(payment_method, total_amount)| PaymentMethodTotal {
                    payment_method,
                    total_amount,
                })
                .collect(),
        }
    }

    /// Groups spending by calendar month, ascending by (year, month).
    #[must_use]
    pub fn annual(records: &[RecordFacts]) -> Vec<MonthlyTotal> {
        let mut by_month = BTreeMap::new();
        for record in records {
            accumulate(
                &mut by_month,
                (record.date.year(), record.date.month()),
                record.amount,
            );
        }

        by_month
            .into_iter()
            .map(|((year, month), total_amount)| MonthlyTotal {
                year,
                month,
                total_amount,
            })
            .collect()
    }
}

fn accumulate<K: Ord>(totals: &mut BTreeMap<K, Amount>, key: K, amount: Amount) {
    let entry = totals.entry(key).or_insert(Amount::ZERO);
    *entry = entry.saturating_add(amount);
}
