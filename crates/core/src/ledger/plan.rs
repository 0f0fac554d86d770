//! Expense plans: fully validated input for one ledger operation.

use artha_shared::types::{Amount, RecordId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::error::LedgerError;
use crate::record::{Category, PaymentMethod, RecordError, parse_amount, parse_record_date, validate_title};

/// Raw record fields as submitted by a client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseInput {
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Short description.
    #[serde(default)]
    pub title: String,
    /// Category wire spelling.
    #[serde(default)]
    pub category: String,
    /// Amount spent.
    pub amount: Option<Decimal>,
    /// Payment method wire spelling.
    #[serde(default)]
    pub payment_method: String,
}

/// A validated expense, ready to be applied.
///
/// The record id is fixed up front so the persisted row is known before the
/// transaction starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpensePlan {
    /// Id the record will be inserted under.
    pub record_id: RecordId,
    /// Acting user.
    pub owner_id: UserId,
    /// When the expense happened.
    pub date: DateTime<Utc>,
    /// Trimmed title.
    pub title: String,
    /// Category.
    pub category: Category,
    /// Amount, rounded to cents.
    pub amount: Amount,
    /// Payment method.
    pub payment_method: PaymentMethod,
}

impl ExpensePlan {
    /// Validates raw input into a plan for `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidInput` naming the first offending field.
    pub fn from_input(owner_id: UserId, input: &ExpenseInput) -> Result<Self, LedgerError> {
        let amount = input.amount.ok_or(RecordError::MissingField("amount"))?;
        if input.category.trim().is_empty() {
            return Err(RecordError::MissingField("category").into());
        }
        if input.payment_method.trim().is_empty() {
            return Err(RecordError::MissingField("paymentMethod").into());
        }

        Ok(Self {
            record_id: RecordId::new(),
            owner_id,
            date: parse_record_date(&input.date)?,
            title: validate_title(&input.title)?,
            category: input.category.trim().parse()?,
            amount: parse_amount(amount)?,
            payment_method: input.payment_method.trim().parse()?,
        })
    }

    /// Returns true if applying this plan deducts from the wallet.
    #[must_use]
    pub const fn uses_wallet(&self) -> bool {
        self.payment_method.uses_wallet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input() -> ExpenseInput {
        ExpenseInput {
            date: "2024-05-01".to_string(),
            title: " Lunch ".to_string(),
            category: "Food".to_string(),
            amount: Some(dec!(40)),
            payment_method: "Wallet".to_string(),
        }
    }

    #[test]
    fn test_valid_plan() {
        let owner = UserId::new();
        let plan = ExpensePlan::from_input(owner, &input()).unwrap();
        assert_eq!(plan.owner_id, owner);
        assert_eq!(plan.title, "Lunch");
        assert_eq!(plan.category, Category::Food);
        assert_eq!(plan.amount.as_decimal(), dec!(40));
        assert!(plan.uses_wallet());
    }

    #[test]
    fn test_each_plan_gets_a_fresh_record_id() {
        let owner = UserId::new();
        let a = ExpensePlan::from_input(owner, &input()).unwrap();
        let b = ExpensePlan::from_input(owner, &input()).unwrap();
        assert_ne!(a.record_id, b.record_id);
    }

    #[test]
    fn test_missing_amount() {
        let raw = ExpenseInput {
            amount: None,
            ..input()
        };
        let err = ExpensePlan::from_input(UserId::new(), &raw).unwrap_err();
        assert_eq!(err.to_string(), "amount is required");
    }

    #[test]
    fn test_negative_amount() {
        let raw = ExpenseInput {
            amount: Some(dec!(-5)),
            ..input()
        };
        assert!(matches!(
            ExpensePlan::from_input(UserId::new(), &raw),
            Err(LedgerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unknown_enumerations() {
        let raw = ExpenseInput {
            category: "Pets".to_string(),
            ..input()
        };
        assert!(ExpensePlan::from_input(UserId::new(), &raw).is_err());

        let raw = ExpenseInput {
            payment_method: "wallet".to_string(),
            ..input()
        };
        assert!(ExpensePlan::from_input(UserId::new(), &raw).is_err());
    }

    #[test]
    fn test_non_wallet_plan() {
        let raw = ExpenseInput {
            payment_method: "Credit Card".to_string(),
            ..input()
        };
        let plan = ExpensePlan::from_input(UserId::new(), &raw).unwrap();
        assert!(!plan.uses_wallet());
    }

    #[test]
    fn test_input_deserializes_number_or_string_amount() {
        let raw: ExpenseInput = serde_json::from_str(
            r#"{"date":"2024-05-01","title":"Bus","category":"Transport","amount":"12.5","paymentMethod":"Cash"}"#,
        )
        .unwrap();
        assert_eq!(raw.amount, Some(dec!(12.5)));

        let raw: ExpenseInput = serde_json::from_str(r#"{"amount":12.5}"#).unwrap();
        assert_eq!(raw.amount, Some(dec!(12.5)));
    }
}
