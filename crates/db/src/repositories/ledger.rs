//! Wallet ledger repository.
//!
//! Owns every wallet balance mutation. An expense paid from the wallet is a
//! single store transaction that decrements the balance with a conditional
//! update and inserts the record; either both are visible or neither is.
//!
//! Deduction is `UPDATE wallets SET balance = ROUND(balance - :amount, 2)
//! WHERE owner_id = :user AND balance >= :amount - 0.005`. Concurrent
//! deductions therefore serialize on the wallet row and can never take the
//! balance below zero. The half-cent slack and the rounding keep backends
//! that store the balance as a binary float (SQLite) on whole cents.

use artha_core::ledger::{AttemptState, ExpenseAttempt, ExpensePlan, LedgerError};
use artha_core::wallet::{WalletError, deduct};
use artha_shared::types::{Amount, UserId};
use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use tracing::{debug, info, warn};

use crate::entities::{records, wallets};

/// Half a cent; balances are compared with this much slack.
const HALF_CENT: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

fn persistence(e: DbErr) -> LedgerError {
    LedgerError::Persistence(e.to_string())
}

/// `ROUND(balance <op> :amount, 2)`
fn rounded_balance(op: &str, amount: Decimal) -> SimpleExpr {
    Expr::cust_with_values(format!("ROUND(\"balance\" {op} ?, 2)"), [amount])
}

/// Ledger repository: record creation coupled with wallet deduction, and
/// wallet deposits.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an expense record, deducting from the owner's wallet when the
    /// plan is paid by wallet.
    ///
    /// # Errors
    ///
    /// - `LedgerError::WalletNotFound` if a wallet payment has no wallet
    /// - `LedgerError::InsufficientFunds` if the balance does not cover it
    /// - `LedgerError::Persistence` if the store fails; nothing is written
    pub async fn create_expense_record(
        &self,
        plan: &ExpensePlan,
    ) -> Result<records::Model, LedgerError> {
        let mut attempt = ExpenseAttempt::start(plan);
        let txn = self.db.begin().await.map_err(persistence)?;

        match Self::apply_expense(&txn, plan, &mut attempt).await {
            Ok(record) => match txn.commit().await {
                Ok(()) => {
                    step(&mut attempt, plan, AttemptState::Committed)?;
                    info!(
                        record_id = %plan.record_id,
                        user_id = %plan.owner_id,
                        amount = %plan.amount,
                        payment_method = %plan.payment_method,
                        "expense record created"
                    );
                    Ok(record)
                }
                Err(e) => {
                    let compensated = attempt.roll_back()?;
                    warn!(
                        record_id = %plan.record_id,
                        user_id = %plan.owner_id,
                        compensated,
                        error = %e,
                        "commit failed, expense rolled back"
                    );
                    Err(persistence(e))
                }
            },
            Err(err) => {
                let compensated = attempt.roll_back()?;
                if let Err(e) = txn.rollback().await {
                    warn!(record_id = %plan.record_id, error = %e, "explicit rollback failed");
                }
                if compensated {
                    warn!(
                        record_id = %plan.record_id,
                        user_id = %plan.owner_id,
                        amount = %plan.amount,
                        error = %err,
                        "wallet deduction rolled back"
                    );
                } else {
                    debug!(record_id = %plan.record_id, error = %err, "expense rejected");
                }
                Err(err)
            }
        }
    }

    async fn apply_expense(
        txn: &DatabaseTransaction,
        plan: &ExpensePlan,
        attempt: &mut ExpenseAttempt,
    ) -> Result<records::Model, LedgerError> {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        let owner = plan.owner_id.into_inner();

        if plan.uses_wallet() {
            let amount = plan.amount.as_decimal();
            let result = wallets::Entity::update_many()
                .col_expr(wallets::Column::Balance, rounded_balance("-", amount))
                .col_expr(wallets::Column::UpdatedAt, Expr::value(now))
                .filter(wallets::Column::OwnerId.eq(owner))
                .filter(wallets::Column::Balance.gte(amount - HALF_CENT))
                .exec(txn)
                .await
                .map_err(persistence)?;

            if result.rows_affected == 0 {
                let wallet = wallets::Entity::find()
                    .filter(wallets::Column::OwnerId.eq(owner))
                    .one(txn)
                    .await
                    .map_err(persistence)?;

                return Err(match wallet.map(|w| deduct(w.balance(), plan.amount)) {
                    None => LedgerError::WalletNotFound(plan.owner_id),
                    Some(Err(WalletError::InsufficientFunds { balance, requested })) => {
                        LedgerError::InsufficientFunds { balance, requested }
                    }
                    Some(_) => LedgerError::Persistence(
                        "wallet balance changed during deduction".to_string(),
                    ),
                });
            }

            step(attempt, plan, AttemptState::BalanceChecked)?;
            step(attempt, plan, AttemptState::Deducted)?;
        }

        let record = records::ActiveModel {
            id: Set(plan.record_id.into_inner()),
            owner_id: Set(owner),
            date: Set(plan.date.into()),
            title: Set(plan.title.clone()),
            category: Set(plan.category.into()),
            amount: Set(plan.amount.as_decimal()),
            payment_method: Set(plan.payment_method.into()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(txn)
        .await
        .map_err(persistence)?;

        step(attempt, plan, AttemptState::RecordInserted)?;
        Ok(record)
    }

    /// Adds `amount` to the owner's wallet and returns the new balance.
    ///
    /// The increment is a single `balance = ROUND(balance + :amount, 2)` update read
    /// back inside the same transaction, so concurrent deposits never lose
    /// an update.
    ///
    /// # Errors
    ///
    /// - `LedgerError::InvalidInput` if `amount` is zero
    /// - `LedgerError::WalletNotFound` if the user has no wallet
    /// - `LedgerError::Persistence` if the store fails; nothing is written
    pub async fn add_balance(&self, user_id: UserId, amount: Amount) -> Result<Amount, LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::InvalidInput(
                "Amount must be greater than zero".to_string(),
            ));
        }

        let txn = self.db.begin().await.map_err(persistence)?;

        match Self::apply_deposit(&txn, user_id, amount).await {
            Ok(balance) => {
                txn.commit().await.map_err(persistence)?;
                info!(user_id = %user_id, amount = %amount, balance = %balance, "wallet balance added");
                Ok(balance)
            }
            Err(err) => {
                if let Err(e) = txn.rollback().await {
                    warn!(user_id = %user_id, error = %e, "explicit rollback failed");
                }
                Err(err)
            }
        }
    }

    async fn apply_deposit(
        txn: &DatabaseTransaction,
        user_id: UserId,
        amount: Amount,
    ) -> Result<Amount, LedgerError> {
        let owner = user_id.into_inner();

        let result = wallets::Entity::update_many()
            .col_expr(
                wallets::Column::Balance,
                rounded_balance("+", amount.as_decimal()),
            )
            .col_expr(wallets::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(wallets::Column::OwnerId.eq(owner))
            .exec(txn)
            .await
            .map_err(persistence)?;

        if result.rows_affected == 0 {
            return Err(LedgerError::WalletNotFound(user_id));
        }

        wallets::Entity::find()
            .filter(wallets::Column::OwnerId.eq(owner))
            .one(txn)
            .await
            .map_err(persistence)?
            .map(|wallet| wallet.balance())
            .ok_or(LedgerError::WalletNotFound(user_id))
    }
}

fn step(
    attempt: &mut ExpenseAttempt,
    plan: &ExpensePlan,
    to: AttemptState,
) -> Result<(), LedgerError> {
    attempt.advance(to)?;
    debug!(record_id = %plan.record_id, state = %to, "expense attempt advanced");
    Ok(())
}
