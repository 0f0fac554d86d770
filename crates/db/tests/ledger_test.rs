//! Integration tests for the wallet ledger.
//!
//! Every test runs against its own migrated in-memory SQLite database.

mod common;

use artha_core::ledger::LedgerError;
use artha_db::entities::records;
use artha_db::{LedgerRepository, RecordRepository, WalletRepository};
use artha_shared::types::{PageRequest, UserId};
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use common::{amount, funded_user, plan, register, setup};

async fn balance(db: &DatabaseConnection, user_id: UserId) -> rust_decimal::Decimal {
    WalletRepository::new(db.clone())
        .snapshot(user_id)
        .await
        .expect("wallet exists")
        .balance
        .as_decimal()
}

async fn record_count(db: &DatabaseConnection, user_id: UserId) -> u64 {
    RecordRepository::new(db.clone())
        .list(user_id, PageRequest::default())
        .await
        .expect("list records")
        .meta
        .total
}

#[tokio::test]
async fn test_wallet_expense_within_balance() {
    let db = setup().await;
    let user_id = funded_user(&db, "asha", dec!(100.00)).await;
    let ledger = LedgerRepository::new(db.clone());

    let record = ledger
        .create_expense_record(&plan(user_id, dec!(40), "Wallet"))
        .await
        .expect("expense within balance");

    assert_eq!(record.amount().as_decimal(), dec!(40));
    assert_eq!(balance(&db, user_id).await, dec!(60.00));
    assert_eq!(record_count(&db, user_id).await, 1);
}

#[tokio::test]
async fn test_wallet_expense_beyond_balance_changes_nothing() {
    let db = setup().await;
    let user_id = funded_user(&db, "asha", dec!(100.00)).await;
    let ledger = LedgerRepository::new(db.clone());

    let err = ledger
        .create_expense_record(&plan(user_id, dec!(150), "Wallet"))
        .await
        .unwrap_err();

    match err {
        LedgerError::InsufficientFunds { balance, requested } => {
            assert_eq!(balance, amount(dec!(100)));
            assert_eq!(requested, amount(dec!(150)));
        }
        other => panic!("expected InsufficientFunds, got {other:?}"),
    }
    assert_eq!(balance(&db, user_id).await, dec!(100.00));
    assert_eq!(record_count(&db, user_id).await, 0);
}

#[tokio::test]
async fn test_expense_can_spend_exact_balance() {
    let db = setup().await;
    let user_id = funded_user(&db, "asha", dec!(25.50)).await;

    LedgerRepository::new(db.clone())
        .create_expense_record(&plan(user_id, dec!(25.50), "Wallet"))
        .await
        .expect("exact balance");

    assert_eq!(balance(&db, user_id).await, dec!(0));
}

#[tokio::test]
async fn test_non_wallet_expense_leaves_balance_alone() {
    let db = setup().await;
    let user_id = funded_user(&db, "asha", dec!(10)).await;

    let record = LedgerRepository::new(db.clone())
        .create_expense_record(&plan(user_id, dec!(500), "Credit Card"))
        .await
        .expect("card expense");

    assert_eq!(
        artha_core::record::PaymentMethod::from(record.payment_method),
        artha_core::record::PaymentMethod::CreditCard
    );
    assert_eq!(balance(&db, user_id).await, dec!(10));
    assert_eq!(record_count(&db, user_id).await, 1);
}

#[tokio::test]
async fn test_wallet_expense_without_wallet() {
    let db = setup().await;
    let user_id = funded_user(&db, "asha", dec!(0)).await;
    WalletRepository::new(db.clone())
        .delete(user_id)
        .await
        .expect("delete wallet");

    let err = LedgerRepository::new(db.clone())
        .create_expense_record(&plan(user_id, dec!(1), "Wallet"))
        .await
        .unwrap_err();

    assert!(matches!(err, LedgerError::WalletNotFound(id) if id == user_id));
    assert_eq!(record_count(&db, user_id).await, 0);
}

#[tokio::test]
async fn test_non_wallet_expense_without_wallet_succeeds() {
    let db = setup().await;
    let user_id = funded_user(&db, "asha", dec!(0)).await;
    WalletRepository::new(db.clone())
        .delete(user_id)
        .await
        .expect("delete wallet");

    LedgerRepository::new(db.clone())
        .create_expense_record(&plan(user_id, dec!(12), "Cash"))
        .await
        .expect("cash expense needs no wallet");

    assert_eq!(record_count(&db, user_id).await, 1);
}

#[tokio::test]
async fn test_failed_insert_after_deduction_rolls_back_balance() {
    let db = setup().await;
    let user_id = funded_user(&db, "asha", dec!(100)).await;
    let ledger = LedgerRepository::new(db.clone());

    // Occupy the record id the wallet expense will try to use
    let expense = plan(user_id, dec!(30), "Wallet");
    let now = chrono::Utc::now().into();
    records::ActiveModel {
        id: Set(expense.record_id.into_inner()),
        owner_id: Set(user_id.into_inner()),
        date: Set(now),
        title: Set("Existing".to_string()),
        category: Set(expense.category.into()),
        amount: Set(dec!(1)),
        payment_method: Set(artha_core::record::PaymentMethod::Cash.into()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await
    .expect("seed conflicting record");

    let err = ledger.create_expense_record(&expense).await.unwrap_err();

    assert!(matches!(err, LedgerError::Persistence(_)));
    assert_eq!(balance(&db, user_id).await, dec!(100));
    assert_eq!(record_count(&db, user_id).await, 1);
}

#[tokio::test]
async fn test_expenses_are_scoped_to_the_acting_user() {
    let db = setup().await;
    let asha = funded_user(&db, "asha", dec!(50)).await;
    let ravi = funded_user(&db, "ravi", dec!(80)).await;

    LedgerRepository::new(db.clone())
        .create_expense_record(&plan(asha, dec!(20), "Wallet"))
        .await
        .expect("expense");

    assert_eq!(balance(&db, asha).await, dec!(30));
    assert_eq!(balance(&db, ravi).await, dec!(80));
    assert_eq!(record_count(&db, ravi).await, 0);
}

#[tokio::test]
async fn test_add_balance() {
    let db = setup().await;
    let user = register(&db, "asha").await;
    let user_id = UserId::from_uuid(user.id);
    let ledger = LedgerRepository::new(db.clone());

    assert_eq!(
        ledger.add_balance(user_id, amount(dec!(25.50))).await.unwrap(),
        amount(dec!(25.50))
    );
    assert_eq!(
        ledger.add_balance(user_id, amount(dec!(0.25))).await.unwrap(),
        amount(dec!(25.75))
    );
}

#[tokio::test]
async fn test_deposits_in_cents_can_be_spent_exactly() {
    let db = setup().await;
    let user_id = funded_user(&db, "asha", dec!(0.70)).await;
    let ledger = LedgerRepository::new(db.clone());

    ledger.add_balance(user_id, amount(dec!(0.10))).await.unwrap();
    assert_eq!(balance(&db, user_id).await, dec!(0.80));

    ledger
        .create_expense_record(&plan(user_id, dec!(0.80), "Wallet"))
        .await
        .expect("spend the whole balance");

    assert_eq!(balance(&db, user_id).await, dec!(0));
    assert_eq!(record_count(&db, user_id).await, 1);
}

#[tokio::test]
async fn test_successive_cent_expenses_drain_to_zero() {
    let db = setup().await;
    let user_id = funded_user(&db, "asha", dec!(0.30)).await;
    let ledger = LedgerRepository::new(db.clone());

    ledger
        .create_expense_record(&plan(user_id, dec!(0.10), "Wallet"))
        .await
        .expect("first expense");
    assert_eq!(balance(&db, user_id).await, dec!(0.20));

    ledger
        .create_expense_record(&plan(user_id, dec!(0.20), "Wallet"))
        .await
        .expect("second expense spends the remainder");
    assert_eq!(balance(&db, user_id).await, dec!(0));

    let err = ledger
        .create_expense_record(&plan(user_id, dec!(0.01), "Wallet"))
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
    assert_eq!(record_count(&db, user_id).await, 2);
}

#[tokio::test]
async fn test_one_cent_short_is_rejected() {
    let db = setup().await;
    let user_id = funded_user(&db, "asha", dec!(0.79)).await;

    let err = LedgerRepository::new(db.clone())
        .create_expense_record(&plan(user_id, dec!(0.80), "Wallet"))
        .await
        .unwrap_err();

    match err {
        LedgerError::InsufficientFunds { balance, requested } => {
            assert_eq!(balance, amount(dec!(0.79)));
            assert_eq!(requested, amount(dec!(0.80)));
        }
        other => panic!("expected insufficient funds, got {other:?}"),
    }
    assert_eq!(balance(&db, user_id).await, dec!(0.79));
}

#[tokio::test]
async fn test_add_balance_rejects_zero_and_missing_wallet() {
    let db = setup().await;
    let user_id = funded_user(&db, "asha", dec!(5)).await;
    let ledger = LedgerRepository::new(db.clone());

    assert!(matches!(
        ledger.add_balance(user_id, amount(dec!(0))).await,
        Err(LedgerError::InvalidInput(_))
    ));
    assert_eq!(balance(&db, user_id).await, dec!(5));

    assert!(matches!(
        ledger.add_balance(UserId::new(), amount(dec!(1))).await,
        Err(LedgerError::WalletNotFound(_))
    ));
}

#[tokio::test]
async fn test_deleting_a_record_does_not_refund() {
    let db = setup().await;
    let user_id = funded_user(&db, "asha", dec!(100)).await;

    let record = LedgerRepository::new(db.clone())
        .create_expense_record(&plan(user_id, dec!(40), "Wallet"))
        .await
        .expect("expense");

    RecordRepository::new(db.clone())
        .delete(user_id, record.id.into())
        .await
        .expect("delete record");

    assert_eq!(balance(&db, user_id).await, dec!(60));
}
