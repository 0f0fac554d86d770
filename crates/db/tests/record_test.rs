//! Integration tests for the record repository.

mod common;

use std::time::Duration;

use artha_db::repositories::RecordRepoError;
use artha_db::{LedgerRepository, RecordRepository};
use artha_shared::types::{PageRequest, RecordId};
use rust_decimal_macros::dec;

use common::{funded_user, plan, setup};

#[tokio::test]
async fn test_list_is_newest_first_and_paginated() {
    let db = setup().await;
    let user_id = funded_user(&db, "asha", dec!(0)).await;
    let ledger = LedgerRepository::new(db.clone());

    let mut created = Vec::new();
    for cents in [100, 200, 300, 400, 500] {
        let record = ledger
            .create_expense_record(&plan(user_id, rust_decimal::Decimal::new(cents, 2), "Cash"))
            .await
            .unwrap();
        created.push(record.id);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let repo = RecordRepository::new(db.clone());
    let first = repo
        .list(user_id, PageRequest { page: 1, per_page: 2 })
        .await
        .unwrap();
    assert_eq!(first.meta.total, 5);
    assert_eq!(first.meta.total_pages, 3);
    assert_eq!(
        first.data.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![created[4], created[3]]
    );

    let last = repo
        .list(user_id, PageRequest { page: 3, per_page: 2 })
        .await
        .unwrap();
    assert_eq!(last.data.iter().map(|r| r.id).collect::<Vec<_>>(), vec![created[0]]);
}

#[tokio::test]
async fn test_delete_checks_ownership() {
    let db = setup().await;
    let asha = funded_user(&db, "asha", dec!(0)).await;
    let ravi = funded_user(&db, "ravi", dec!(0)).await;

    let record = LedgerRepository::new(db.clone())
        .create_expense_record(&plan(asha, dec!(9.99), "UPI"))
        .await
        .unwrap();
    let record_id = RecordId::from_uuid(record.id);
    let repo = RecordRepository::new(db.clone());

    assert!(matches!(
        repo.delete(ravi, record_id).await,
        Err(RecordRepoError::Forbidden(id)) if id == record_id
    ));
    assert!(matches!(
        repo.delete(asha, RecordId::new()).await,
        Err(RecordRepoError::NotFound(_))
    ));

    repo.delete(asha, record_id).await.unwrap();
    assert!(repo.find_by_id(record_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_all_only_touches_own_records() {
    let db = setup().await;
    let asha = funded_user(&db, "asha", dec!(0)).await;
    let ravi = funded_user(&db, "ravi", dec!(0)).await;
    let ledger = LedgerRepository::new(db.clone());

    for _ in 0..3 {
        ledger
            .create_expense_record(&plan(asha, dec!(1), "Cash"))
            .await
            .unwrap();
    }
    ledger
        .create_expense_record(&plan(ravi, dec!(1), "Cash"))
        .await
        .unwrap();

    let repo = RecordRepository::new(db.clone());
    assert_eq!(repo.delete_all(asha).await.unwrap(), 3);
    assert_eq!(repo.delete_all(asha).await.unwrap(), 0);
    assert_eq!(
        repo.list(ravi, PageRequest::default()).await.unwrap().meta.total,
        1
    );
}
