//! Shared fixtures for repository integration tests.

#![allow(dead_code)]

use artha_core::auth::NewUser;
use artha_core::ledger::{ExpenseInput, ExpensePlan};
use artha_db::entities::users;
use artha_db::{LedgerRepository, UserRepository, connect, connect_in_memory, run_migrations};
use artha_shared::config::DatabaseConfig;
use artha_shared::types::{Amount, UserId};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Fresh, migrated in-memory database.
pub async fn setup() -> DatabaseConnection {
    connect_in_memory()
        .await
        .expect("Failed to open in-memory database")
}

/// Fresh, migrated SQLite file inside `dir`, served by a pool of
/// `connections` so transactions really run side by side.
pub async fn setup_pooled(dir: &TempDir, connections: u32) -> DatabaseConnection {
    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("artha.db").display()),
        max_connections: connections,
        min_connections: connections,
        auto_migrate: false,
    };
    let db = connect(&config).await.expect("Failed to open database file");
    run_migrations(&db).await.expect("Failed to run migrations");
    db
}

/// Registers a user (and their empty wallet).
pub async fn register(db: &DatabaseConnection, username: &str) -> users::Model {
    let new_user = NewUser::validate(
        username,
        &format!("{username}@example.com"),
        "Test User",
        "secret-password",
        None,
    )
    .expect("valid registration");

    UserRepository::new(db.clone())
        .create_with_wallet(&new_user, "$argon2id$test_hash")
        .await
        .expect("Failed to create user")
}

/// Registers a user and deposits `balance` into their wallet.
pub async fn funded_user(db: &DatabaseConnection, username: &str, balance: Decimal) -> UserId {
    let user = register(db, username).await;
    let user_id = UserId::from_uuid(user.id);
    if !balance.is_zero() {
        LedgerRepository::new(db.clone())
            .add_balance(user_id, amount(balance))
            .await
            .expect("Failed to fund wallet");
    }
    user_id
}

/// Builds a validated expense plan.
pub fn plan(owner: UserId, value: Decimal, payment_method: &str) -> ExpensePlan {
    ExpensePlan::from_input(
        owner,
        &ExpenseInput {
            date: "2024-05-01".to_string(),
            title: "Groceries".to_string(),
            category: "Food".to_string(),
            amount: Some(value),
            payment_method: payment_method.to_string(),
        },
    )
    .expect("valid plan")
}

pub fn amount(value: Decimal) -> Amount {
    Amount::new(value).expect("non-negative amount")
}
