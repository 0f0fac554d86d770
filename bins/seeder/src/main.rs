//! Database seeder for Artha development and testing.
//!
//! Seeds a demo user with a funded wallet and a spread of records across
//! categories, payment methods and months. Safe to re-run: an existing demo
//! user is left untouched.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use rust_decimal::Decimal;

use artha_core::auth::{NewUser, hash_password};
use artha_core::ledger::{ExpenseInput, ExpensePlan};
use artha_db::{LedgerRepository, UserRepository, connect, run_migrations};
use artha_shared::AppConfig;
use artha_shared::types::{Amount, UserId};

const DEMO_USERNAME: &str = "demo";
const DEMO_EMAIL: &str = "demo@artha.dev";
const DEMO_PASSWORD: &str = "demo-password";

/// (date, title, category, amount in cents, payment method)
const DEMO_RECORDS: [(&str, &str, &str, i64, &str); 8] = [
    ("2024-01-05", "Electricity bill", "Bills", 4_250, "Net Banking"),
    ("2024-01-18", "Weekly groceries", "Food", 6_380, "Wallet"),
    ("2024-02-02", "Metro card top-up", "Transport", 1_500, "UPI"),
    ("2024-02-14", "Dinner out", "Food", 3_800, "Credit Card"),
    ("2024-03-09", "Online course", "Education", 12_900, "Debit Card"),
    ("2024-03-21", "Pharmacy", "Health", 950, "Cash"),
    ("2024-04-11", "Concert tickets", "Entertainment", 7_500, "Wallet"),
    ("2024-04-27", "Desk lamp", "Home", 2_199, "Others"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&db).await.context("Failed to run migrations")?;

    let users = UserRepository::new(db.clone());
    if users.find_by_login(Some(DEMO_USERNAME), None).await?.is_some() {
        println!("  Demo user already exists, skipping...");
        return Ok(());
    }

    println!("Seeding demo user...");
    let new_user = NewUser::validate(DEMO_USERNAME, DEMO_EMAIL, "Demo User", DEMO_PASSWORD, None)?;
    let password_hash = hash_password(&new_user.password)?;
    let user = users.create_with_wallet(&new_user, &password_hash).await?;
    let user_id = UserId::from_uuid(user.id);

    println!("Funding wallet...");
    let ledger = LedgerRepository::new(db.clone());
    ledger
        .add_balance(user_id, Amount::positive(Decimal::new(50_000, 2))?)
        .await?;

    println!("Seeding records...");
    for (date, title, category, cents, payment_method) in DEMO_RECORDS {
        let input = ExpenseInput {
            date: date.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            amount: Some(Decimal::new(cents, 2)),
            payment_method: payment_method.to_string(),
        };
        let plan = ExpensePlan::from_input(user_id, &input)?;
        ledger.create_expense_record(&plan).await?;
    }

    println!("Seeding complete! Log in as {DEMO_USERNAME} / {DEMO_PASSWORD}");
    Ok(())
}
