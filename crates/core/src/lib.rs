//! Core business logic for Artha.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `auth` - Password hashing and account field validation
//! - `record` - Expense categories, payment methods and record input
//! - `wallet` - Wallet naming and balance arithmetic
//! - `ledger` - Expense plans and the expense-attempt state machine
//! - `dashboard` - Spending aggregation

pub mod auth;
pub mod dashboard;
pub mod ledger;
pub mod record;
pub mod wallet;
