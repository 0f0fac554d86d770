//! Expense records.
//!
//! This module provides:
//! - The closed `Category` and `PaymentMethod` enumerations
//! - Parsing and validation of record input fields
//! - Record error types

pub mod error;
pub mod input;
pub mod types;

pub use error::RecordError;
pub use input::{parse_amount, parse_record_date, validate_title};
pub use types::{Category, PaymentMethod};
