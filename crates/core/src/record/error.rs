//! Record validation errors.

use artha_shared::AppError;
use thiserror::Error;

/// Errors raised while validating record input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required field was absent or blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Category outside the closed set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Payment method outside the closed set.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Date not in RFC 3339 or `YYYY-MM-DD` form.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Amount was not a decimal number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Amount below zero.
    #[error("Amount cannot be negative")]
    NegativeAmount,
}

impl From<RecordError> for AppError {
    fn from(e: RecordError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}
