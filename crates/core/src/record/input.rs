//! Parsing of raw record fields.

use artha_shared::types::{Amount, AmountError};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::error::RecordError;

/// Parses a record date.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates, the latter
/// interpreted as midnight UTC.
pub fn parse_record_date(raw: &str) -> Result<DateTime<Utc>, RecordError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RecordError::MissingField("date"));
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| RecordError::InvalidDate(raw.to_string()))
}

/// Trims a title and rejects it when blank.
pub fn validate_title(raw: &str) -> Result<String, RecordError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(RecordError::MissingField("title"));
    }
    Ok(title.to_string())
}

/// Converts a decimal into a non-negative record amount.
pub fn parse_amount(value: Decimal) -> Result<Amount, RecordError> {
    Amount::new(value).map_err(|e| match e {
        AmountError::Negative | AmountError::NotPositive => RecordError::NegativeAmount,
    })
}
