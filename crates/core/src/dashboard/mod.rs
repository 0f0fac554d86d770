//! Spending dashboard aggregation.
//!
//! This module provides:
//! - Totals, per-category and per-payment-method breakdowns
//! - Month-by-month spending

pub mod service;
pub mod types;


pub use service::DashboardService;
pub use types::*;
