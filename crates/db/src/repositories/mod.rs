//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod dashboard;
pub mod ledger;
pub mod record;
pub mod user;
pub mod wallet;

pub use dashboard::{DashboardError, DashboardRepository};
pub use ledger::LedgerRepository;
pub use record::{RecordRepoError, RecordRepository};
pub use user::{UserError, UserRepository};
pub use wallet::{WalletRepoError, WalletRepository};
