//! Entity re-exports.

pub use super::records::Entity as Records;
pub use super::users::Entity as Users;
pub use super::wallets::Entity as Wallets;
