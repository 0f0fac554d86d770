//! `SeaORM` entity definitions.
//!
//! The derive macros emit `Column`, `ActiveModel` and friends without docs.

#![allow(missing_docs)]

pub mod prelude;
pub mod records;
pub mod sea_orm_active_enums;
pub mod users;
pub mod wallets;
