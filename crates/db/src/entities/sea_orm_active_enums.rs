//! `SeaORM` active enums, stored as their wire spellings.

use artha_core::record;
use sea_orm::entity::prelude::*;

/// Stored form of [`record::Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Category {
    #[sea_orm(string_value = "Bills")]
    Bills,
    #[sea_orm(string_value = "Education")]
    Education,
    #[sea_orm(string_value = "Entertainment")]
    Entertainment,
    #[sea_orm(string_value = "Food")]
    Food,
    #[sea_orm(string_value = "Health")]
    Health,
    #[sea_orm(string_value = "Shopping")]
    Shopping,
    #[sea_orm(string_value = "Transport")]
    Transport,
    #[sea_orm(string_value = "Home")]
    Home,
    #[sea_orm(string_value = "Utilities")]
    Utilities,
    #[sea_orm(string_value = "Others")]
    Others,
}

/// Stored form of [`record::PaymentMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PaymentMethod {
    #[sea_orm(string_value = "Cash")]
    Cash,
    #[sea_orm(string_value = "Credit Card")]
    CreditCard,
    #[sea_orm(string_value = "Debit Card")]
    DebitCard,
    #[sea_orm(string_value = "Net Banking")]
    NetBanking,
    #[sea_orm(string_value = "UPI")]
    Upi,
    #[sea_orm(string_value = "Wallet")]
    Wallet,
    #[sea_orm(string_value = "Others")]
    Others,
}

impl From<record::Category> for Category {
    fn from(c: record::Category) -> Self {
        match c {
            record::Category::Bills => Self::Bills,
            record::Category::Education => Self::Education,
            record::Category::Entertainment => Self::Entertainment,
            record::Category::Food => Self::Food,
            record::Category::Health => Self::Health,
            record::Category::Shopping => Self::Shopping,
            record::Category::Transport => Self::Transport,
            record::Category::Home => Self::Home,
            record::Category::Utilities => Self::Utilities,
            record::Category::Others => Self::Others,
        }
    }
}

impl From<Category> for record::Category {
    fn from(c: Category) -> Self {
        match c {
            Category::Bills => Self::Bills,
            Category::Education => Self::Education,
            Category::Entertainment => Self::Entertainment,
            Category::Food => Self::Food,
            Category::Health => Self::Health,
            Category::Shopping => Self::Shopping,
            Category::Transport => Self::Transport,
            Category::Home => Self::Home,
            Category::Utilities => Self::Utilities,
            Category::Others => Self::Others,
        }
    }
}

impl From<record::PaymentMethod> for PaymentMethod {
    fn from(m: record::PaymentMethod) -> Self {
        match m {
            record::PaymentMethod::Cash => Self::Cash,
            record::PaymentMethod::CreditCard => Self::CreditCard,
            record::PaymentMethod::DebitCard => Self::DebitCard,
            record::PaymentMethod::NetBanking => Self::NetBanking,
            record::PaymentMethod::Upi => Self::Upi,
            record::PaymentMethod::Wallet => Self::Wallet,
            record::PaymentMethod::Others => Self::Others,
        }
    }
}

impl From<PaymentMethod> for record::PaymentMethod {
    fn from(m: PaymentMethod) -> Self {
        match m {
            PaymentMethod::Cash => Self::Cash,
            PaymentMethod::CreditCard => Self::CreditCard,
            PaymentMethod::DebitCard => Self::DebitCard,
            PaymentMethod::NetBanking => Self::NetBanking,
            PaymentMethod::Upi => Self::Upi,
            PaymentMethod::Wallet => Self::Wallet,
            PaymentMethod::Others => Self::Others,
        }
    }
}
