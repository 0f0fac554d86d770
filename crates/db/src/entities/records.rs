//! `SeaORM` Entity for records table.

use artha_core::dashboard::RecordFacts;
use artha_shared::types::Amount;
use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{Category, PaymentMethod};

/// An expense record owned by one user.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    /// When the expense happened, as given by the user.
    pub date: DateTimeWithTimeZone,
    pub title: String,
    pub category: Category,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnerId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Amount, normalized to cents.
    #[must_use]
    pub fn amount(&self) -> Amount {
        Amount::from_stored(self.amount)
    }

    /// The fields dashboard aggregation needs.
    #[must_use]
    pub fn facts(&self) -> RecordFacts {
        RecordFacts {
            date: self.date.to_utc(),
            category: self.category.into(),
            payment_method: self.payment_method.into(),
            amount: self.amount(),
        }
    }
}
