//! `SeaORM` Entity for wallets table.

use artha_core::wallet::WalletSnapshot;
use artha_shared::types::Amount;
use sea_orm::entity::prelude::*;

/// One wallet per user. The schema rejects a negative balance.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub owner_id: Uuid,
    pub wallet_name: String,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    /// Raw stored balance; read it through [`Model::balance`].
    pub balance: Decimal,
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
    /// Current balance, normalized to cents.
    #[must_use]
    pub fn balance(&self) -> Amount {
        Amount::from_stored(self.balance)
    }

    /// Public view of the wallet.
    #[must_use]
    pub fn snapshot(&self) -> WalletSnapshot {
        WalletSnapshot {
            wallet_name: self.wallet_name.clone(),
            balance: self.balance(),
        }
    }
}
