//! Initial schema: users, wallets and records.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Username).string_len(64).not_null().unique_key())
                    .col(ColumnDef::new(Users::Email).string_len(255).not_null().unique_key())
                    .col(ColumnDef::new(Users::FullName).string_len(255).not_null())
                    .col(ColumnDef::new(Users::Avatar).text().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).text().not_null())
                    .col(ColumnDef::new(Users::RefreshTokenHash).string_len(64).null())
                    .col(timestamp(Users::CreatedAt))
                    .col(timestamp(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Wallets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Wallets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Wallets::OwnerId).uuid().not_null().unique_key())
                    .col(
                        ColumnDef::new(Wallets::WalletName)
                            .string_len(64)
                            .not_null()
                            .default("Wallet"),
                    )
                    .col(
                        ColumnDef::new(Wallets::Balance)
                            .decimal_len(16, 2)
                            .not_null()
                            .default(0)
                            .check(Expr::col(Wallets::Balance).gte(0)),
                    )
                    .col(timestamp(Wallets::CreatedAt))
                    .col(timestamp(Wallets::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wallets_owner")
                            .from(Wallets::Table, Wallets::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Records::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Records::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Records::OwnerId).uuid().not_null())
                    .col(
                        ColumnDef::new(Records::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Records::Title).text().not_null())
                    .col(ColumnDef::new(Records::Category).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Records::Amount)
                            .decimal_len(16, 2)
                            .not_null()
                            .check(Expr::col(Records::Amount).gte(0)),
                    )
                    .col(ColumnDef::new(Records::PaymentMethod).string_len(32).not_null())
                    .col(timestamp(Records::CreatedAt))
                    .col(timestamp(Records::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_records_owner")
                            .from(Records::Table, Records::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is newest-first per owner
        manager
            .create_index(
                Index::create()
                    .name("idx_records_owner_created")
                    .table(Records::Table)
                    .col(Records::OwnerId)
                    .col(Records::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_records_owner_date")
                    .table(Records::Table)
                    .col(Records::OwnerId)
                    .col(Records::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Records::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Wallets::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await
    }
}

fn timestamp<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    FullName,
    Avatar,
    PasswordHash,
    RefreshTokenHash,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Wallets {
    Table,
    Id,
    OwnerId,
    WalletName,
    Balance,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Records {
    Table,
    Id,
    OwnerId,
    Date,
    Title,
    Category,
    Amount,
    PaymentMethod,
    CreatedAt,
    UpdatedAt,
}
