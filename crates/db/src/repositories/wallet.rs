//! Wallet repository for single-row wallet operations.
//!
//! Balance changes go through `LedgerRepository`; this repository covers
//! lookup, creation, renaming and deletion.

use artha_core::wallet::{WalletError, WalletSnapshot, validate_wallet_name, wallet_name_or_default};
use artha_shared::AppError;
use artha_shared::types::{UserId, WalletId};
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use tracing::info;

use crate::entities::wallets;

/// Error types for wallet repository operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletRepoError {
    /// Wallet rule violated.
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<WalletRepoError> for AppError {
    fn from(e: WalletRepoError) -> Self {
        match e {
            WalletRepoError::Wallet(wallet) => wallet.into(),
            WalletRepoError::Database(db) => Self::Persistence(db.to_string()),
        }
    }
}

/// Wallet repository.
#[derive(Debug, Clone)]
pub struct WalletRepository {
    db: DatabaseConnection,
}

impl WalletRepository {
    /// Creates a new wallet repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the wallet owned by a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_owner(&self, user_id: UserId) -> Result<Option<wallets::Model>, DbErr> {
        wallets::Entity::find()
            .filter(wallets::Column::OwnerId.eq(user_id.into_inner()))
            .one(&self.db)
            .await
    }

    /// Returns the public view of a user's wallet.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::NotFound` if the user has no wallet.
    pub async fn snapshot(&self, user_id: UserId) -> Result<WalletSnapshot, WalletRepoError> {
        self.find_by_owner(user_id)
            .await?
            .map(|w| w.snapshot())
            .ok_or_else(|| WalletError::NotFound.into())
    }

    /// Creates an empty wallet for a user who has none.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::AlreadyExists` if the user already has a wallet
    /// and `WalletError::InvalidName` for a rejected name.
    pub async fn create(
        &self,
        user_id: UserId,
        name: Option<&str>,
    ) -> Result<wallets::Model, WalletRepoError> {
        let wallet_name = wallet_name_or_default(name)?;

        if self.find_by_owner(user_id).await?.is_some() {
            return Err(WalletError::AlreadyExists.into());
        }

        let now = chrono::Utc::now().into();
        let wallet = wallets::ActiveModel {
            id: Set(WalletId::new().into_inner()),
            owner_id: Set(user_id.into_inner()),
            wallet_name: Set(wallet_name),
            balance: Set(Decimal::ZERO),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => WalletError::AlreadyExists.into(),
            _ => WalletRepoError::Database(e),
        })?;

        info!(user_id = %user_id, wallet_id = %wallet.id, "wallet created");
        Ok(wallet)
    }

    /// Renames a user's wallet, returning the stored name.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidName` before touching the store and
    /// `WalletError::NotFound` if the user has no wallet.
    pub async fn rename(&self, user_id: UserId, new_name: &str) -> Result<String, WalletRepoError> {
        let name = validate_wallet_name(new_name)?;

        let result = wallets::Entity::update_many()
            .col_expr(wallets::Column::WalletName, Expr::value(name.clone()))
            .col_expr(wallets::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(wallets::Column::OwnerId.eq(user_id.into_inner()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(WalletError::NotFound.into());
        }
        Ok(name)
    }

    /// Deletes a user's wallet.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::NotFound` if the user has no wallet.
    pub async fn delete(&self, user_id: UserId) -> Result<(), WalletRepoError> {
        let result = wallets::Entity::delete_many()
            .filter(wallets::Column::OwnerId.eq(user_id.into_inner()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(WalletError::NotFound.into());
        }

        info!(user_id = %user_id, "wallet deleted");
        Ok(())
    }
}
