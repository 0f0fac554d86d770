//! User repository for database operations.
//!
//! Users are created together with their wallet. Refresh tokens are stored
//! only as SHA-256 hashes.

use artha_core::auth::{NewUser, ProfileChanges};
use artha_core::wallet::DEFAULT_WALLET_NAME;
use artha_shared::AppError;
use artha_shared::types::{UserId, WalletId};
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, Set, SqlErr, TransactionTrait,
};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::entities::{users, wallets};

/// Error types for user operations.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// Username or email belongs to another user.
    #[error("Username or email already exists")]
    Conflict,

    /// User not found.
    #[error("User not found")]
    NotFound,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::Conflict => Self::Conflict(e.to_string()),
            UserError::NotFound => Self::NotFound(e.to_string()),
            UserError::Database(db) => Self::Persistence(db.to_string()),
        }
    }
}

/// Maps a lost unique-index race to `Conflict`.
fn conflict_or_db(e: DbErr) -> UserError {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        UserError::Conflict
    } else {
        UserError::Database(e)
    }
}

/// User repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Hashes a refresh token for storage.
    #[must_use]
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Creates a user and an empty default wallet in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `UserError::Conflict` if the username or email is taken,
    /// including when a concurrent registration wins the unique index.
    pub async fn create_with_wallet(
        &self,
        new_user: &NewUser,
        password_hash: &str,
    ) -> Result<users::Model, UserError> {
        if self
            .username_or_email_taken(Some(&new_user.username), Some(&new_user.email), None)
            .await?
        {
            return Err(UserError::Conflict);
        }

        let txn = self.db.begin().await?;
        let now = chrono::Utc::now().into();

        let user = users::ActiveModel {
            id: Set(UserId::new().into_inner()),
            username: Set(new_user.username.clone()),
            email: Set(new_user.email.clone()),
            full_name: Set(new_user.full_name.clone()),
            avatar: Set(new_user.avatar.clone()),
            password_hash: Set(password_hash.to_string()),
            refresh_token_hash: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(conflict_or_db)?;

        wallets::ActiveModel {
            id: Set(WalletId::new().into_inner()),
            owner_id: Set(user.id),
            wallet_name: Set(DEFAULT_WALLET_NAME.to_string()),
            balance: Set(Decimal::ZERO),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(user_id = %user.id, username = %user.username, "user registered with wallet");
        Ok(user)
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: UserId) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id.into_inner()).one(&self.db).await
    }

    /// Finds a user by username or email. Either may be omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_login(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<users::Model>, DbErr> {
        let Some(condition) = login_condition(username, email) else {
            return Ok(None);
        };

        users::Entity::find().filter(condition).one(&self.db).await
    }

    /// Checks if a username or email is already registered, optionally
    /// ignoring one user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn username_or_email_taken(
        &self,
        username: Option<&str>,
        email: Option<&str>,
        except: Option<UserId>,
    ) -> Result<bool, DbErr> {
        let Some(condition) = login_condition(username, email) else {
            return Ok(false);
        };

        let mut query = users::Entity::find().filter(condition);
        if let Some(except) = except {
            query = query.filter(users::Column::Id.ne(except.into_inner()));
        }

        Ok(query.count(&self.db).await? > 0)
    }

    /// Replaces (or clears) the stored refresh token.
    ///
    /// # Errors
    ///
    /// Returns `UserError::NotFound` if the user does not exist.
    pub async fn set_refresh_token(
        &self,
        user_id: UserId,
        token: Option<&str>,
    ) -> Result<(), UserError> {
        let result = users::Entity::update_many()
            .col_expr(
                users::Column::RefreshTokenHash,
                Expr::value(token.map(Self::hash_token)),
            )
            .col_expr(users::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(users::Column::Id.eq(user_id.into_inner()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound);
        }
        Ok(())
    }

    /// Swaps `presented` for `replacement` if `presented` is the token
    /// currently on record. Returns false when it is not, so a rotated token
    /// cannot be replayed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn rotate_refresh_token(
        &self,
        user_id: UserId,
        presented: &str,
        replacement: &str,
    ) -> Result<bool, DbErr> {
        let result = users::Entity::update_many()
            .col_expr(
                users::Column::RefreshTokenHash,
                Expr::value(Self::hash_token(replacement)),
            )
            .col_expr(users::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(users::Column::Id.eq(user_id.into_inner()))
            .filter(users::Column::RefreshTokenHash.eq(Self::hash_token(presented)))
            .exec(&self.db)
            .await?;

        let rotated = result.rows_affected == 1;
        debug!(user_id = %user_id, rotated, "refresh token rotation");
        Ok(rotated)
    }

    /// Replaces the password hash.
    ///
    /// # Errors
    ///
    /// Returns `UserError::NotFound` if the user does not exist.
    pub async fn update_password(
        &self,
        user_id: UserId,
        password_hash: &str,
    ) -> Result<(), UserError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::PasswordHash, Expr::value(password_hash))
            .col_expr(users::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(users::Column::Id.eq(user_id.into_inner()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound);
        }
        Ok(())
    }

    /// Applies profile changes.
    ///
    /// # Errors
    ///
    /// Returns `UserError::Conflict` if the new username or email belongs to
    /// another user, `UserError::NotFound` if the user does not exist.
    pub async fn update_profile(
        &self,
        user_id: UserId,
        changes: &ProfileChanges,
    ) -> Result<users::Model, UserError> {
        if self
            .username_or_email_taken(
                changes.username.as_deref(),
                changes.email.as_deref(),
                Some(user_id),
            )
            .await?
        {
            return Err(UserError::Conflict);
        }

        let user = self.find_by_id(user_id).await?.ok_or(UserError::NotFound)?;

        let mut active: users::ActiveModel = user.into();
        if let Some(username) = &changes.username {
            active.username = Set(username.clone());
        }
        if let Some(email) = &changes.email {
            active.email = Set(email.clone());
        }
        if let Some(full_name) = &changes.full_name {
            active.full_name = Set(full_name.clone());
        }
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(&self.db).await.map_err(conflict_or_db)
    }
}

fn login_condition(username: Option<&str>, email: Option<&str>) -> Option<Condition> {
    if username.is_none() && email.is_none() {
        return None;
    }

    let mut condition = Condition::any();
    if let Some(username) = username {
        condition = condition.add(users::Column::Username.eq(username));
    }
    if let Some(email) = email {
        condition = condition.add(users::Column::Email.eq(email));
    }
    Some(condition)
}
