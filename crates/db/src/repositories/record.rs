//! Record repository for listing and deleting expense records.
//!
//! Records are created only through `LedgerRepository`. Deleting a record
//! never refunds the wallet.

use artha_shared::AppError;
use artha_shared::types::{PageRequest, PageResponse, RecordId, UserId};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use tracing::info;

use crate::entities::records;

/// Error types for record operations.
#[derive(Debug, thiserror::Error)]
pub enum RecordRepoError {
    /// Record not found.
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    /// Record belongs to another user.
    #[error("You are not authorized to delete record {0}")]
    Forbidden(RecordId),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<RecordRepoError> for AppError {
    fn from(e: RecordRepoError) -> Self {
        match e {
            RecordRepoError::NotFound(_) => Self::NotFound(e.to_string()),
            RecordRepoError::Forbidden(_) => Self::Forbidden(e.to_string()),
            RecordRepoError::Database(db) => Self::Persistence(db.to_string()),
        }
    }
}

/// Record repository.
#[derive(Debug, Clone)]
pub struct RecordRepository {
    db: DatabaseConnection,
}

impl RecordRepository {
    /// Creates a new record repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's records, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResponse<records::Model>, DbErr> {
        let page = page.normalized();
        let paginator = records::Entity::find()
            .filter(records::Column::OwnerId.eq(user_id.into_inner()))
            .order_by_desc(records::Column::CreatedAt)
            .order_by_desc(records::Column::Id)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(u64::from(page.page - 1)).await?;

        Ok(PageResponse::new(items, page.page, page.per_page, total))
    }

    /// Finds a record by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: RecordId) -> Result<Option<records::Model>, DbErr> {
        records::Entity::find_by_id(id.into_inner()).one(&self.db).await
    }

    /// Deletes one record owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `RecordRepoError::NotFound` if no such record exists and
    /// `RecordRepoError::Forbidden` if another user owns it.
    pub async fn delete(&self, user_id: UserId, record_id: RecordId) -> Result<(), RecordRepoError> {
        let record = self
            .find_by_id(record_id)
            .await?
            .ok_or(RecordRepoError::NotFound(record_id))?;

        if record.owner_id != user_id.into_inner() {
            return Err(RecordRepoError::Forbidden(record_id));
        }

        record.delete(&self.db).await?;
        info!(user_id = %user_id, record_id = %record_id, "record deleted");
        Ok(())
    }

    /// Deletes every record a user owns, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete_all(&self, user_id: UserId) -> Result<u64, DbErr> {
        let result = records::Entity::delete_many()
            .filter(records::Column::OwnerId.eq(user_id.into_inner()))
            .exec(&self.db)
            .await?;

        info!(user_id = %user_id, deleted = result.rows_affected, "records deleted");
        Ok(result.rows_affected)
    }
}
