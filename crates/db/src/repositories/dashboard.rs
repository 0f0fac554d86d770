//! Dashboard repository: loads a user's records and wallet and hands them
//! to the aggregation in `artha_core::dashboard`.

use artha_core::dashboard::{DashboardService, MonthlyTotal, RecordFacts, RecordsDashboard};
use artha_shared::AppError;
use artha_shared::types::UserId;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::entities::{records, wallets};

/// Error types for dashboard operations.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<DashboardError> for AppError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::Database(db) => Self::Persistence(db.to_string()),
        }
    }
}

/// Dashboard repository.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    db: DatabaseConnection,
}

impl DashboardRepository {
    /// Creates a new dashboard repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the records dashboard. A user without a wallet gets
    /// `user_wallet: None` rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn records_dashboard(&self, user_id: UserId) -> Result<RecordsDashboard, DashboardError> {
        let wallet = wallets::Entity::find()
            .filter(wallets::Column::OwnerId.eq(user_id.into_inner()))
            .one(&self.db)
            .await?;
        let facts = self.facts(user_id).await?;

        Ok(DashboardService::summarize(
            &facts,
            wallet.map(|w| w.snapshot()),
        ))
    }

    /// Month-by-month spending, ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn annual_records(&self, user_id: UserId) -> Result<Vec<MonthlyTotal>, DashboardError> {
        let facts = self.facts(user_id).await?;
        Ok(DashboardService::annual(&facts))
    }

    async fn facts(&self, user_id: UserId) -> Result<Vec<RecordFacts>, DbErr> {
        let records = records::Entity::find()
            .filter(records::Column::OwnerId.eq(user_id.into_inner()))
            .all(&self.db)
            .await?;

        Ok(records.iter().map(records::Model::facts).collect())
    }
}
