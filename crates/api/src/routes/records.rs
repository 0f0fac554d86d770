//! Expense record routes.

use axum::{
    Router,
    extract::State,
    routing::{delete, get, post},
};
use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    AppState,
    error::ApiError,
    extractors::{ApiJson, ApiPath, ApiQuery},
    middleware::AuthUser,
    response::ApiResponse,
};
use artha_core::ledger::{ExpenseInput, ExpensePlan};
use artha_core::record::{Category, PaymentMethod};
use artha_db::{LedgerRepository, RecordRepository, entities::records};
use artha_shared::types::{Amount, PageRequest, PageResponse, RecordId};

/// Creates the record routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/records", get(list_records))
        .route("/records/create", post(create_record))
        .route("/records/delete/{record_id}", delete(delete_record))
        .route("/records/delete-all", delete(delete_all_records))
}

/// A stored record as returned to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    /// Record ID.
    pub id: Uuid,
    /// Owning user.
    pub owner: Uuid,
    /// When the expense happened (RFC 3339).
    pub date: String,
    /// Title.
    pub title: String,
    /// Category.
    pub category: Category,
    /// Amount with two decimal places.
    pub amount: Amount,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Created at timestamp (RFC 3339).
    pub created_at: String,
    /// Updated at timestamp (RFC 3339).
    pub updated_at: String,
}

impl From<records::Model> for RecordResponse {
    fn from(record: records::Model) -> Self {
        Self {
            amount: record.amount(),
            id: record.id,
            owner: record.owner_id,
            date: record.date.to_rfc3339(),
            title: record.title,
            category: record.category.into(),
            payment_method: record.payment_method.into(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// GET /records?page=&perPage=
async fn list_records(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(page): ApiQuery<PageRequest>,
) -> Result<ApiResponse<PageResponse<RecordResponse>>, ApiError> {
    let page = RecordRepository::new((*state.db).clone())
        .list(auth.user_id(), page)
        .await?;
    Ok(ApiResponse::ok(
        page.map(RecordResponse::from),
        "Records fetched successfully",
    ))
}

/// POST /records/create
///
/// `Wallet` payments are deducted from the balance in the same store
/// transaction that inserts the record.
async fn create_record(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(input): ApiJson<ExpenseInput>,
) -> Result<ApiResponse<Value>, ApiError> {
    let plan = ExpensePlan::from_input(auth.user_id(), &input)?;
    let record = LedgerRepository::new((*state.db).clone())
        .create_expense_record(&plan)
        .await?;

    Ok(ApiResponse::created(
        json!({ "record": RecordResponse::from(record) }),
        "Record created successfully",
    ))
}

/// DELETE /records/delete/{record_id}
async fn delete_record(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(record_id): ApiPath<String>,
) -> Result<ApiResponse<Value>, ApiError> {
    let record_id: RecordId = record_id
        .parse()
        .map_err(|_| ApiError::invalid_input("Invalid record id"))?;

    RecordRepository::new((*state.db).clone())
        .delete(auth.user_id(), record_id)
        .await?;

    Ok(ApiResponse::ok(json!({}), "Record deleted successfully"))
}

/// DELETE /records/delete-all
async fn delete_all_records(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<ApiResponse<Value>, ApiError> {
    let deleted = RecordRepository::new((*state.db).clone())
        .delete_all(auth.user_id())
        .await?;

    Ok(ApiResponse::ok(
        json!({ "deleted": deleted }),
        "All records deleted successfully",
    ))
}
