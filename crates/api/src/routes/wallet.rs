//! Wallet routes.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    routing::{get, patch, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    AppState,
    error::ApiError,
    extractors::{ApiJson, optional_json},
    middleware::AuthUser,
    response::ApiResponse,
};
use artha_core::wallet::{WalletError, WalletSnapshot};
use artha_db::{LedgerRepository, WalletRepository};
use artha_shared::types::Amount;

/// Creates the wallet routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/wallet", get(get_wallet))
        .route("/wallet/create-wallet", post(create_wallet))
        .route("/wallet/add-balance", patch(add_balance))
        .route("/wallet/change-wallet-name", patch(change_wallet_name))
        .route("/wallet/delete-wallet", post(delete_wallet))
}

/// Body for creating a wallet; the name defaults to "Wallet".
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletRequest {
    /// Optional wallet name.
    pub wallet_name: Option<String>,
}

/// Body for adding to the balance.
#[derive(Debug, Deserialize)]
pub struct AddBalanceRequest {
    /// Amount to deposit; must be greater than zero.
    pub amount: Option<Decimal>,
}

/// Body for renaming a wallet.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeWalletNameRequest {
    /// New wallet name.
    #[serde(default)]
    pub wallet_name: String,
}

/// GET /wallet
async fn get_wallet(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<ApiResponse<WalletSnapshot>, ApiError> {
    let wallet = WalletRepository::new((*state.db).clone())
        .snapshot(auth.user_id())
        .await?;
    Ok(ApiResponse::ok(wallet, "Wallet fetched successfully"))
}

/// POST /wallet/create-wallet
async fn create_wallet(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Bytes,
) -> Result<ApiResponse<WalletSnapshot>, ApiError> {
    let request: CreateWalletRequest = optional_json(&body)?;
    let wallet = WalletRepository::new((*state.db).clone())
        .create(auth.user_id(), request.wallet_name.as_deref())
        .await?;
    Ok(ApiResponse::created(wallet.snapshot(), "Wallet created successfully"))
}

/// PATCH /wallet/add-balance
async fn add_balance(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(request): ApiJson<AddBalanceRequest>,
) -> Result<ApiResponse<Value>, ApiError> {
    let raw = request
        .amount
        .ok_or_else(|| ApiError::invalid_input("Amount is required"))?;
    let amount = Amount::positive(raw).map_err(|e| WalletError::InvalidAmount(e.to_string()))?;

    let balance = LedgerRepository::new((*state.db).clone())
        .add_balance(auth.user_id(), amount)
        .await?;

    Ok(ApiResponse::ok(
        json!({ "balance": balance }),
        "Balance added successfully",
    ))
}

/// PATCH /wallet/change-wallet-name
async fn change_wallet_name(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(request): ApiJson<ChangeWalletNameRequest>,
) -> Result<ApiResponse<Value>, ApiError> {
    let wallet_name = WalletRepository::new((*state.db).clone())
        .rename(auth.user_id(), &request.wallet_name)
        .await?;

    Ok(ApiResponse::ok(
        json!({ "walletName": wallet_name }),
        "Wallet name changed successfully",
    ))
}

/// POST /wallet/delete-wallet
async fn delete_wallet(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<ApiResponse<Value>, ApiError> {
    WalletRepository::new((*state.db).clone())
        .delete(auth.user_id())
        .await?;
    Ok(ApiResponse::ok(json!({}), "Wallet deleted successfully"))
}
