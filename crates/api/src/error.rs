//! Error envelope for API responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use artha_core::auth::{CredentialError, PasswordError};
use artha_core::ledger::LedgerError;
use artha_core::record::RecordError;
use artha_core::wallet::WalletError;
use artha_db::repositories::{DashboardError, RecordRepoError, UserError, WalletRepoError};
use artha_shared::{AppError, JwtError};

/// An `AppError` rendered as `{statusCode, error, message, success, errors}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Shorthand for a 401.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self(AppError::Unauthorized(message.into()))
    }

    /// Shorthand for a 400.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self(AppError::InvalidInput(message.into()))
    }

    /// Shorthand for a 404.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self(AppError::NotFound(message.into()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.is_server_error() {
            error!(error = %err, code = err.error_code(), "request failed");
        }

        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = json!({
            "statusCode": status.as_u16(),
            "error": err.error_code(),
            "message": err.public_message(),
            "success": false,
            "errors": [],
        });

        (status, Json(body)).into_response()
    }
}

macro_rules! into_api_error {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for ApiError {
                fn from(e: $source) -> Self {
                    Self(AppError::from(e))
                }
            }
        )+
    };
}

into_api_error!(
    CredentialError,
    PasswordError,
    LedgerError,
    RecordError,
    WalletError,
    UserError,
    WalletRepoError,
    RecordRepoError,
    DashboardError,
    JwtError,
);

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self(AppError::Persistence(e.to_string()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_input(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::invalid_input(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::invalid_input(rejection.body_text())
    }
}
