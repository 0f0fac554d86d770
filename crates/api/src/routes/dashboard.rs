//! Dashboard routes.

use axum::{Router, extract::State, routing::get};
use serde_json::{Value, json};

use crate::{AppState, error::ApiError, middleware::AuthUser, response::ApiResponse};
use artha_core::dashboard::RecordsDashboard;
use artha_db::DashboardRepository;

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(records_dashboard))
        .route("/dashboard/annual", get(annual_records))
}

/// GET /dashboard
async fn records_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<ApiResponse<RecordsDashboard>, ApiError> {
    let dashboard = DashboardRepository::new((*state.db).clone())
        .records_dashboard(auth.user_id())
        .await?;
    Ok(ApiResponse::ok(dashboard, "Dashboard fetched successfully"))
}

/// GET /dashboard/annual
async fn annual_records(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<ApiResponse<Value>, ApiError> {
    let annual = DashboardRepository::new((*state.db).clone())
        .annual_records(auth.user_id())
        .await?;
    Ok(ApiResponse::ok(
        json!({ "annualRecords": annual }),
        "Annual records fetched successfully",
    ))
}
