//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth_middleware};

pub mod dashboard;
pub mod health;
pub mod records;
pub mod users;
pub mod wallet;

/// Creates the API router; everything except health, register, login and
/// token refresh sits behind the auth middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(users::protected_routes())
        .merge(records::routes())
        .merge(wallet::routes())
        .merge(dashboard::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(health::routes())
        .merge(users::public_routes())
        .merge(protected_routes)
}
