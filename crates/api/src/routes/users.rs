//! User routes: registration, login, token refresh and profile management.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    routing::{get, patch, post},
};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde_json::{Value, json};
use tracing::info;

use crate::{
    AppState,
    error::ApiError,
    extractors::{ApiJson, optional_json},
    middleware::{ACCESS_TOKEN_COOKIE, AuthUser, REFRESH_TOKEN_COOKIE},
    response::ApiResponse,
};
use artha_core::auth::{NewUser, ProfileChanges, hash_password, verify_password};
use artha_db::{UserRepository, entities::users};
use artha_shared::TokenPair;
use artha_shared::auth::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RefreshRequest, RegisterRequest,
    UpdateProfileRequest, UserInfo,
};
use artha_shared::types::UserId;

/// Routes reachable without an access token.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/user/register", post(register))
        .route("/user/login", post(login))
        .route("/user/refresh-token", post(refresh_token))
}

/// Routes behind the auth middleware.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/user/logout", post(logout))
        .route("/user/current-user", get(current_user))
        .route("/user/change-password", post(change_password))
        .route("/user/update-profile", patch(update_profile))
}

fn auth_cookie(name: &'static str, value: String, state: &AppState) -> Cookie<'static> {
    let max_age = time::Duration::seconds(state.jwt_service.refresh_token_expires_secs());
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .secure(state.cookie_secure)
        .same_site(SameSite::None)
        .max_age(max_age)
        .build()
}

/// Same attributes as [`auth_cookie`], already expired, so the browser drops
/// it whether or not the request carried it.
fn expired_cookie(name: &'static str, state: &AppState) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .http_only(true)
        .secure(state.cookie_secure)
        .same_site(SameSite::None)
        .max_age(time::Duration::ZERO)
        .expires(time::OffsetDateTime::UNIX_EPOCH)
        .build()
}

fn with_auth_cookies(jar: CookieJar, state: &AppState, tokens: &TokenPair) -> CookieJar {
    jar.add(auth_cookie(ACCESS_TOKEN_COOKIE, tokens.access_token.clone(), state))
        .add(auth_cookie(REFRESH_TOKEN_COOKIE, tokens.refresh_token.clone(), state))
}

fn without_auth_cookies(jar: CookieJar, state: &AppState) -> CookieJar {
    jar.add(expired_cookie(ACCESS_TOKEN_COOKIE, state))
        .add(expired_cookie(REFRESH_TOKEN_COOKIE, state))
}

fn access_token_for(state: &AppState, user: &users::Model) -> Result<String, ApiError> {
    Ok(state.jwt_service.generate_access_token(
        user.id,
        &user.username,
        &user.email,
        &user.full_name,
    )?)
}

fn identifier(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

async fn load_user(repo: &UserRepository, user_id: UserId) -> Result<users::Model, ApiError> {
    repo.find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User does not exist"))
}

/// POST /user/register
async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> Result<ApiResponse<UserInfo>, ApiError> {
    let new_user = NewUser::validate(
        &payload.username,
        &payload.email,
        &payload.full_name,
        &payload.password,
        payload.avatar.as_deref(),
    )?;
    let password_hash = hash_password(&new_user.password)?;

    let user = UserRepository::new((*state.db).clone())
        .create_with_wallet(&new_user, &password_hash)
        .await?;

    info!(user_id = %user.id, "user registered");
    Ok(ApiResponse::created(user.info(), "User registered successfully"))
}

/// POST /user/login
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<(CookieJar, ApiResponse<LoginResponse>), ApiError> {
    let username = identifier(payload.username.as_deref());
    let email = identifier(payload.email.as_deref());
    if username.is_none() && email.is_none() {
        return Err(ApiError::invalid_input("Username or email is required"));
    }

    let repo = UserRepository::new((*state.db).clone());
    let user = repo
        .find_by_login(username.as_deref(), email.as_deref())
        .await?
        .ok_or_else(|| ApiError::not_found("User does not exist"))?;

    if !verify_password(&payload.password, &user.password_hash)? {
        info!(user_id = %user.id, "failed login attempt");
        return Err(ApiError::unauthorized("Invalid user credentials"));
    }

    let tokens = TokenPair::new(
        access_token_for(&state, &user)?,
        state.jwt_service.generate_refresh_token(user.id)?,
    );
    repo.set_refresh_token(user.id.into(), Some(&tokens.refresh_token))
        .await?;

    info!(user_id = %user.id, "user logged in");
    let jar = with_auth_cookies(jar, &state, &tokens);
    let response = LoginResponse {
        user: user.info(),
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
    };
    Ok((jar, ApiResponse::ok(response, "User logged in successfully")))
}

/// POST /user/refresh-token
///
/// The presented token must be the one currently stored for the user; it is
/// swapped for the new one in a single conditional update, so a used token
/// cannot be replayed.
async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, ApiResponse<TokenPair>), ApiError> {
    let presented = match jar.get(REFRESH_TOKEN_COOKIE) {
        Some(cookie) => Some(cookie.value().to_string()),
        None => optional_json::<RefreshRequest>(&body)?.refresh_token,
    }
    .filter(|t| !t.is_empty())
    .ok_or_else(|| ApiError::unauthorized("Unauthorized request"))?;

    let claims = state
        .jwt_service
        .validate_refresh_token(&presented)
        .map_err(|_| ApiError::unauthorized("Invalid refresh token"))?;

    let repo = UserRepository::new((*state.db).clone());
    let user = repo
        .find_by_id(claims.user_id().into())
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid refresh token"))?;

    let replacement = state.jwt_service.generate_refresh_token(user.id)?;
    if !repo
        .rotate_refresh_token(user.id.into(), &presented, &replacement)
        .await?
    {
        info!(user_id = %user.id, "rejected stale refresh token");
        return Err(ApiError::unauthorized("Refresh token is expired or used"));
    }

    let tokens = TokenPair::new(access_token_for(&state, &user)?, replacement);
    let jar = with_auth_cookies(jar, &state, &tokens);
    Ok((jar, ApiResponse::ok(tokens, "Access token refreshed")))
}

/// POST /user/logout
async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> Result<(CookieJar, ApiResponse<Value>), ApiError> {
    UserRepository::new((*state.db).clone())
        .set_refresh_token(auth.user_id(), None)
        .await?;

    info!(user_id = %auth.user_id(), "user logged out");
    Ok((
        without_auth_cookies(jar, &state),
        ApiResponse::ok(json!({}), "User logged out"),
    ))
}

/// GET /user/current-user
async fn current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<ApiResponse<UserInfo>, ApiError> {
    let repo = UserRepository::new((*state.db).clone());
    let user = load_user(&repo, auth.user_id()).await?;
    Ok(ApiResponse::ok(user.info(), "Current user fetched successfully"))
}

/// POST /user/change-password
async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(payload): ApiJson<ChangePasswordRequest>,
) -> Result<ApiResponse<Value>, ApiError> {
    let repo = UserRepository::new((*state.db).clone());
    let user = load_user(&repo, auth.user_id()).await?;

    if !verify_password(&payload.current_password, &user.password_hash)? {
        return Err(ApiError::unauthorized("Invalid current password"));
    }

    let password_hash = hash_password(&payload.new_password)?;
    repo.update_password(auth.user_id(), &password_hash).await?;

    info!(user_id = %user.id, "password changed");
    Ok(ApiResponse::ok(json!({}), "Password changed successfully"))
}

/// PATCH /user/update-profile
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> Result<ApiResponse<UserInfo>, ApiError> {
    let changes = ProfileChanges::validate(
        payload.username.as_deref(),
        payload.email.as_deref(),
        payload.full_name.as_deref(),
    )?;

    let user = UserRepository::new((*state.db).clone())
        .update_profile(auth.user_id(), &changes)
        .await?;

    info!(user_id = %user.id, "profile updated");
    Ok(ApiResponse::ok(user.info(), "Account details updated successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_normalizes() {
        assert_eq!(identifier(Some("  Asha ")), Some("asha".to_string()));
        assert_eq!(identifier(Some("   ")), None);
        assert_eq!(identifier(None), None);
    }
}
