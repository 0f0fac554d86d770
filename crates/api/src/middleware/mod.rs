//! Request middleware.

pub mod auth;

pub use auth::{ACCESS_TOKEN_COOKIE, AuthUser, REFRESH_TOKEN_COOKIE, auth_middleware};
