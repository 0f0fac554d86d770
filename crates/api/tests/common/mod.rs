//! Router fixtures for HTTP tests.

#![allow(dead_code)]

use artha_api::{AppState, create_router};
use artha_db::connect_in_memory;
use artha_shared::config::CorsConfig;
use artha_shared::{JwtConfig, JwtService};
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Router over a fresh, migrated in-memory database.
pub async fn app() -> Router {
    let db = connect_in_memory()
        .await
        .expect("Failed to open in-memory database");
    let state = AppState::new(db, JwtService::new(JwtConfig::default()), false);
    create_router(state, &CorsConfig::default())
}

/// A decoded response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// The envelope's `data` field.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// Every `Set-Cookie` header value.
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }
}

/// Sends one request through the router.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(format!("/api/v1{uri}"));
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Registers `username` and logs in, returning the login response.
pub async fn register_and_login(app: &Router, username: &str) -> TestResponse {
    let registered = send(
        app,
        Method::POST,
        "/user/register",
        None,
        Some(json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "fullName": "Test User",
            "password": "secret-password",
        })),
    )
    .await;
    assert_eq!(registered.status, StatusCode::CREATED, "{}", registered.body);

    let login = send(
        app,
        Method::POST,
        "/user/login",
        None,
        Some(json!({ "username": username, "password": "secret-password" })),
    )
    .await;
    assert_eq!(login.status, StatusCode::OK, "{}", login.body);
    login
}

/// Registers and logs in, returning only the access token.
pub async fn access_token(app: &Router, username: &str) -> String {
    let login = register_and_login(app, username).await;
    login.data()["accessToken"].as_str().unwrap().to_string()
}
