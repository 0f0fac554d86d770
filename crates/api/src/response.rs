//! Success envelope for API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// A payload rendered as `{statusCode, data, message, success: true}`.
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    data: T,
    message: &'static str,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK.
    pub fn ok(data: T, message: &'static str) -> Self {
        Self {
            status: StatusCode::OK,
            data,
            message,
        }
    }

    /// 201 Created.
    pub fn created(data: T, message: &'static str) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
            message,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a, T> {
    status_code: u16,
    data: &'a T,
    message: &'static str,
    success: bool,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let body = Envelope {
            status_code: self.status.as_u16(),
            data: &self.data,
            message: self.message,
            success: true,
        };
        (self.status, Json(body)).into_response()
    }
}
