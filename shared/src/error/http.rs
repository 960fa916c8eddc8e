//! Axum integration for [`AppError`]

use super::types::{AppError, ErrorBody};
use axum::Json;
use axum::response::{IntoResponse, Response};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let body = ErrorBody::from(&self);
        (status, Json(body)).into_response()
    }
}
