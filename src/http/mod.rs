use crate::domain::ErrorRecord;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

mod handlers;
mod models;
mod routes;

pub use routes::routes;

/// A JSON `{ "error": ... }` body paired with a status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    pub fn bad_request(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    pub fn internal(message: &'static str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorRecord::new(self.message))).into_response()
    }
}
