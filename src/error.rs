use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt::Debug;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self.code {
            1..=99 => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.message,
        }));

        (status, body).into_response()
    }
}

// Messages double as the client-facing bodies, so they carry no internal
// detail; the detail is logged where the error is constructed.

pub fn database_error<T: Debug>(err: T) -> Error {
    tracing::error!("database error: {:?}", err);

    Error {
        code: 2,
        message: "database error".into(),
    }
}

pub fn fetch_failed_error() -> Error {
    Error {
        code: 10,
        message: "Failed to fetch destinations".into(),
    }
}

pub fn create_failed_error() -> Error {
    Error {
        code: 11,
        message: "Failed to add destination".into(),
    }
}

pub fn missing_fields_error() -> Error {
    Error {
        code: 100,
        message: "All fields are required".into(),
    }
}
