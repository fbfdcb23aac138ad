//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
    #[error("unknown store backend: {0} (expected postgres or memory)")]
    UnknownBackend(String),
}

/// Failures raised by a [`crate::store::PlantStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Plant with name '{0}' already exists")]
    DuplicateName(String),
    #[error("Plant not found: {0}")]
    NotFound(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("validation: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: &'static str,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Store(StoreError::DuplicateName(_)) => (StatusCode::BAD_REQUEST, "already_exists"),
            AppError::Store(StoreError::NotFound(_)) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Store(StoreError::Db(_)) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let detail = match &self {
            AppError::Store(StoreError::Db(e)) => {
                tracing::error!(error = %e, "database failure");
                "internal database error".to_string()
            }
            AppError::Store(e) => e.to_string(),
            AppError::Validation(msg) | AppError::BadRequest(msg) | AppError::PayloadTooLarge(msg) => {
                msg.clone()
            }
        };
        (status, Json(ErrorBody { detail, code })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_their_status() {
        let cases = [
            (AppError::from(StoreError::DuplicateName("Fern".into())), StatusCode::BAD_REQUEST, "already_exists"),
            (AppError::from(StoreError::NotFound("id 1".into())), StatusCode::NOT_FOUND, "not_found"),
            (AppError::Validation("name is required".into()), StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            (AppError::BadRequest("bad json".into()), StatusCode::BAD_REQUEST, "bad_request"),
            (
                AppError::PayloadTooLarge("length limit exceeded".into()),
                StatusCode::PAYLOAD_TOO_LARGE,
                "payload_too_large",
            ),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status_and_code(), (status, code), "{err}");
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn database_errors_are_not_echoed() {
        let err = AppError::from(StoreError::Db(sqlx::Error::PoolTimedOut));
        assert_eq!(
            err.status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
        );
    }
}
