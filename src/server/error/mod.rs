//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type that
//! wraps concern-specific errors and implements `IntoResponse`, so controllers simply
//! propagate failures with `?`.

pub mod config;
pub mod identifier;
pub mod store;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, identifier::ParseRecordIdError, store::StoreError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Store operation failure (driver error or expired operation scope).
    ///
    /// Delegates to `StoreError::into_response()` for 500/502/504 mapping.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Socket level error while binding or serving.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An id in the path, query or body is not a valid 24 character hex id.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    MalformedIdentifier(#[from] ParseRecordIdError),

    /// A required field is missing, empty or zero.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Validation(String),

    /// A guest references a client that does not exist.
    ///
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Reference(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// The request body could not be decoded.
    ///
    /// Results in 400 Bad Request with the decoder's message.
    #[error("{0}")]
    BadRequest(String),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Store(StoreError::Db(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request payload: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl AppError {
    /// Status code and machine readable code for client-caused errors.
    ///
    /// Returns `None` for errors that are answered with a generic server error.
    fn client_status(&self) -> Option<(StatusCode, &'static str)> {
        match self {
            Self::MalformedIdentifier(_) => Some((StatusCode::BAD_REQUEST, "malformed_identifier")),
            Self::Validation(_) => Some((StatusCode::BAD_REQUEST, "validation_error")),
            Self::BadRequest(_) => Some((StatusCode::BAD_REQUEST, "bad_request")),
            Self::Reference(_) => Some((StatusCode::CONFLICT, "reference_error")),
            Self::NotFound(_) => Some((StatusCode::NOT_FOUND, "not_found")),
            Self::ConfigErr(_) | Self::Store(_) | Self::Io(_) => None,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Client-caused errors carry their own message. Store errors delegate to
/// `StoreError::into_response()`. Everything else is logged with full details and
/// answered with a generic message to avoid leaking internals.
///
/// # Returns
/// - 400 Bad Request - `Validation`, `MalformedIdentifier`, `BadRequest`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `Reference`
/// - 500/502/504 - `Store`, see `StoreError`
/// - 500 Internal Server Error - configuration and socket errors
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some((status, code)) = self.client_status() {
            tracing::debug!("Rejecting request with {}: {}", status, self);
            return (
                status,
                Json(ErrorDto {
                    error: self.to_string(),
                    code: code.to_string(),
                }),
            )
                .into_response();
        }

        match self {
            Self::Store(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
                code: "internal_error".to_string(),
            }),
        )
            .into_response()
    }
}
