use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure of a single store operation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error reported by SeaORM or the underlying driver.
    #[error(transparent)]
    Db(#[from] DbErr),

    /// The operation did not finish within its scope and was abandoned.
    #[error("Store operation '{operation}' timed out after {limit:?}")]
    Timeout {
        /// Short name of the abandoned operation
        operation: &'static str,
        /// The scope it was given
        limit: Duration,
    },
}

impl StoreError {
    /// Whether the failure means the store could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Db(DbErr::Conn(_)) | Self::Db(DbErr::ConnectionAcquire(_))
        )
    }

    /// Status code and error code used when this error reaches a client.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, "store_timeout"),
            err if err.is_unavailable() => (StatusCode::BAD_GATEWAY, "store_unavailable"),
            Self::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "store_error"),
        }
    }
}

/// Converts store errors into HTTP responses.
///
/// The full error is logged; the client only receives a generic message and the
/// machine readable code.
///
/// # Returns
/// - 504 Gateway Timeout - The operation scope expired
/// - 502 Bad Gateway - The store could not be reached
/// - 500 Internal Server Error - Any other driver failure
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        tracing::error!("Store failure: {}", self);

        let (status, code) = self.status();
        let error = match status {
            StatusCode::GATEWAY_TIMEOUT => "The store did not respond in time",
            StatusCode::BAD_GATEWAY => "The store is unavailable",
            _ => "Internal server error",
        };

        (
            status,
            Json(ErrorDto {
                error: error.to_string(),
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}
