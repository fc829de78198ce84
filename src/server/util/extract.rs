//! Request extractors whose rejections are reported as `AppError`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON body extractor that answers decode failures with the application's error body.
///
/// Behaves like `axum::Json`, but a malformed or mistyped body becomes
/// `AppError::BadRequest` (400 with `ErrorDto`) instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string extractor with the same error body as [`AppJson`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
