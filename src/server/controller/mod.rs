//! HTTP request handlers.
//!
//! Controllers decode payloads and path/query parameters, convert wire ids into
//! `RecordId`, call the matching service, and encode the result as JSON. Every
//! failure is returned as `AppError` and rendered by its `IntoResponse` impl.

pub mod client;
pub mod guest;
pub mod health;

#[cfg(test)]
mod test;
