//! Bounded operation scopes for store calls.
//!
//! Every repository call is wrapped in [`bounded`], which abandons the call once its
//! limit elapses. There is no retry at this layer.

use std::{future::Future, time::Duration};

use sea_orm::DbErr;

use crate::server::error::store::StoreError;

/// Scope for inserts.
pub const INSERT_TIMEOUT: Duration = Duration::from_secs(5);

/// Scope for point existence checks.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Scope for reads, updates and deletes.
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs `operation` with at most `limit` to complete.
///
/// # Arguments
/// - `name` - Short operation name used in logs and the timeout error
/// - `limit` - Maximum duration before the operation is abandoned
/// - `operation` - The store call
///
/// # Returns
/// - `Ok(T)` - The operation finished in time
/// - `Err(StoreError::Db)` - The operation failed
/// - `Err(StoreError::Timeout)` - The limit elapsed first
pub async fn bounded<T, F>(name: &'static str, limit: Duration, operation: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, DbErr>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result.map_err(StoreError::from),
        Err(_) => {
            tracing::warn!("Store operation '{}' abandoned after {:?}", name, limit);
            Err(StoreError::Timeout {
                operation: name,
                limit,
            })
        }
    }
}
