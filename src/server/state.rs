//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Repositories and services borrow the connection for the duration of a request;
/// nothing else is held globally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing the client and guest collections.
    ///
    /// Clones share the same pool.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state around an established connection.
    ///
    /// # Arguments
    /// - `db` - Database connection pool with migrations applied
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
