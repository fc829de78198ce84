//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values start at 1, so every derived record id is non-zero.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Formats a counter value as a 24 character hexadecimal record id.
///
/// Produces the same text encoding the server uses for store-generated ids.
pub fn next_record_id() -> String {
    format!("{:024x}", next_id())
}

/// Creates a client and `count` guests referencing it.
///
/// # Returns
/// - `Ok((client, guests))` - The created client and its guests in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_client_with_guests(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::client::Model, Vec<entity::guest::Model>), DbErr> {
    let client = crate::factory::client::create_client(db).await?;

    let mut guests = Vec::with_capacity(count);
    for _ in 0..count {
        guests.push(crate::factory::guest::create_guest(db, &client.id).await?);
    }

    Ok((client, guests))
}
