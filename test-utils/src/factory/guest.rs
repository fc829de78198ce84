//! Guest factory for creating test guest records.

use crate::factory::helpers::{next_id, next_record_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guests with customizable fields.
///
/// The factory writes the record directly and performs no client existence check,
/// which lets tests seed guests that reference deleted or unknown clients.
pub struct GuestFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    message: String,
    confirmation: String,
    client_id: String,
}

impl<'a> GuestFactory<'a> {
    /// Creates a new GuestFactory referencing `client_id`.
    ///
    /// Defaults:
    /// - id: next counter value as a 24 character hex id
    /// - name: `"Guest {n}"`
    /// - message: `"Congratulations!"`
    /// - confirmation: `"pending"`
    pub fn new(db: &'a DatabaseConnection, client_id: impl Into<String>) -> Self {
        let n = next_id();
        Self {
            db,
            id: next_record_id(),
            name: format!("Guest {}", n),
            message: "Congratulations!".to_string(),
            confirmation: "pending".to_string(),
            client_id: client_id.into(),
        }
    }

    /// Sets the guest name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the guest message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the confirmation status.
    pub fn confirmation(mut self, confirmation: impl Into<String>) -> Self {
        self.confirmation = confirmation.into();
        self
    }

    /// Builds and inserts the guest record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guest::Model)` - Created guest record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guest::Model, DbErr> {
        entity::guest::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            message: ActiveValue::Set(self.message),
            confirmation: ActiveValue::Set(self.confirmation),
            client_id: ActiveValue::Set(self.client_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guest with default values for the given client id.
pub async fn create_guest(
    db: &DatabaseConnection,
    client_id: &str,
) -> Result<entity::guest::Model, DbErr> {
    GuestFactory::new(db, client_id).build().await
}
