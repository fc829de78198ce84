//! Client factory for creating test client records.

use crate::factory::helpers::{next_id, next_record_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::client::ClientFactory;
///
/// let client = ClientFactory::new(&db)
///     .name("Acme")
///     .contact("a@b.com")
///     .build()
///     .await?;
/// ```
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    contact: String,
    invitation_types: String,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - id: next counter value as a 24 character hex id
    /// - name: `"Client {n}"`
    /// - contact: `"client{n}@example.com"`
    /// - invitation_types: `"wedding"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: next_record_id(),
            name: format!("Client {}", n),
            contact: format!("client{}@example.com", n),
            invitation_types: "wedding".to_string(),
        }
    }

    /// Sets the record id, as its 24 character hex encoding.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact string.
    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    /// Sets the invitation types.
    pub fn invitation_types(mut self, invitation_types: impl Into<String>) -> Self {
        self.invitation_types = invitation_types.into();
        self
    }

    /// Builds and inserts the client record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::client::Model)` - Created client record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            contact: ActiveValue::Set(self.contact),
            invitation_types: ActiveValue::Set(self.invitation_types),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values.
///
/// Shorthand for `ClientFactory::new(db).build().await`.
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}
