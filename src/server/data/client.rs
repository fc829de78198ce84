//! Client data repository for store operations.
//!
//! Provides the `ClientRepository` for creating, listing, fetching, patching and
//! deleting clients, and implements [`ClientLookup`], the narrow existence check the
//! guest repository depends on.

use std::future::Future;

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
};

use crate::server::{
    data::scope::{bounded, INSERT_TIMEOUT, LOOKUP_TIMEOUT, OPERATION_TIMEOUT},
    error::store::StoreError,
    model::{
        ack::{DeleteAck, InsertAck, UpdateAck},
        client::{Client, ClientPatch, CreateClientParams},
        id::RecordId,
    },
};

/// Existence check for clients, used to validate guest references.
pub trait ClientLookup {
    /// Returns whether a client with `id` is currently stored.
    fn exists(&self, id: &RecordId) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

/// Repository providing store operations for clients.
pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    /// Creates a new ClientRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new client under a freshly generated id.
    ///
    /// Callers are responsible for validating `invitation_types` beforehand.
    ///
    /// # Returns
    /// - `Ok(InsertAck)` - Acknowledgment carrying the generated id
    /// - `Err(StoreError)` - Insert failed or timed out
    pub async fn create(&self, params: CreateClientParams) -> Result<InsertAck, StoreError> {
        let id = RecordId::generate();

        bounded("insert client", INSERT_TIMEOUT, async move {
            entity::client::ActiveModel {
                id: ActiveValue::Set(id.to_hex()),
                name: ActiveValue::Set(params.name),
                contact: ActiveValue::Set(params.contact),
                invitation_types: ActiveValue::Set(params.invitation_types),
            }
            .insert(self.db)
            .await
        })
        .await?;

        Ok(InsertAck { inserted_id: id })
    }

    /// Returns every stored client in storage order.
    pub async fn list(&self) -> Result<Vec<Client>, StoreError> {
        bounded("list clients", OPERATION_TIMEOUT, async move {
            entity::prelude::Client::find()
                .all(self.db)
                .await?
                .into_iter()
                .map(Client::from_entity)
                .collect::<Result<Vec<_>, DbErr>>()
        })
        .await
    }

    /// Finds a client by id.
    ///
    /// # Returns
    /// - `Ok(Some(Client))` - The client exists
    /// - `Ok(None)` - No client has this id
    /// - `Err(StoreError)` - Query failed or timed out
    pub async fn get_by_id(&self, id: &RecordId) -> Result<Option<Client>, StoreError> {
        bounded("find client", OPERATION_TIMEOUT, async move {
            entity::prelude::Client::find_by_id(id.to_hex())
                .one(self.db)
                .await?
                .map(Client::from_entity)
                .transpose()
        })
        .await
    }

    /// Merges the patched fields into the stored client.
    ///
    /// Fields absent from the patch are left untouched. An unknown id is not an
    /// error; it yields an acknowledgment with zero matches.
    ///
    /// # Returns
    /// - `Ok(UpdateAck)` - Matched and modified counts
    /// - `Err(StoreError)` - Query or update failed or timed out
    pub async fn update(&self, id: &RecordId, patch: &ClientPatch) -> Result<UpdateAck, StoreError> {
        bounded("update client", OPERATION_TIMEOUT, async move {
            let Some(existing) = entity::prelude::Client::find_by_id(id.to_hex())
                .one(self.db)
                .await?
            else {
                return Ok::<_, DbErr>(UpdateAck::unmatched());
            };

            let active_model = patch.changes_against(existing);
            if !active_model.is_changed() {
                return Ok(UpdateAck::matched(false));
            }

            active_model.update(self.db).await?;

            Ok(UpdateAck::matched(true))
        })
        .await
    }

    /// Deletes a client by id. Guests referencing it are left in place.
    ///
    /// # Returns
    /// - `Ok(DeleteAck)` - Deleted count, 0 when no client had this id
    /// - `Err(StoreError)` - Delete failed or timed out
    pub async fn delete(&self, id: &RecordId) -> Result<DeleteAck, StoreError> {
        let result = bounded("delete client", OPERATION_TIMEOUT, async move {
            entity::prelude::Client::delete_by_id(id.to_hex())
                .exec(self.db)
                .await
        })
        .await?;

        Ok(DeleteAck {
            deleted_count: result.rows_affected,
        })
    }
}

impl ClientLookup for ClientRepository<'_> {
    async fn exists(&self, id: &RecordId) -> Result<bool, StoreError> {
        let count = bounded("client lookup", LOOKUP_TIMEOUT, async move {
            entity::prelude::Client::find_by_id(id.to_hex())
                .count(self.db)
                .await
        })
        .await?;

        Ok(count > 0)
    }
}
