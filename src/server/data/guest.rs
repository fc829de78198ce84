//! Guest data repository for store operations.
//!
//! Provides the `GuestRepository` for managing guests. Writes that set a client
//! reference validate it first: a zero id is rejected before any store access, and
//! the referenced client must exist according to the supplied [`ClientLookup`].
//!
//! The existence check and the following write are separate statements without a
//! transaction; a client deleted in between is not detected.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    data::{
        client::ClientLookup,
        scope::{bounded, INSERT_TIMEOUT, OPERATION_TIMEOUT},
    },
    error::{store::StoreError, AppError},
    model::{
        ack::{DeleteAck, InsertAck, UpdateAck},
        guest::{Guest, GuestFields},
        id::RecordId,
    },
};

/// Repository providing store operations for guests.
pub struct GuestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestRepository<'a> {
    /// Creates a new GuestRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new guest after validating its client reference.
    ///
    /// # Arguments
    /// - `fields` - Guest fields including the owning client's id
    /// - `clients` - Existence check for the referenced client
    ///
    /// # Returns
    /// - `Ok(InsertAck)` - Acknowledgment carrying the generated id
    /// - `Err(AppError::Validation)` - `client_id` is zero; nothing was queried
    /// - `Err(AppError::Reference)` - No client has `client_id`; nothing was inserted
    /// - `Err(AppError::Store)` - Lookup or insert failed or timed out
    pub async fn create<L>(&self, fields: GuestFields, clients: &L) -> Result<InsertAck, AppError>
    where
        L: ClientLookup + Sync,
    {
        ensure_client_id(&fields.client_id)?;
        ensure_client_exists(clients, &fields.client_id).await?;

        let id = RecordId::generate();

        bounded("insert guest", INSERT_TIMEOUT, async move {
            entity::guest::ActiveModel {
                id: ActiveValue::Set(id.to_hex()),
                name: ActiveValue::Set(fields.name),
                message: ActiveValue::Set(fields.message),
                confirmation: ActiveValue::Set(fields.confirmation),
                client_id: ActiveValue::Set(fields.client_id.to_hex()),
            }
            .insert(self.db)
            .await
        })
        .await?;

        Ok(InsertAck { inserted_id: id })
    }

    /// Returns every guest referencing `client_id`.
    ///
    /// An empty result is returned as an empty vector.
    pub async fn list_by_client(&self, client_id: &RecordId) -> Result<Vec<Guest>, StoreError> {
        bounded("list guests", OPERATION_TIMEOUT, async move {
            entity::prelude::Guest::find()
                .filter(entity::guest::Column::ClientId.eq(client_id.to_hex()))
                .all(self.db)
                .await?
                .into_iter()
                .map(Guest::from_entity)
                .collect::<Result<Vec<_>, DbErr>>()
        })
        .await
    }

    /// Finds a guest by id.
    ///
    /// # Returns
    /// - `Ok(Some(Guest))` - The guest exists
    /// - `Ok(None)` - No guest has this id
    /// - `Err(StoreError)` - Query failed or timed out
    pub async fn get_by_id(&self, id: &RecordId) -> Result<Option<Guest>, StoreError> {
        bounded("find guest", OPERATION_TIMEOUT, async move {
            entity::prelude::Guest::find_by_id(id.to_hex())
                .one(self.db)
                .await?
                .map(Guest::from_entity)
                .transpose()
        })
        .await
    }

    /// Overwrites every mutable field of a guest.
    ///
    /// The client reference must already be defaulted by the caller. When the
    /// update moves the guest to a different client, that client must exist. An
    /// unknown guest id yields an acknowledgment with zero matches.
    ///
    /// # Returns
    /// - `Ok(UpdateAck)` - Matched and modified counts
    /// - `Err(AppError::Validation)` - `client_id` is zero
    /// - `Err(AppError::Reference)` - The newly referenced client does not exist
    /// - `Err(AppError::Store)` - Query or update failed or timed out
    pub async fn update<L>(
        &self,
        id: &RecordId,
        fields: GuestFields,
        clients: &L,
    ) -> Result<UpdateAck, AppError>
    where
        L: ClientLookup + Sync,
    {
        ensure_client_id(&fields.client_id)?;

        let existing = bounded("find guest", OPERATION_TIMEOUT, async move {
            entity::prelude::Guest::find_by_id(id.to_hex())
                .one(self.db)
                .await
        })
        .await?;

        let Some(existing) = existing else {
            return Ok(UpdateAck::unmatched());
        };

        if existing.client_id != fields.client_id.to_hex() {
            ensure_client_exists(clients, &fields.client_id).await?;
        }

        let active_model = fields.changes_against(existing);
        if !active_model.is_changed() {
            return Ok(UpdateAck::matched(false));
        }

        bounded("update guest", OPERATION_TIMEOUT, async move {
            active_model.update(self.db).await
        })
        .await?;

        Ok(UpdateAck::matched(true))
    }

    /// Deletes a guest by id.
    ///
    /// # Returns
    /// - `Ok(DeleteAck)` - Deleted count, 0 when no guest had this id
    /// - `Err(StoreError)` - Delete failed or timed out
    pub async fn delete(&self, id: &RecordId) -> Result<DeleteAck, StoreError> {
        let result = bounded("delete guest", OPERATION_TIMEOUT, async move {
            entity::prelude::Guest::delete_by_id(id.to_hex())
                .exec(self.db)
                .await
        })
        .await?;

        Ok(DeleteAck {
            deleted_count: result.rows_affected,
        })
    }
}

fn ensure_client_id(client_id: &RecordId) -> Result<(), AppError> {
    if client_id.is_zero() {
        tracing::debug!("Rejecting guest write with zero client_id");
        return Err(AppError::Validation(
            "invalid client_id: client_id cannot be zero".to_string(),
        ));
    }

    Ok(())
}

async fn ensure_client_exists<L>(clients: &L, client_id: &RecordId) -> Result<(), AppError>
where
    L: ClientLookup + Sync,
{
    if !clients.exists(client_id).await? {
        return Err(AppError::Reference(format!(
            "client with ID {} does not exist",
            client_id
        )));
    }

    Ok(())
}
