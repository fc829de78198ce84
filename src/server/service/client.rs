use sea_orm::DatabaseConnection;

use crate::server::{
    data::client::ClientRepository,
    error::AppError,
    model::{
        ack::{DeleteAck, InsertAck, UpdateAck},
        client::{Client, ClientPatch, CreateClientParams},
        id::RecordId,
    },
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new client
    pub async fn create(&self, params: CreateClientParams) -> Result<InsertAck, AppError> {
        let ack = ClientRepository::new(self.db).create(params).await?;

        tracing::info!("Created client {}", ack.inserted_id);

        Ok(ack)
    }

    /// Gets all clients
    pub async fn get_all(&self) -> Result<Vec<Client>, AppError> {
        Ok(ClientRepository::new(self.db).list().await?)
    }

    /// Gets a client by ID, failing with `NotFound` when it does not exist
    pub async fn get_by_id(&self, id: &RecordId) -> Result<Client, AppError> {
        ClientRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("client with ID {} not found", id)))
    }

    /// Applies a partial update to a client
    pub async fn update(&self, id: &RecordId, patch: ClientPatch) -> Result<UpdateAck, AppError> {
        let ack = ClientRepository::new(self.db).update(id, &patch).await?;

        if ack.matched_count == 0 {
            tracing::debug!("Update matched no client with ID {}", id);
        }

        Ok(ack)
    }

    /// Deletes a client; guests referencing it are not touched
    pub async fn delete(&self, id: &RecordId) -> Result<DeleteAck, AppError> {
        Ok(ClientRepository::new(self.db).delete(id).await?)
    }
}
