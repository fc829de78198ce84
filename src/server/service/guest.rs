use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{client::ClientRepository, guest::GuestRepository},
    error::{store::StoreError, AppError},
    model::{
        ack::{DeleteAck, InsertAck, UpdateAck},
        guest::{Guest, GuestFields, UpdateGuestParams},
        id::RecordId,
    },
};

pub struct GuestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a guest for an existing client
    pub async fn create(&self, fields: GuestFields) -> Result<InsertAck, AppError> {
        let clients = ClientRepository::new(self.db);

        let ack = GuestRepository::new(self.db)
            .create(fields, &clients)
            .await?;

        tracing::info!("Created guest {}", ack.inserted_id);

        Ok(ack)
    }

    /// Gets all guests of a client.
    ///
    /// A "no records" signal from the store is valid business state here and is
    /// answered with an empty list.
    pub async fn get_by_client(&self, client_id: &RecordId) -> Result<Vec<Guest>, AppError> {
        match GuestRepository::new(self.db).list_by_client(client_id).await {
            Ok(guests) => Ok(guests),
            Err(StoreError::Db(DbErr::RecordNotFound(_))) => {
                tracing::debug!("No guests found for client ID {}", client_id);
                Ok(Vec::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Gets a guest by ID, failing with `NotFound` when it does not exist
    pub async fn get_by_id(&self, id: &RecordId) -> Result<Guest, AppError> {
        GuestRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("guest with ID {} not found", id)))
    }

    /// Replaces a guest's fields.
    ///
    /// The stored guest is fetched first so an omitted `client_id` keeps the stored
    /// reference; only after that defaulting is a zero reference rejected.
    pub async fn update(
        &self,
        id: &RecordId,
        params: UpdateGuestParams,
    ) -> Result<UpdateAck, AppError> {
        let existing = self.get_by_id(id).await?;
        let fields = params.with_default_client(existing.client_id);

        let clients = ClientRepository::new(self.db);

        GuestRepository::new(self.db)
            .update(id, fields, &clients)
            .await
    }

    /// Deletes a guest
    pub async fn delete(&self, id: &RecordId) -> Result<DeleteAck, AppError> {
        Ok(GuestRepository::new(self.db).delete(id).await?)
    }
}
