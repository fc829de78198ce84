//! Client domain model and parameters.
//!
//! Provides the `Client` domain model, the validated create parameters, and the typed
//! `ClientPatch` used for partial updates.

use sea_orm::{ActiveValue, DbErr};

use crate::{
    model::client::{ClientDto, CreateClientDto, UpdateClientDto},
    server::{error::AppError, model::id::RecordId},
};

/// An event host owning zero or more guests.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: RecordId,
    pub name: String,
    pub contact: String,
    pub invitation_types: String,
}

impl Client {
    /// Converts an entity model to the client domain model.
    ///
    /// # Returns
    /// - `Ok(Client)` - The converted domain model
    /// - `Err(DbErr::Custom)` - The stored id is not a valid record id
    pub fn from_entity(entity: entity::client::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: RecordId::from_stored(&entity.id)?,
            name: entity.name,
            contact: entity.contact,
            invitation_types: entity.invitation_types,
        })
    }

    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: self.id.to_hex(),
            name: self.name,
            contact: self.contact,
            invitation_types: self.invitation_types,
        }
    }
}

/// Parameters for creating a new client.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateClientParams {
    pub name: String,
    pub contact: String,
    pub invitation_types: String,
}

impl CreateClientParams {
    /// Converts the create DTO, rejecting an empty `invitation_types`.
    ///
    /// # Returns
    /// - `Ok(CreateClientParams)` - Validated parameters
    /// - `Err(AppError::Validation)` - `invitation_types` is empty or absent
    pub fn from_dto(dto: CreateClientDto) -> Result<Self, AppError> {
        if dto.invitation_types.trim().is_empty() {
            return Err(AppError::Validation(
                "invitation_types cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            name: dto.name,
            contact: dto.contact,
            invitation_types: dto.invitation_types,
        })
    }
}

/// Partial update of a client.
///
/// Each field is either absent (left untouched) or carries the new value. The set
/// of fields is closed; the DTO rejects unknown names when decoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub invitation_types: Option<String>,
}

impl ClientPatch {
    /// Converts and validates the update DTO against the client schema.
    ///
    /// # Returns
    /// - `Ok(ClientPatch)` - Non-empty, valid patch
    /// - `Err(AppError::Validation)` - No fields given, or `invitation_types` empty
    pub fn from_dto(dto: UpdateClientDto) -> Result<Self, AppError> {
        let patch = Self {
            name: dto.name,
            contact: dto.contact,
            invitation_types: dto.invitation_types,
        };

        if patch.is_empty() {
            return Err(AppError::Validation(
                "update payload must contain at least one of name, contact, invitation_types"
                    .to_string(),
            ));
        }

        if patch
            .invitation_types
            .as_deref()
            .is_some_and(|value| value.trim().is_empty())
        {
            return Err(AppError::Validation(
                "invitation_types cannot be empty".to_string(),
            ));
        }

        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.contact.is_none() && self.invitation_types.is_none()
    }

    /// Builds an active model that sets only the patched fields whose value differs
    /// from `existing`.
    ///
    /// The result has no changed columns when the patch would not modify anything.
    pub fn changes_against(&self, existing: entity::client::Model) -> entity::client::ActiveModel {
        let mut active_model: entity::client::ActiveModel = existing.clone().into();

        if let Some(name) = self.name.as_ref().filter(|v| **v != existing.name) {
            active_model.name = ActiveValue::Set(name.clone());
        }
        if let Some(contact) = self.contact.as_ref().filter(|v| **v != existing.contact) {
            active_model.contact = ActiveValue::Set(contact.clone());
        }
        if let Some(invitation_types) = self
            .invitation_types
            .as_ref()
            .filter(|v| **v != existing.invitation_types)
        {
            active_model.invitation_types = ActiveValue::Set(invitation_types.clone());
        }

        active_model
    }
}
