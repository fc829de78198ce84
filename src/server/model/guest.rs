//! Guest domain model and parameters.

use sea_orm::{ActiveValue, DbErr};

use crate::{
    model::guest::{GuestDetailsDto, GuestDto, UpdateGuestDto},
    server::{error::AppError, model::id::RecordId},
};

/// An invitee associated with exactly one client.
#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    pub id: RecordId,
    pub name: String,
    pub message: String,
    pub confirmation: String,
    pub client_id: RecordId,
}

impl Guest {
    /// Converts an entity model to the guest domain model.
    ///
    /// # Returns
    /// - `Ok(Guest)` - The converted domain model
    /// - `Err(DbErr::Custom)` - The stored id or client id is not a valid record id
    pub fn from_entity(entity: entity::guest::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: RecordId::from_stored(&entity.id)?,
            name: entity.name,
            message: entity.message,
            confirmation: entity.confirmation,
            client_id: RecordId::from_stored(&entity.client_id)?,
        })
    }

    pub fn into_dto(self) -> GuestDto {
        GuestDto {
            id: self.id.to_hex(),
            name: self.name,
            message: self.message,
            confirmation: self.confirmation,
            client_id: self.client_id.to_hex(),
        }
    }
}

/// The complete set of mutable guest fields.
///
/// Used both for inserts and for full-field overwrites on update.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestFields {
    pub name: String,
    pub message: String,
    pub confirmation: String,
    pub client_id: RecordId,
}

impl GuestFields {
    /// Combines the typed part of a create payload with the separately decoded client id.
    pub fn from_details(details: GuestDetailsDto, client_id: RecordId) -> Self {
        Self {
            name: details.name,
            message: details.message,
            confirmation: details.confirmation,
            client_id,
        }
    }

    /// Builds an active model overwriting every mutable column of `existing` that
    /// differs from these fields.
    pub fn changes_against(&self, existing: entity::guest::Model) -> entity::guest::ActiveModel {
        let client_id = self.client_id.to_hex();
        let mut active_model: entity::guest::ActiveModel = existing.clone().into();

        if self.name != existing.name {
            active_model.name = ActiveValue::Set(self.name.clone());
        }
        if self.message != existing.message {
            active_model.message = ActiveValue::Set(self.message.clone());
        }
        if self.confirmation != existing.confirmation {
            active_model.confirmation = ActiveValue::Set(self.confirmation.clone());
        }
        if client_id != existing.client_id {
            active_model.client_id = ActiveValue::Set(client_id);
        }

        active_model
    }
}

/// Parameters for updating a guest, before the client reference is defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGuestParams {
    pub name: String,
    pub message: String,
    pub confirmation: String,
    /// `None` keeps the stored client reference.
    pub client_id: Option<RecordId>,
}

impl UpdateGuestParams {
    /// Converts the update DTO, parsing a present, non-empty `client_id`.
    ///
    /// A zero `client_id` is treated like an omitted one.
    ///
    /// # Returns
    /// - `Ok(UpdateGuestParams)` - Converted parameters
    /// - `Err(AppError::MalformedIdentifier)` - `client_id` is present but not a valid id
    pub fn from_dto(dto: UpdateGuestDto) -> Result<Self, AppError> {
        let client_id = match dto.client_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(value.parse::<RecordId>()?).filter(|id| !id.is_zero()),
        };

        Ok(Self {
            name: dto.name,
            message: dto.message,
            confirmation: dto.confirmation,
            client_id,
        })
    }

    /// Resolves the client reference, falling back to `existing` when none was supplied.
    pub fn with_default_client(self, existing: RecordId) -> GuestFields {
        GuestFields {
            name: self.name,
            message: self.message,
            confirmation: self.confirmation,
            client_id: self.client_id.unwrap_or(existing),
        }
    }
}
