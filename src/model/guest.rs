use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct GuestDto {
    pub id: String,
    pub name: String,
    pub message: String,
    pub confirmation: String,
    pub client_id: String,
}

/// Request body for creating a guest.
///
/// `client_id` is the text encoding of the owning client's id.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct CreateGuestDto {
    pub name: String,
    pub message: String,
    pub confirmation: String,
    pub client_id: String,
}

/// The typed, id-free part of a guest payload.
///
/// Guest creation decodes the body into this shape and extracts `client_id`
/// separately from the raw JSON object.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GuestDetailsDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub confirmation: String,
}

/// Request body for replacing a guest's fields.
///
/// All descriptive fields are required. When `client_id` is absent or empty the
/// stored reference is kept.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct UpdateGuestDto {
    pub name: String,
    pub message: String,
    pub confirmation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GuestListQuery {
    /// Id of the client whose guests should be listed.
    pub client_id: Option<String>,
}
