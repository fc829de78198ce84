use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ClientDto {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub invitation_types: String,
}

/// Payload for creating a client.
///
/// Every field defaults to an empty string when absent so a missing
/// `invitation_types` is reported as a validation failure rather than a decode error.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct CreateClientDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub invitation_types: String,
}

/// Partial update payload for a client.
///
/// Only the listed fields are accepted; unknown field names are rejected when the
/// body is decoded. Absent and `null` fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateClientDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation_types: Option<String>,
}
