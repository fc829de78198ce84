use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every non-2xx response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    /// Human readable description of the failure.
    pub error: String,
    /// Stable machine readable error code, e.g. `not_found` or `reference_error`.
    pub code: String,
}

/// Acknowledgment of an insert, carrying the store-generated id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct InsertAckDto {
    pub inserted_id: String,
}

/// Acknowledgment of an update.
///
/// `matched_count` is 0 when no record has the requested id; `modified_count` is 0
/// when the update left every stored value as it was.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateAckDto {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Acknowledgment of a delete; `deleted_count` is 0 when nothing matched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DeleteAckDto {
    pub deleted_count: u64,
}
