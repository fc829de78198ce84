//! Write acknowledgments returned by repository operations.

use crate::{
    model::api::{DeleteAckDto, InsertAckDto, UpdateAckDto},
    server::model::id::RecordId,
};

/// Result of a successful insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertAck {
    pub inserted_id: RecordId,
}

impl InsertAck {
    pub fn into_dto(self) -> InsertAckDto {
        InsertAckDto {
            inserted_id: self.inserted_id.to_hex(),
        }
    }
}

/// Result of an update: how many records matched the id and how many changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateAck {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateAck {
    /// No record carried the requested id.
    pub fn unmatched() -> Self {
        Self {
            matched_count: 0,
            modified_count: 0,
        }
    }

    /// One record matched; `modified` tells whether any stored value changed.
    pub fn matched(modified: bool) -> Self {
        Self {
            matched_count: 1,
            modified_count: u64::from(modified),
        }
    }

    pub fn into_dto(self) -> UpdateAckDto {
        UpdateAckDto {
            matched_count: self.matched_count,
            modified_count: self.modified_count,
        }
    }
}

/// Result of a delete; `deleted_count` is 0 when no record matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAck {
    pub deleted_count: u64,
}

impl DeleteAck {
    pub fn into_dto(self) -> DeleteAckDto {
        DeleteAckDto {
            deleted_count: self.deleted_count,
        }
    }
}
