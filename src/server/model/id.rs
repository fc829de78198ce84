//! Store identifier type.
//!
//! `RecordId` is a 12 byte identifier exchanged as 24 lowercase hexadecimal
//! characters. Freshly generated ids are laid out as a 4 byte big-endian Unix
//! timestamp in seconds, a 5 byte per-process random value, and a 3 byte counter,
//! so ids generated by one process sort by creation second.

use std::{
    fmt,
    str::FromStr,
    sync::{
        atomic::{AtomicU32, Ordering},
        LazyLock,
    },
};

use crate::server::error::identifier::ParseRecordIdError;

const ID_LEN: usize = 12;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(rand::random);

static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(rand::random::<u32>() & 0x00ff_ffff));

/// Unique identifier of a stored client or guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId([u8; ID_LEN]);

impl RecordId {
    /// The all-zero id. Never generated; a reference holding it is treated as unset.
    pub const ZERO: RecordId = RecordId([0; ID_LEN]);

    /// Generates a new id for an insert.
    pub fn generate() -> Self {
        let timestamp = chrono::Utc::now().timestamp() as u32;
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;

        let mut bytes = [0u8; ID_LEN];
        bytes[..4].copy_from_slice(&timestamp.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);

        Self(bytes)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns the 24 character lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses an id stored in an entity column.
    ///
    /// Stored ids are always written by this server, so a failure here indicates
    /// corrupted data and surfaces as a database error.
    pub fn from_stored(value: &str) -> Result<Self, sea_orm::DbErr> {
        value
            .parse()
            .map_err(|e| sea_orm::DbErr::Custom(format!("Failed to parse stored id: {}", e)))
    }
}

impl FromStr for RecordId {
    type Err = ParseRecordIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.len() != ID_LEN * 2 {
            return Err(ParseRecordIdError::InvalidLength {
                value: value.to_string(),
                length: value.chars().count(),
            });
        }

        let mut bytes = [0u8; ID_LEN];
        hex::decode_to_slice(value, &mut bytes).map_err(|_| {
            ParseRecordIdError::InvalidCharacter {
                value: value.to_string(),
            }
        })?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
