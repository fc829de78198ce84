use thiserror::Error;

/// Failure to parse a record id from its text encoding.
///
/// Results in a 400 Bad Request, since ids always originate from the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRecordIdError {
    /// The text is not exactly 24 characters long.
    #[error("Invalid id '{value}': expected 24 hexadecimal characters, got {length}")]
    InvalidLength {
        /// The rejected text
        value: String,
        /// Its length in characters
        length: usize,
    },

    /// The text contains a character outside `0-9a-fA-F`.
    #[error("Invalid id '{value}': contains non-hexadecimal characters")]
    InvalidCharacter {
        /// The rejected text
        value: String,
    },
}
