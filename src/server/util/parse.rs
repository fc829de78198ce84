use crate::server::{error::AppError, model::id::RecordId};

/// Parses a record id received from a client.
///
/// # Arguments
/// - `value` - Text encoding of the id, as found in a path, query or body
///
/// # Returns
/// - `Ok(RecordId)` - Successfully parsed id
/// - `Err(AppError::MalformedIdentifier)` - The text is not 24 hex characters
pub fn parse_record_id(value: &str) -> Result<RecordId, AppError> {
    value.trim().parse::<RecordId>().map_err(|e| {
        tracing::debug!("Rejecting malformed id: {}", e);
        AppError::from(e)
    })
}

/// Parses a required id, treating an absent or empty value as a validation failure.
///
/// # Arguments
/// - `field` - Name of the field, used in the error message
/// - `value` - The raw value, if any
///
/// # Returns
/// - `Ok(RecordId)` - Successfully parsed id
/// - `Err(AppError::Validation)` - The value is absent or empty
/// - `Err(AppError::MalformedIdentifier)` - The value is not 24 hex characters
pub fn parse_required_record_id(field: &str, value: Option<&str>) -> Result<RecordId, AppError> {
    match value.map(str::trim) {
        None | Some("") => Err(AppError::Validation(format!("{} is required", field))),
        Some(value) => parse_record_id(value),
    }
}
