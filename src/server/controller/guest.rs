use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::{DeleteAckDto, ErrorDto, InsertAckDto, UpdateAckDto},
        guest::{CreateGuestDto, GuestDetailsDto, GuestDto, GuestListQuery, UpdateGuestDto},
    },
    server::{
        error::AppError,
        model::guest::{GuestFields, UpdateGuestParams},
        service::guest::GuestService,
        state::AppState,
        util::{
            extract::{AppJson, AppQuery},
            parse::{parse_record_id, parse_required_record_id},
        },
    },
};

/// Tag for grouping guest endpoints in OpenAPI documentation
pub static GUEST_TAG: &str = "guest";

/// Create a new guest for an existing client.
///
/// The body is decoded twice: once into the typed guest details, and once as a raw
/// JSON object from which `client_id` is taken as text and converted into a record
/// id.
///
/// # Returns
/// - `201 Created` - Insert acknowledgment with the generated id
/// - `400 Bad Request` - Invalid payload, missing/zero `client_id`, or malformed `client_id`
/// - `409 Conflict` - No client has `client_id`
/// - `5xx` - Store failure
#[utoipa::path(
    post,
    path = "/guests",
    tag = GUEST_TAG,
    request_body = CreateGuestDto,
    responses(
        (status = 201, description = "Successfully created guest", body = InsertAckDto),
        (status = 400, description = "Invalid guest data", body = ErrorDto),
        (status = 409, description = "Referenced client does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_guest(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> Result<impl IntoResponse, AppError> {
    let details: GuestDetailsDto = serde_json::from_value(body.clone())
        .map_err(|e| AppError::BadRequest(format!("Invalid request payload: {}", e)))?;

    let client_id = match body.get("client_id") {
        Some(Value::String(client_id)) => client_id.as_str(),
        _ => {
            tracing::debug!("client_id is missing or not a string");
            return Err(AppError::Validation(
                "client_id must be a valid string".to_string(),
            ));
        }
    };
    let client_id = parse_required_record_id("client_id", Some(client_id))?;

    let fields = GuestFields::from_details(details, client_id);

    let ack = GuestService::new(&state.db).create(fields).await?;

    Ok((StatusCode::CREATED, Json(ack.into_dto())))
}

/// Get all guests of a client.
///
/// # Returns
/// - `200 OK` - Guests referencing the client, empty when there are none
/// - `400 Bad Request` - Missing, repeated or malformed `client_id`
/// - `5xx` - Store failure
#[utoipa::path(
    get,
    path = "/guests",
    tag = GUEST_TAG,
    params(GuestListQuery),
    responses(
        (status = 200, description = "Successfully retrieved guests", body = Vec<GuestDto>),
        (status = 400, description = "Missing or malformed client ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guests_by_client(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<GuestListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let client_id = parse_required_record_id("client_id", query.client_id.as_deref())?;

    let guests = GuestService::new(&state.db)
        .get_by_client(&client_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(guests.into_iter().map(|g| g.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a specific guest by ID.
///
/// # Returns
/// - `200 OK` - The guest
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No guest has this id
/// - `5xx` - Store failure
#[utoipa::path(
    get,
    path = "/guests/{id}",
    tag = GUEST_TAG,
    params(
        ("id" = String, Path, description = "Guest ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guest", body = GuestDto),
        (status = 400, description = "Malformed guest ID", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guest_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;

    let guest = GuestService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(guest.into_dto())))
}

/// Replace a guest's fields.
///
/// `name`, `message` and `confirmation` are required. When `client_id` is omitted
/// or zero the stored reference is kept.
///
/// # Returns
/// - `200 OK` - Update acknowledgment
/// - `400 Bad Request` - Invalid payload or malformed id
/// - `404 Not Found` - No guest has this id
/// - `409 Conflict` - The newly referenced client does not exist
/// - `5xx` - Store failure
#[utoipa::path(
    put,
    path = "/guests/{id}",
    tag = GUEST_TAG,
    params(
        ("id" = String, Path, description = "Guest ID (24 hex characters)")
    ),
    request_body = UpdateGuestDto,
    responses(
        (status = 200, description = "Update acknowledgment", body = UpdateAckDto),
        (status = 400, description = "Invalid guest data", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 409, description = "Referenced client does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_guest(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateGuestDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;
    let params = UpdateGuestParams::from_dto(payload)?;

    let ack = GuestService::new(&state.db).update(&id, params).await?;

    Ok((StatusCode::OK, Json(ack.into_dto())))
}

/// Delete a guest.
///
/// # Returns
/// - `200 OK` - Delete acknowledgment; `deleted_count` is 0 for an unknown id
/// - `400 Bad Request` - Malformed id
/// - `5xx` - Store failure
#[utoipa::path(
    delete,
    path = "/guests/{id}",
    tag = GUEST_TAG,
    params(
        ("id" = String, Path, description = "Guest ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Delete acknowledgment", body = DeleteAckDto),
        (status = 400, description = "Malformed guest ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;

    let ack = GuestService::new(&state.db).delete(&id).await?;

    Ok((StatusCode::OK, Json(ack.into_dto())))
}
