use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeleteAckDto, ErrorDto, InsertAckDto, UpdateAckDto},
        client::{ClientDto, CreateClientDto, UpdateClientDto},
    },
    server::{
        error::AppError,
        model::client::{ClientPatch, CreateClientParams},
        service::client::ClientService,
        state::AppState,
        util::{extract::AppJson, parse::parse_record_id},
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

/// Create a new client.
///
/// Rejects the request before touching the store when `invitation_types` is
/// absent or empty.
///
/// # Returns
/// - `201 Created` - Insert acknowledgment with the generated id
/// - `400 Bad Request` - Invalid payload or empty `invitation_types`
/// - `5xx` - Store failure
#[utoipa::path(
    post,
    path = "/clients",
    tag = CLIENT_TAG,
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Successfully created client", body = InsertAckDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Received client data: {:?}", payload);

    let params = CreateClientParams::from_dto(payload)?;

    let ack = ClientService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(ack.into_dto())))
}

/// Get all clients.
///
/// # Returns
/// - `200 OK` - All clients, empty when none exist
/// - `5xx` - Store failure
#[utoipa::path(
    get,
    path = "/clients",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved clients", body = Vec<ClientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clients = ClientService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(clients.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a specific client by ID.
///
/// # Returns
/// - `200 OK` - The client
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No client has this id
/// - `5xx` - Store failure
#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = String, Path, description = "Client ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved client", body = ClientDto),
        (status = 400, description = "Malformed client ID", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;

    let client = ClientService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Partially update a client.
///
/// Only the fields present in the body are changed. Unknown field names and
/// non-string values are rejected.
///
/// # Returns
/// - `200 OK` - Update acknowledgment; `matched_count` is 0 for an unknown id
/// - `400 Bad Request` - Malformed id, unknown field, empty patch or empty `invitation_types`
/// - `5xx` - Store failure
#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = String, Path, description = "Client ID (24 hex characters)")
    ),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Update acknowledgment", body = UpdateAckDto),
        (status = 400, description = "Invalid update data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;
    let patch = ClientPatch::from_dto(payload)?;

    let ack = ClientService::new(&state.db).update(&id, patch).await?;

    Ok((StatusCode::OK, Json(ack.into_dto())))
}

/// Delete a client.
///
/// Guests referencing the client are left in place.
///
/// # Returns
/// - `200 OK` - Delete acknowledgment; `deleted_count` is 0 for an unknown id
/// - `400 Bad Request` - Malformed id
/// - `5xx` - Store failure
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = String, Path, description = "Client ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Delete acknowledgment", body = DeleteAckDto),
        (status = 400, description = "Malformed client ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;

    let ack = ClientService::new(&state.db).delete(&id).await?;

    Ok((StatusCode::OK, Json(ack.into_dto())))
}
