use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{DeleteAckDto, ErrorDto, InsertAckDto, UpdateAckDto},
        client::{ClientDto, CreateClientDto, UpdateClientDto},
        guest::{CreateGuestDto, GuestDto, UpdateGuestDto},
    },
    server::{
        controller::{
            client::{create_client, delete_client, get_client_by_id, get_clients, update_client},
            guest::{create_guest, delete_guest, get_guest_by_id, get_guests_by_client, update_guest},
            health::health_check,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Invitations API",
        description = "Clients and the guests invited to their events"
    ),
    paths(
        crate::server::controller::client::create_client,
        crate::server::controller::client::get_clients,
        crate::server::controller::client::get_client_by_id,
        crate::server::controller::client::update_client,
        crate::server::controller::client::delete_client,
        crate::server::controller::guest::create_guest,
        crate::server::controller::guest::get_guests_by_client,
        crate::server::controller::guest::get_guest_by_id,
        crate::server::controller::guest::update_guest,
        crate::server::controller::guest::delete_guest,
        crate::server::controller::health::health_check,
    ),
    components(schemas(
        ClientDto,
        CreateClientDto,
        UpdateClientDto,
        GuestDto,
        CreateGuestDto,
        UpdateGuestDto,
        InsertAckDto,
        UpdateAckDto,
        DeleteAckDto,
        ErrorDto,
    )),
    tags(
        (name = "client", description = "Event owners"),
        (name = "guest", description = "Invited guests of a client"),
        (name = "health", description = "Liveness and store reachability")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clients", get(get_clients).post(create_client))
        .route(
            "/clients/{id}",
            get(get_client_by_id).put(update_client).delete(delete_client),
        )
        .route("/guests", get(get_guests_by_client).post(create_guest))
        .route(
            "/guests/{id}",
            get(get_guest_by_id).put(update_guest).delete(delete_guest),
        )
        .route("/health", get(health_check))
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
}
