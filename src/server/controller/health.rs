use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::server::{
    data::scope::{bounded, LOOKUP_TIMEOUT},
    state::AppState,
};

/// Report whether the store answers a ping within the lookup scope.
///
/// # Returns
/// - `200 OK` - `{"status": "ok"}`
/// - `503 Service Unavailable` - The ping failed or timed out
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service and store are reachable"),
        (status = 503, description = "Store is unreachable")
    ),
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    if let Err(err) = bounded("ping", LOOKUP_TIMEOUT, state.db.ping()).await {
        tracing::error!("Store health check failed: {}", err);
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "error",
                "store": "down",
            })),
        );
    }

    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
