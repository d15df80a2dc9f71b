//! Client management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use vendra_core::identity::Rut;
use vendra_db::ClientRepository;
use vendra_db::repositories::client::{ClientError, NewClient};

/// Creates the client routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clients", post(create_client))
        .route("/clients", get(list_clients))
        .route("/clients/{rut}", get(get_client))
}

/// Request body for registering a confirmed client.
#[derive(Deserialize)]
struct CreateClientRequest {
    /// Free-text RUT; required and validated.
    rut: String,
    commerce_name: Option<String>,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    location: Option<String>,
}

/// POST /clients - Register a confirmed client.
async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientRequest>,
) -> impl IntoResponse {
    let rut = match Rut::parse(&payload.rut) {
        Ok(r) => r,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "invalid_rut",
                    "message": e.to_string()
                })),
            )
                .into_response();
        }
    };

    let repo = ClientRepository::new((*state.db).clone());
    let client = match repo
        .insert(NewClient {
            rut: rut.into_string(),
            commerce_name: payload.commerce_name,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone: payload.phone,
            location: payload.location,
        })
        .await
    {
        Ok(c) => c,
        Err(ClientError::DuplicateRut(rut)) => {
            return (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "duplicate_rut",
                    "message": format!("A client with RUT {rut} already exists")
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to create client");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred creating the client"
                })),
            )
                .into_response();
        }
    };

    info!(client_id = %client.id, "Client created");

    (
        StatusCode::CREATED,
        Json(json!({
            "id": client.id,
            "rut": client.rut,
            "commerce_name": client.commerce_name,
            "first_name": client.first_name,
            "last_name": client.last_name,
            "created_at": client.created_at
        })),
    )
        .into_response()
}

/// GET /clients - List all clients.
async fn list_clients(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ClientRepository::new((*state.db).clone());

    let clients = match repo.list().await {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Database error listing clients");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred"
                })),
            )
                .into_response();
        }
    };

    let clients_json: Vec<_> = clients
        .into_iter()
        .map(|client| {
            json!({
                "id": client.id,
                "rut": client.rut,
                "commerce_name": client.commerce_name,
                "first_name": client.first_name,
                "last_name": client.last_name,
                "email": client.email,
                "phone": client.phone,
                "location": client.location,
                "created_at": client.created_at
            })
        })
        .collect();

    (StatusCode::OK, Json(json!({ "clients": clients_json }))).into_response()
}

/// GET `/clients/{rut}` - Look up a client by RUT.
async fn get_client(
    State(state): State<AppState>,
    Path(raw_rut): Path<String>,
) -> impl IntoResponse {
    let rut = match Rut::parse(&raw_rut) {
        Ok(r) => r,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "invalid_rut",
                    "message": e.to_string()
                })),
            )
                .into_response();
        }
    };

    let repo = ClientRepository::new((*state.db).clone());
    match repo.find_by_rut(rut.as_str()).await {
        Ok(Some(client)) => (
            StatusCode::OK,
            Json(json!({
                "id": client.id,
                "rut": client.rut,
                "commerce_name": client.commerce_name,
                "first_name": client.first_name,
                "last_name": client.last_name,
                "email": client.email,
                "phone": client.phone,
                "location": client.location,
                "created_at": client.created_at
            })),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "not_found",
                "message": "No client found with this RUT"
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Database error fetching client");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred"
                })),
            )
                .into_response()
        }
    }
}
