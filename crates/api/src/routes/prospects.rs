//! Prospect management routes.

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
use vendra_db::ProspectRepository;
use vendra_db::repositories::client::NewClient;
use vendra_db::repositories::prospect::{NewProspect, ProspectError};

/// Creates the prospect routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/prospects", post(create_prospect))
        .route("/prospects", get(list_prospects))
        .route("/prospects/{prospect_id}/convert", post(convert_prospect))
}

/// Request body for registering a prospect. Every field is optional at
/// this stage.
#[derive(Deserialize)]
struct CreateProspectRequest {
    /// Free-text RUT, validated when present.
    rut: Option<String>,
    commerce_name: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    location: Option<String>,
    notes: Option<String>,
}

/// Request body for converting a prospect into a client.
#[derive(Deserialize)]
struct ConvertProspectRequest {
    /// Free-text RUT; required and validated.
    rut: String,
    commerce_name: Option<String>,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    location: Option<String>,
}

/// POST /prospects - Register a prospective client.
async fn create_prospect(
    State(state): State<AppState>,
    Json(payload): Json<CreateProspectRequest>,
) -> impl IntoResponse {
    let rut = match Rut::parse_optional(payload.rut.as_deref().unwrap_or("")) {
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

    let repo = ProspectRepository::new((*state.db).clone());
    let prospect = match repo
        .insert(NewProspect {
            rut: rut.map(Rut::into_string),
            commerce_name: payload.commerce_name,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone: payload.phone,
            location: payload.location,
            notes: payload.notes,
        })
        .await
    {
        Ok(p) => p,
        Err(e) => {
            error!(error = %e, "Failed to create prospect");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred creating the prospect"
                })),
            )
                .into_response();
        }
    };

    info!(prospect_id = %prospect.id, "Prospect created");

    (
        StatusCode::CREATED,
        Json(json!({
            "id": prospect.id,
            "rut": prospect.rut,
            "commerce_name": prospect.commerce_name,
            "first_name": prospect.first_name,
            "last_name": prospect.last_name,
            "created_at": prospect.created_at
        })),
    )
        .into_response()
}

/// GET /prospects - List all prospects.
async fn list_prospects(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ProspectRepository::new((*state.db).clone());

    let prospects = match repo.list().await {
        Ok(p) => p,
        Err(e) => {
            error!(error = %e, "Database error listing prospects");
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

    let prospects_json: Vec<_> = prospects
        .into_iter()
        .map(|prospect| {
            json!({
                "id": prospect.id,
                "rut": prospect.rut,
                "commerce_name": prospect.commerce_name,
                "first_name": prospect.first_name,
                "last_name": prospect.last_name,
                "email": prospect.email,
                "phone": prospect.phone,
                "location": prospect.location,
                "notes": prospect.notes,
                "created_at": prospect.created_at
            })
        })
        .collect();

    (StatusCode::OK, Json(json!({ "prospects": prospects_json }))).into_response()
}

/// POST `/prospects/{prospect_id}/convert` - Convert a prospect into a
/// confirmed client.
async fn convert_prospect(
    State(state): State<AppState>,
    Path(prospect_id): Path<uuid::Uuid>,
    Json(payload): Json<ConvertProspectRequest>,
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

    let repo = ProspectRepository::new((*state.db).clone());
    let client = match repo
        .convert(
            prospect_id,
            NewClient {
                rut: rut.into_string(),
                commerce_name: payload.commerce_name,
                first_name: payload.first_name,
                last_name: payload.last_name,
                email: payload.email,
                phone: payload.phone,
                location: payload.location,
            },
        )
        .await
    {
        Ok(c) => c,
        Err(ProspectError::NotFound(id)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "prospect_not_found",
                    "message": format!("No prospect found with id {id}")
                })),
            )
                .into_response();
        }
        Err(ProspectError::DuplicateClientRut(rut)) => {
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
            error!(error = %e, "Failed to convert prospect");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred converting the prospect"
                })),
            )
                .into_response();
        }
    };

    info!(
        prospect_id = %prospect_id,
        client_id = %client.id,
        "Prospect converted to client"
    );

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
