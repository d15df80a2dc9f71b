//! Lookup table routes for populating report forms.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use tracing::error;

use crate::AppState;
use vendra_db::LookupRepository;

/// Creates the lookup routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lookups", get(all_lookups))
        .route("/lookups/product-types", get(product_types))
        .route("/lookups/payment-methods", get(payment_methods))
        .route("/lookups/contact-methods", get(contact_methods))
}

/// Serializes a lookup row list into a JSON response.
fn lookup_response<I>(rows: I) -> axum::response::Response
where
    I: IntoIterator<Item = (uuid::Uuid, String, Option<String>)>,
{
    let rows_json: Vec<_> = rows
        .into_iter()
        .map(|(id, name, description)| {
            json!({
                "id": id,
                "name": name,
                "description": description
            })
        })
        .collect();
    (StatusCode::OK, Json(json!({ "items": rows_json }))).into_response()
}

/// Maps a lookup query failure to a 500 response.
fn lookup_failure(e: &vendra_db::repositories::lookup::LookupError) -> axum::response::Response {
    error!(error = %e, "Database error listing lookup rows");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": "An error occurred"
        })),
    )
        .into_response()
}

/// GET /lookups - All three lookup tables in one payload, for populating
/// the visit report form.
async fn all_lookups(State(state): State<AppState>) -> impl IntoResponse {
    let repo = LookupRepository::new((*state.db).clone());

    let lists = tokio::try_join!(
        repo.product_types(),
        repo.payment_methods(),
        repo.contact_methods(),
    );

    match lists {
        Ok((products, payments, contacts)) => {
            let to_json = |rows: Vec<(uuid::Uuid, String, Option<String>)>| {
                rows.into_iter()
                    .map(|(id, name, description)| {
                        json!({ "id": id, "name": name, "description": description })
                    })
                    .collect::<Vec<_>>()
            };
            (
                StatusCode::OK,
                Json(json!({
                    "product_types": to_json(
                        products.into_iter().map(|r| (r.id, r.name, r.description)).collect()
                    ),
                    "payment_methods": to_json(
                        payments.into_iter().map(|r| (r.id, r.name, r.description)).collect()
                    ),
                    "contact_methods": to_json(
                        contacts.into_iter().map(|r| (r.id, r.name, r.description)).collect()
                    )
                })),
            )
                .into_response()
        }
        Err(e) => lookup_failure(&e),
    }
}

/// GET /lookups/product-types - Product categories, ordered by name.
async fn product_types(State(state): State<AppState>) -> impl IntoResponse {
    let repo = LookupRepository::new((*state.db).clone());
    match repo.product_types().await {
        Ok(rows) => lookup_response(rows.into_iter().map(|r| (r.id, r.name, r.description))),
        Err(e) => lookup_failure(&e),
    }
}

/// GET /lookups/payment-methods - Payment methods, ordered by name.
async fn payment_methods(State(state): State<AppState>) -> impl IntoResponse {
    let repo = LookupRepository::new((*state.db).clone());
    match repo.payment_methods().await {
        Ok(rows) => lookup_response(rows.into_iter().map(|r| (r.id, r.name, r.description))),
        Err(e) => lookup_failure(&e),
    }
}

/// GET /lookups/contact-methods - Contact methods, ordered by name.
async fn contact_methods(State(state): State<AppState>) -> impl IntoResponse {
    let repo = LookupRepository::new((*state.db).clone());
    match repo.contact_methods().await {
        Ok(rows) => lookup_response(rows.into_iter().map(|r| (r.id, r.name, r.description))),
        Err(e) => lookup_failure(&e),
    }
}
