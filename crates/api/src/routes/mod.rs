//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod clients;
pub mod health;
pub mod lookups;
pub mod prospects;
pub mod reports;
pub mod stats;
pub mod visits;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(reports::routes())
        .merge(visits::routes())
        .merge(prospects::routes())
        .merge(clients::routes())
        .merge(lookups::routes())
        .merge(stats::routes())
}
