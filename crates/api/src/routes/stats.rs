//! Dashboard summary routes.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use tracing::error;

use crate::AppState;
use vendra_db::{ClientRepository, ProspectRepository, VisitReportRepository};

/// Creates the stats routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats/summary", get(summary))
}

/// GET /stats/summary - Record counts for the dashboard.
async fn summary(State(state): State<AppState>) -> impl IntoResponse {
    let visits = VisitReportRepository::new((*state.db).clone());
    let prospects = ProspectRepository::new((*state.db).clone());
    let clients = ClientRepository::new((*state.db).clone());

    let counts = tokio::try_join!(
        async { visits.count().await.map_err(|e| e.to_string()) },
        async { prospects.count().await.map_err(|e| e.to_string()) },
        async { clients.count().await.map_err(|e| e.to_string()) },
    );

    match counts {
        Ok((visit_reports, prospects, clients)) => (
            StatusCode::OK,
            Json(json!({
                "visit_reports": visit_reports,
                "prospects": prospects,
                "clients": clients
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Database error building summary");
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
