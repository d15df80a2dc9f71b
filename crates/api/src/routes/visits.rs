//! Visit report routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use vendra_core::visit::{VisitDraft, validate_draft};
use vendra_db::VisitReportRepository;
use vendra_db::repositories::visit_report::VisitReportError;
use vendra_shared::types::SellerId;

/// Creates the visit report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/visits", post(create_visit).get(recent_visits))
}

/// Request body for submitting a visit report.
#[derive(Deserialize)]
struct CreateVisitRequest {
    /// Seller submitting the report.
    seller_id: SellerId,
    /// The visit fields.
    #[serde(flatten)]
    draft: VisitDraft,
}

/// Query parameters for the recent-visits listing.
#[derive(Deserialize)]
struct RecentQuery {
    /// Maximum number of reports to return.
    limit: Option<u64>,
}

/// POST /visits - Submit a visit report.
async fn create_visit(
    State(state): State<AppState>,
    Json(payload): Json<CreateVisitRequest>,
) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    let validated = match validate_draft(payload.draft, &state.sentinels, today) {
        Ok(v) => v,
        Err(errors) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "validation_failed",
                    "errors": errors
                })),
            )
                .into_response();
        }
    };

    let repo = VisitReportRepository::new((*state.db).clone());
    let report = match repo.insert(payload.seller_id, validated).await {
        Ok(r) => r,
        Err(VisitReportError::SellerNotFound(id)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "seller_not_found",
                    "message": format!("No seller found with id {id}")
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to insert visit report");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred saving the report"
                })),
            )
                .into_response();
        }
    };

    info!(
        report_id = %report.id,
        seller_id = %report.seller_id,
        sale_completed = report.sale_completed,
        "Visit report created"
    );

    (
        StatusCode::CREATED,
        Json(json!({
            "id": report.id,
            "seller_id": report.seller_id,
            "client_id": report.client_id,
            "sale_completed": report.sale_completed,
            "entered_at": report.entered_at
        })),
    )
        .into_response()
}

/// GET /visits - Most recent visit reports, newest first.
async fn recent_visits(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(10).min(100);
    let repo = VisitReportRepository::new((*state.db).clone());

    let reports = match repo.recent(limit).await {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, "Database error listing recent visits");
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

    let reports_json: Vec<_> = reports
        .into_iter()
        .map(|report| {
            json!({
                "id": report.id,
                "seller_id": report.seller_id,
                "client_id": report.client_id,
                "first_name": report.first_name,
                "last_name": report.last_name,
                "commerce_name": report.commerce_name,
                "sale_completed": report.sale_completed,
                "note": report.note,
                "entered_at": report.entered_at
            })
        })
        .collect();

    (StatusCode::OK, Json(json!({ "reports": reports_json }))).into_response()
}
