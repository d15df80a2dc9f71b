//! Report export routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use vendra_core::export::{ExportError, ExportFormat};
use vendra_core::reports::ReportService;
use vendra_db::VisitReportRepository;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports/export", get(export_report))
}

/// Query parameters for the export endpoint.
#[derive(Deserialize)]
struct ExportQuery {
    /// Range start (inclusive), `YYYY-MM-DD`.
    from: NaiveDate,
    /// Range end (inclusive), `YYYY-MM-DD`.
    to: NaiveDate,
    /// Output format selector; defaults to the spreadsheet.
    format: Option<String>,
}

/// GET `/reports/export?from=..&to=..&format=..` - Download an aggregated
/// sales report for a date range.
async fn export_report(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> impl IntoResponse {
    if query.from > query.to {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_range",
                "message": "The start date must not be after the end date"
            })),
        )
            .into_response();
    }

    let format_param = query.format.as_deref().unwrap_or("excel");
    let Some(format) = ExportFormat::parse(format_param) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "unknown_format",
                "message": "Format must be one of: excel, document"
            })),
        )
            .into_response();
    };

    let repo = VisitReportRepository::new((*state.db).clone());
    let sections = match repo.fetch_sections(query.from, query.to).await {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "Database error fetching report sections");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred building the report"
                })),
            )
                .into_response();
        }
    };

    let bundle = ReportService::build_bundle(query.from, query.to, sections);

    let sink = match format.sink() {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "Failed to initialize export sink");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred preparing the export"
                })),
            )
                .into_response();
        }
    };

    let bytes = match sink.render(&bundle) {
        Ok(b) => b,
        Err(ExportError::Render { reason, markup }) => {
            error!(
                reason = %reason,
                partial_bytes = markup.len(),
                "Document rendering failed mid-stream"
            );
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "render_failed",
                    "message": reason,
                    "partial_markup": markup
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to render export");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred rendering the export"
                })),
            )
                .into_response();
        }
    };

    info!(
        from = %query.from,
        to = %query.to,
        format = format_param,
        bytes = bytes.len(),
        "Report exported"
    );

    let filename = sink.suggested_filename(query.from, query.to);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, sink.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}
