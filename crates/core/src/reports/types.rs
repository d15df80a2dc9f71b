//! Aggregated report data types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Client fields resolved from a confirmed client record.
#[derive(Debug, Clone, Serialize)]
pub struct ClientInfo {
    /// Contact first name.
    pub first_name: String,
    /// Contact surname.
    pub last_name: String,
    /// Commerce name, if the client has one.
    pub commerce_name: Option<String>,
}

/// One visit report row, resolved for display.
///
/// When the client reference is absent the display name falls back to the
/// denormalized name fields captured on the report itself.
#[derive(Debug, Clone, Serialize)]
pub struct VisitRow {
    /// Timestamp the report was entered.
    pub entered_at: NaiveDateTime,
    /// Confirmed client, when the visit referenced one.
    pub client: Option<ClientInfo>,
    /// Denormalized contact first name (unconverted prospect).
    pub first_name: Option<String>,
    /// Denormalized contact surname (unconverted prospect).
    pub last_name: Option<String>,
    /// Denormalized commerce name (unconverted prospect).
    pub commerce_name: Option<String>,
    /// Whether a sale was completed.
    pub sale_completed: bool,
    /// Names of the product categories attached to the report.
    pub products: Vec<String>,
    /// Payment method name, when one was recorded.
    pub payment_method: Option<String>,
    /// Free-text observations.
    pub note: String,
}

impl VisitRow {
    /// Resolved client display name ("Anónimo" when nothing is known).
    #[must_use]
    pub fn display_client_name(&self) -> String {
        if let Some(client) = &self.client {
            return format!("{} {}", client.first_name, client.last_name);
        }
        let name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let name = name.trim();
        if name.is_empty() {
            "Anónimo".to_string()
        } else {
            name.to_string()
        }
    }

    /// Resolved commerce display name ("Particular" when absent).
    #[must_use]
    pub fn display_commerce_name(&self) -> String {
        let commerce = match &self.client {
            Some(client) => client.commerce_name.as_deref(),
            None => self.commerce_name.as_deref(),
        };
        commerce
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Particular")
            .to_string()
    }

    /// Comma-joined product names, or "-" when there are none.
    #[must_use]
    pub fn display_products(&self) -> String {
        if self.products.is_empty() {
            "-".to_string()
        } else {
            self.products.join(", ")
        }
    }

    /// Payment method, shown only for completed sales.
    #[must_use]
    pub fn display_payment(&self) -> String {
        if !self.sale_completed {
            return "-".to_string();
        }
        self.payment_method
            .clone()
            .unwrap_or_else(|| "No especificado".to_string())
    }

    /// "SÍ" / "NO" sale flag.
    #[must_use]
    pub const fn display_sale(&self) -> &'static str {
        if self.sale_completed { "SÍ" } else { "NO" }
    }

    /// Entry timestamp formatted `dd/mm/yyyy HH:MM`.
    #[must_use]
    pub fn display_entered_at(&self) -> String {
        self.entered_at.format("%d/%m/%Y %H:%M").to_string()
    }
}

/// All of one seller's reports in range, ascending by entry timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct SellerSection {
    /// Seller display name.
    pub seller_name: String,
    /// Rows in store order (ascending entry timestamp).
    pub rows: Vec<VisitRow>,
}

/// Global sell-through totals for a date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalesTotals {
    /// Total visit reports in range.
    pub total_reports: u64,
    /// Reports with a completed sale.
    pub total_sales: u64,
    /// `total_sales / total_reports`; 0 when there are no reports.
    pub sale_rate: f64,
}

/// Count and share of one product category among completed-sale reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCount {
    /// Product category name.
    pub name: String,
    /// Occurrences among completed-sale reports.
    pub quantity: u64,
    /// Share of all counted product occurrences; 0 when none were counted.
    pub share: f64,
}

/// Aggregated report bundle for a date range.
///
/// Derived, never persisted. Section order is the store order; per-section
/// row order is ascending entry timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct ReportBundle {
    /// Range start (inclusive).
    pub from: NaiveDate,
    /// Range end (inclusive).
    pub to: NaiveDate,
    /// Per-seller report sections.
    pub sections: Vec<SellerSection>,
    /// Global totals.
    pub totals: SalesTotals,
    /// Per-product counts, sorted by quantity descending.
    pub products: Vec<ProductCount>,
}
