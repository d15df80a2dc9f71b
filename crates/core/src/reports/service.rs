//! Report bundle assembly.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::types::{ProductCount, ReportBundle, SalesTotals, SellerSection};

/// Service for assembling aggregated report bundles.
pub struct ReportService;

impl ReportService {
    /// Builds the aggregated bundle for a date range from per-seller
    /// sections fetched from the record store.
    ///
    /// Statistics are computed as a fold over the immutable rows: total and
    /// completed-sale counts globally, and per-product occurrences counted
    /// once per product category per completed-sale report. Empty input
    /// yields zeroed statistics; this never fails.
    #[must_use]
    pub fn build_bundle(
        from: NaiveDate,
        to: NaiveDate,
        sections: Vec<SellerSection>,
    ) -> ReportBundle {
        let (total_reports, total_sales, counts) = sections
            .iter()
            .flat_map(|section| section.rows.iter())
            .fold(
                (0u64, 0u64, BTreeMap::<String, u64>::new()),
                |(total, sales, mut counts), row| {
                    if row.sale_completed {
                        for product in &row.products {
                            *counts.entry(product.clone()).or_default() += 1;
                        }
                        (total + 1, sales + 1, counts)
                    } else {
                        (total + 1, sales, counts)
                    }
                },
            );

        let totals = SalesTotals {
            total_reports,
            total_sales,
            sale_rate: ratio(total_sales, total_reports),
        };

        let counted_occurrences: u64 = counts.values().sum();
        let mut products: Vec<ProductCount> = counts
            .into_iter()
            .map(|(name, quantity)| ProductCount {
                name,
                quantity,
                share: ratio(quantity, counted_occurrences),
            })
            .collect();
        // Most-sold first; BTreeMap iteration already ties by name ascending.
        products.sort_by(|a, b| b.quantity.cmp(&a.quantity));

        ReportBundle {
            from,
            to,
            sections,
            totals,
            products,
        }
    }
}

/// `numerator / denominator` as a float, 0 when the denominator is 0.
#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
