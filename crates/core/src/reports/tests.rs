//! Tests for report bundle assembly.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use super::service::ReportService;
use super::types::{ClientInfo, SellerSection, VisitRow};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn entered(day: u32, hour: u32) -> NaiveDateTime {
    date(2026, 3, day).and_hms_opt(hour, 0, 0).unwrap()
}

fn row(day: u32, hour: u32, sale: bool, products: &[&str]) -> VisitRow {
    VisitRow {
        entered_at: entered(day, hour),
        client: None,
        first_name: None,
        last_name: None,
        commerce_name: None,
        sale_completed: sale,
        products: products.iter().map(ToString::to_string).collect(),
        payment_method: sale.then(|| "Efectivo".to_string()),
        note: String::new(),
    }
}

fn section(name: &str, rows: Vec<VisitRow>) -> SellerSection {
    SellerSection {
        seller_name: name.to_string(),
        rows,
    }
}

#[test]
fn test_empty_range_yields_zeroed_statistics() {
    let bundle = ReportService::build_bundle(date(2026, 3, 1), date(2026, 3, 31), vec![]);

    assert!(bundle.sections.is_empty());
    assert_eq!(bundle.totals.total_reports, 0);
    assert_eq!(bundle.totals.total_sales, 0);
    assert!((bundle.totals.sale_rate - 0.0).abs() < f64::EPSILON);
    assert!(bundle.products.is_empty());
}

#[test]
fn test_two_seller_scenario() {
    // Seller A: one sale of "Plan X" and one no-sale visit.
    // Seller B: one sale of "Plan X".
    let sections = vec![
        section(
            "A",
            vec![
                row(2, 9, true, &["Plan X"]),
                row(2, 11, false, &["N/A"]),
            ],
        ),
        section("B", vec![row(3, 10, true, &["Plan X"])]),
    ];

    let bundle = ReportService::build_bundle(date(2026, 3, 1), date(2026, 3, 31), sections);

    assert_eq!(bundle.totals.total_reports, 3);
    assert_eq!(bundle.totals.total_sales, 2);
    assert!((bundle.totals.sale_rate - 2.0 / 3.0).abs() < 1e-9);

    // Only completed-sale products are counted: the no-sale "N/A" row is
    // excluded, so "Plan X" holds the whole share.
    assert_eq!(bundle.products.len(), 1);
    assert_eq!(bundle.products[0].name, "Plan X");
    assert_eq!(bundle.products[0].quantity, 2);
    assert!((bundle.products[0].share - 1.0).abs() < 1e-9);
}

#[test]
fn test_section_and_row_order_is_preserved() {
    let sections = vec![
        section("Zoila", vec![row(2, 9, false, &[]), row(2, 10, false, &[])]),
        section("Andrés", vec![row(1, 15, false, &[])]),
    ];

    let bundle = ReportService::build_bundle(date(2026, 3, 1), date(2026, 3, 31), sections);

    assert_eq!(bundle.sections[0].seller_name, "Zoila");
    assert_eq!(bundle.sections[1].seller_name, "Andrés");
    let rows = &bundle.sections[0].rows;
    assert!(rows[0].entered_at < rows[1].entered_at);
}

#[test]
fn test_products_sorted_by_quantity_descending() {
    let sections = vec![section(
        "A",
        vec![
            row(2, 9, true, &["Plan B", "Plan A"]),
            row(2, 10, true, &["Plan A"]),
            row(2, 11, true, &["Plan C", "Plan A", "Plan B"]),
        ],
    )];

    let bundle = ReportService::build_bundle(date(2026, 3, 1), date(2026, 3, 31), sections);

    let names: Vec<&str> = bundle.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Plan A", "Plan B", "Plan C"]);
    assert_eq!(bundle.products[0].quantity, 3);
    assert_eq!(bundle.products[1].quantity, 2);
    assert_eq!(bundle.products[2].quantity, 1);
}

#[test]
fn test_display_resolution_falls_back_to_denormalized_fields() {
    let mut anonymous = row(2, 9, false, &[]);
    assert_eq!(anonymous.display_client_name(), "Anónimo");
    assert_eq!(anonymous.display_commerce_name(), "Particular");
    assert_eq!(anonymous.display_products(), "-");
    assert_eq!(anonymous.display_payment(), "-");
    assert_eq!(anonymous.display_sale(), "NO");

    anonymous.first_name = Some("Rosa".to_string());
    anonymous.commerce_name = Some("Almacén Rosa".to_string());
    assert_eq!(anonymous.display_client_name(), "Rosa");
    assert_eq!(anonymous.display_commerce_name(), "Almacén Rosa");
}

#[test]
fn test_display_resolution_prefers_client_record() {
    let mut r = row(2, 9, true, &["Plan X"]);
    r.first_name = Some("ignored".to_string());
    r.client = Some(ClientInfo {
        first_name: "María".to_string(),
        last_name: "Pérez".to_string(),
        commerce_name: None,
    });

    assert_eq!(r.display_client_name(), "María Pérez");
    assert_eq!(r.display_commerce_name(), "Particular");
    assert_eq!(r.display_sale(), "SÍ");
    assert_eq!(r.display_payment(), "Efectivo");
    assert_eq!(r.display_entered_at(), "02/03/2026 09:00");
}

#[test]
fn test_payment_missing_on_completed_sale_reads_no_especificado() {
    let mut r = row(2, 9, true, &["Plan X"]);
    r.payment_method = None;
    assert_eq!(r.display_payment(), "No especificado");
}

proptest! {
    /// Sale rate is exactly completed/total for any mix of reports.
    #[test]
    fn test_sale_rate_is_exact(flags in proptest::collection::vec(any::<bool>(), 0..50)) {
        let rows: Vec<VisitRow> = flags
            .iter()
            .map(|&sale| row(2, 9, sale, if sale { &["Plan X"][..] } else { &[][..] }))
            .collect();
        let total = rows.len() as u64;
        let sales = flags.iter().filter(|&&f| f).count() as u64;

        let bundle = ReportService::build_bundle(
            date(2026, 3, 1),
            date(2026, 3, 31),
            vec![section("A", rows)],
        );

        prop_assert_eq!(bundle.totals.total_reports, total);
        prop_assert_eq!(bundle.totals.total_sales, sales);
        let expected = if total == 0 { 0.0 } else { sales as f64 / total as f64 };
        prop_assert!((bundle.totals.sale_rate - expected).abs() < 1e-12);
    }

    /// Product shares sum to 1.0 whenever any products were counted.
    #[test]
    fn test_product_shares_sum_to_one(
        reports in proptest::collection::vec(
            (any::<bool>(), proptest::collection::vec(0usize..5, 0..4)),
            1..30,
        )
    ) {
        let catalog = ["Plan A", "Plan B", "Plan C", "Plan D", "Plan E"];
        let rows: Vec<VisitRow> = reports
            .iter()
            .map(|(sale, picks)| {
                // Distinct products per report, mirroring the join table.
                let mut names: Vec<&str> = picks.iter().map(|&i| catalog[i]).collect();
                names.sort_unstable();
                names.dedup();
                row(2, 9, *sale, &names)
            })
            .collect();

        let bundle = ReportService::build_bundle(
            date(2026, 3, 1),
            date(2026, 3, 31),
            vec![section("A", rows)],
        );

        let share_sum: f64 = bundle.products.iter().map(|p| p.share).sum();
        if bundle.products.is_empty() {
            prop_assert!((share_sum - 0.0).abs() < f64::EPSILON);
        } else {
            prop_assert!((share_sum - 1.0).abs() < 1e-9);
        }
    }
}
