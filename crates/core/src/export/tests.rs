//! Tests for export sinks.

use chrono::NaiveDate;

use super::{DocumentSink, ExcelSink, ExportFormat, ExportSink};
use crate::reports::{ReportService, SellerSection, VisitRow};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

fn sample_bundle() -> crate::reports::ReportBundle {
    let rows = |day: u32, sale: bool| VisitRow {
        entered_at: date(day).and_hms_opt(10, 30, 0).unwrap(),
        client: None,
        first_name: Some("Carla".to_string()),
        last_name: Some("Muñoz".to_string()),
        commerce_name: Some("Kiosco Central".to_string()),
        sale_completed: sale,
        products: if sale {
            vec!["Plan X".to_string()]
        } else {
            vec!["N/A".to_string()]
        },
        payment_method: sale.then(|| "Efectivo".to_string()),
        note: "ok".to_string(),
    };

    let sections = vec![
        SellerSection {
            seller_name: "Pedro".to_string(),
            rows: vec![rows(2, true), rows(3, false)],
        },
        SellerSection {
            seller_name: "Lucía".to_string(),
            rows: vec![rows(4, true)],
        },
    ];
    ReportService::build_bundle(date(1), date(31), sections)
}

#[test]
fn test_format_parsing() {
    assert_eq!(ExportFormat::parse("excel"), Some(ExportFormat::Excel));
    assert_eq!(ExportFormat::parse("XLSX"), Some(ExportFormat::Excel));
    assert_eq!(
        ExportFormat::parse("document"),
        Some(ExportFormat::Document)
    );
    assert_eq!(ExportFormat::parse("pdf"), Some(ExportFormat::Document));
    assert_eq!(ExportFormat::parse("csv"), None);
}

#[test]
fn test_excel_sink_metadata() {
    let sink = ExcelSink;
    assert_eq!(
        sink.content_type(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        sink.suggested_filename(date(1), date(31)),
        "Reporte_Ventas_2026-03-01_2026-03-31.xlsx"
    );
}

#[test]
fn test_excel_sink_produces_a_workbook() {
    let bytes = ExcelSink.render(&sample_bundle()).unwrap();
    // xlsx files are zip archives.
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_excel_sink_handles_empty_bundle() {
    let bundle = ReportService::build_bundle(date(1), date(31), vec![]);
    let bytes = ExcelSink.render(&bundle).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_document_sink_metadata() {
    let sink = DocumentSink::new().unwrap();
    assert_eq!(sink.content_type(), "text/html; charset=utf-8");
    assert_eq!(
        sink.suggested_filename(date(1), date(31)),
        "Reporte_2026-03-01.html"
    );
}

#[test]
fn test_document_sink_renders_sections_in_order() {
    let sink = DocumentSink::new().unwrap();
    let markup = String::from_utf8(sink.render(&sample_bundle()).unwrap()).unwrap();

    let pedro = markup.find("VENDEDOR: PEDRO").unwrap();
    let lucia = markup.find("VENDEDOR: LUCÍA").unwrap();
    assert!(pedro < lucia);

    assert!(markup.contains("02/03/2026 10:30"));
    assert!(markup.contains("Carla Muñoz"));
    assert!(markup.contains("Kiosco Central"));
    assert!(markup.contains("66.67%"));
}

#[test]
fn test_document_sink_handles_empty_bundle() {
    let sink = DocumentSink::new().unwrap();
    let markup = String::from_utf8(sink.render(&ReportService::build_bundle(
        date(1),
        date(31),
        vec![],
    )).unwrap())
    .unwrap();

    assert!(markup.contains("0.00%"));
}

#[test]
fn test_format_builds_matching_sink() {
    let excel = ExportFormat::Excel.sink().unwrap();
    let document = ExportFormat::Document.sink().unwrap();
    assert_ne!(excel.content_type(), document.content_type());
}
