//! Two-sheet spreadsheet export.

use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet};

use super::error::ExportError;
use super::ExportSink;
use crate::reports::ReportBundle;

/// Maximum auto-sized column width, in characters.
const MAX_COLUMN_WIDTH: usize = 50;

/// Detail sheet column headers.
const DETAIL_HEADERS: [&str; 7] = [
    "Fecha",
    "Cliente",
    "Comercio",
    "Productos",
    "Venta?",
    "Pago",
    "Nota",
];

/// Spreadsheet export: a "Detalle Gestión" sheet with one section per
/// seller and an "Estadísticas" sheet with global and per-product totals.
pub struct ExcelSink;

impl ExportSink for ExcelSink {
    fn content_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    }

    fn suggested_filename(&self, from: NaiveDate, to: NaiveDate) -> String {
        format!("Reporte_Ventas_{from}_{to}.xlsx")
    }

    fn render(&self, bundle: &ReportBundle) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();

        let styles = Styles::new();
        write_detail_sheet(workbook.add_worksheet(), bundle, &styles)?;
        write_stats_sheet(workbook.add_worksheet(), bundle, &styles)?;

        Ok(workbook.save_to_buffer()?)
    }
}

/// Cell formats shared across both sheets.
struct Styles {
    header: Format,
    seller: Format,
    title: Format,
    summary_label: Format,
    percent: Format,
    centered: Format,
}

impl Styles {
    fn new() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(0x004F_81BD))
                .set_align(FormatAlign::Center),
            seller: Format::new()
                .set_bold()
                .set_font_size(12)
                .set_background_color(Color::RGB(0x00D9_D9D9))
                .set_align(FormatAlign::Left)
                .set_align(FormatAlign::VerticalCenter),
            title: Format::new().set_bold().set_font_size(14),
            summary_label: Format::new()
                .set_bold()
                .set_background_color(Color::RGB(0x00E2_EFDA)),
            percent: Format::new().set_num_format("0.00%"),
            centered: Format::new().set_align(FormatAlign::Center),
        }
    }
}

/// Writes the per-seller detail sheet, auto-sizing columns as it goes.
fn write_detail_sheet(
    sheet: &mut Worksheet,
    bundle: &ReportBundle,
    styles: &Styles,
) -> Result<(), ExportError> {
    sheet.set_name("Detalle Gestión")?;

    let mut widths = [0usize; 7];
    let mut row: u32 = 0;

    for section in &bundle.sections {
        let banner = format!("VENDEDOR: {}", section.seller_name.to_uppercase());
        sheet.merge_range(row, 0, row, 6, &banner, &styles.seller)?;
        row += 1;

        for (col, title) in (0u16..).zip(DETAIL_HEADERS) {
            sheet.write_string_with_format(row, col, title, &styles.header)?;
            widths[usize::from(col)] = widths[usize::from(col)].max(title.chars().count());
        }
        row += 1;

        for report in &section.rows {
            let cells = [
                report.display_entered_at(),
                report.display_client_name(),
                report.display_commerce_name(),
                report.display_products(),
                report.display_sale().to_string(),
                report.display_payment(),
                report.note.clone(),
            ];
            for (col, value) in (0u16..).zip(&cells) {
                sheet.write_string(row, col, value.as_str())?;
                widths[usize::from(col)] = widths[usize::from(col)].max(value.chars().count());
            }
            row += 1;
        }

        // Blank separator between seller sections.
        row += 2;
    }

    for (col, width) in (0u16..).zip(widths) {
        let adjusted = (width + 2).min(MAX_COLUMN_WIDTH);
        #[allow(clippy::cast_precision_loss)]
        sheet.set_column_width(col, adjusted as f64)?;
    }

    Ok(())
}

/// Writes the statistics sheet: global summary plus product ranking.
#[allow(clippy::cast_precision_loss)]
fn write_stats_sheet(
    sheet: &mut Worksheet,
    bundle: &ReportBundle,
    styles: &Styles,
) -> Result<(), ExportError> {
    sheet.set_name("Estadísticas")?;

    sheet.write_string_with_format(0, 0, "RESUMEN GLOBAL", &styles.title)?;

    sheet.write_string_with_format(2, 0, "Total Visitas/Reportes", &styles.summary_label)?;
    sheet.write_number(2, 1, bundle.totals.total_reports as f64)?;

    sheet.write_string_with_format(3, 0, "Ventas Concretadas", &styles.summary_label)?;
    sheet.write_number(3, 1, bundle.totals.total_sales as f64)?;

    sheet.write_string_with_format(4, 0, "% Efectividad de Venta", &styles.summary_label)?;
    sheet.write_number_with_format(4, 1, bundle.totals.sale_rate, &styles.percent)?;

    sheet.write_string_with_format(0, 3, "DETALLE POR PRODUCTO", &styles.title)?;
    for (col, title) in (3u16..).zip(["Producto", "Cant. Vendida", "% del Total Productos"]) {
        sheet.write_string_with_format(2, col, title, &styles.header)?;
    }

    for (row, product) in (3u32..).zip(&bundle.products) {
        sheet.write_string(row, 3, product.name.as_str())?;
        sheet.write_number_with_format(row, 4, product.quantity as f64, &styles.centered)?;
        sheet.write_number_with_format(row, 5, product.share, &styles.percent)?;
    }

    sheet.set_column_width(0, 25)?;
    sheet.set_column_width(3, 30)?;
    sheet.set_column_width(4, 15)?;
    sheet.set_column_width(5, 20)?;

    Ok(())
}
