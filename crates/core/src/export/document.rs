//! Print-ready document export.
//!
//! Renders the aggregated bundle through a Handlebars layout into a
//! paginated HTML document (CSS `@page` rules drive the pagination when the
//! document is printed or converted downstream).

use chrono::NaiveDate;
use handlebars::Handlebars;
use serde::Serialize;

use super::error::ExportError;
use super::ExportSink;
use crate::reports::ReportBundle;

/// Registered name of the report layout.
const TEMPLATE_NAME: &str = "sales_report";

/// Document export sink backed by a Handlebars layout.
pub struct DocumentSink {
    registry: Handlebars<'static>,
}

impl DocumentSink {
    /// Creates the sink and registers the report layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout fails to compile.
    pub fn new() -> Result<Self, ExportError> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(TEMPLATE_NAME, LAYOUT)
            .map_err(|e| ExportError::Template(Box::new(e)))?;
        Ok(Self { registry })
    }
}

impl ExportSink for DocumentSink {
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    fn suggested_filename(&self, from: NaiveDate, _to: NaiveDate) -> String {
        format!("Reporte_{from}.html")
    }

    fn render(&self, bundle: &ReportBundle) -> Result<Vec<u8>, ExportError> {
        let data = DocumentData::from_bundle(bundle);

        let mut buffer = Vec::new();
        match self
            .registry
            .render_to_write(TEMPLATE_NAME, &data, &mut buffer)
        {
            Ok(()) => Ok(buffer),
            // Surface whatever markup was produced as a diagnostic payload.
            Err(e) => Err(ExportError::Render {
                reason: e.to_string(),
                markup: String::from_utf8_lossy(&buffer).into_owned(),
            }),
        }
    }
}

// ============================================================================
// Template view model
// ============================================================================

#[derive(Serialize)]
struct DocumentData {
    from: String,
    to: String,
    sections: Vec<SectionData>,
    total_reports: u64,
    total_sales: u64,
    sale_rate: String,
    products: Vec<ProductData>,
}

#[derive(Serialize)]
struct SectionData {
    seller_name: String,
    rows: Vec<RowData>,
}

#[derive(Serialize)]
struct RowData {
    date: String,
    client: String,
    commerce: String,
    products: String,
    sale: &'static str,
    payment: String,
    note: String,
}

#[derive(Serialize)]
struct ProductData {
    name: String,
    quantity: u64,
    share: String,
}

impl DocumentData {
    fn from_bundle(bundle: &ReportBundle) -> Self {
        Self {
            from: bundle.from.format("%d/%m/%Y").to_string(),
            to: bundle.to.format("%d/%m/%Y").to_string(),
            sections: bundle
                .sections
                .iter()
                .map(|section| SectionData {
                    seller_name: section.seller_name.to_uppercase(),
                    rows: section
                        .rows
                        .iter()
                        .map(|row| RowData {
                            date: row.display_entered_at(),
                            client: row.display_client_name(),
                            commerce: row.display_commerce_name(),
                            products: row.display_products(),
                            sale: row.display_sale(),
                            payment: row.display_payment(),
                            note: row.note.clone(),
                        })
                        .collect(),
                })
                .collect(),
            total_reports: bundle.totals.total_reports,
            total_sales: bundle.totals.total_sales,
            sale_rate: percent(bundle.totals.sale_rate),
            products: bundle
                .products
                .iter()
                .map(|product| ProductData {
                    name: product.name.clone(),
                    quantity: product.quantity,
                    share: percent(product.share),
                })
                .collect(),
        }
    }
}

fn percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Print layout for the sales report.
const LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>Reporte de Ventas {{from}} - {{to}}</title>
<style>
  @page { size: letter; margin: 2cm; }
  body { font-family: Helvetica, Arial, sans-serif; font-size: 11px; color: #222; }
  h1 { font-size: 18px; }
  h2 { background: #d9d9d9; padding: 4px 8px; font-size: 13px; page-break-after: avoid; }
  table { width: 100%; border-collapse: collapse; margin-bottom: 16px; }
  th { background: #4f81bd; color: #fff; padding: 4px; text-align: center; }
  td { border: 1px solid #ccc; padding: 4px; vertical-align: top; }
  .seller-section { page-break-inside: avoid; }
  .stats { margin-top: 24px; }
</style>
</head>
<body>
<h1>Reporte de Ventas</h1>
<p>Período: {{from}} al {{to}}</p>

{{#each sections}}
<div class="seller-section">
<h2>VENDEDOR: {{seller_name}}</h2>
<table>
<thead>
<tr><th>Fecha</th><th>Cliente</th><th>Comercio</th><th>Productos</th><th>Venta?</th><th>Pago</th><th>Nota</th></tr>
</thead>
<tbody>
{{#each rows}}
<tr><td>{{date}}</td><td>{{client}}</td><td>{{commerce}}</td><td>{{products}}</td><td>{{sale}}</td><td>{{payment}}</td><td>{{note}}</td></tr>
{{/each}}
</tbody>
</table>
</div>
{{/each}}

<div class="stats">
<h2>RESUMEN GLOBAL</h2>
<table>
<tbody>
<tr><td>Total Visitas/Reportes</td><td>{{total_reports}}</td></tr>
<tr><td>Ventas Concretadas</td><td>{{total_sales}}</td></tr>
<tr><td>% Efectividad de Venta</td><td>{{sale_rate}}</td></tr>
</tbody>
</table>

<h2>DETALLE POR PRODUCTO</h2>
<table>
<thead>
<tr><th>Producto</th><th>Cant. Vendida</th><th>% del Total Productos</th></tr>
</thead>
<tbody>
{{#each products}}
<tr><td>{{name}}</td><td>{{quantity}}</td><td>{{share}}</td></tr>
{{/each}}
</tbody>
</table>
</div>
</body>
</html>
"#;
