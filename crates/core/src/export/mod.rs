//! Report export sinks.
//!
//! A sink turns an aggregated [`ReportBundle`](crate::reports::ReportBundle)
//! into downloadable bytes with an associated content type and suggested
//! filename. Two sinks exist: a two-sheet spreadsheet and a print-ready
//! HTML document.

pub mod document;
pub mod error;
pub mod excel;

#[cfg(test)]
mod tests;

pub use document::DocumentSink;
pub use error::ExportError;
pub use excel::ExcelSink;

use chrono::NaiveDate;

use crate::reports::ReportBundle;

/// Capability shared by all export sinks.
pub trait ExportSink {
    /// MIME type of the rendered output.
    fn content_type(&self) -> &'static str;

    /// Filename to suggest in the download response.
    fn suggested_filename(&self, from: NaiveDate, to: NaiveDate) -> String;

    /// Renders the bundle into output bytes.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] when rendering fails.
    fn render(&self, bundle: &ReportBundle) -> Result<Vec<u8>, ExportError>;
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Two-sheet spreadsheet (detail + statistics).
    Excel,
    /// Print-ready paginated document.
    Document,
}

impl ExportFormat {
    /// Parses a format selector from a query parameter.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "excel" | "xlsx" => Some(Self::Excel),
            "document" | "pdf" | "html" => Some(Self::Document),
            _ => None,
        }
    }

    /// Builds the sink for this format.
    ///
    /// # Errors
    ///
    /// Returns an error if the document template fails to register.
    pub fn sink(self) -> Result<Box<dyn ExportSink>, ExportError> {
        match self {
            Self::Excel => Ok(Box::new(ExcelSink)),
            Self::Document => Ok(Box::new(DocumentSink::new()?)),
        }
    }
}
