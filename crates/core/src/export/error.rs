//! Export error types.

use thiserror::Error;

/// Errors that can occur while rendering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Spreadsheet generation failed.
    #[error("workbook generation failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// The document layout failed to register.
    #[error("document template registration failed: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// Document rendering failed mid-stream.
    ///
    /// Carries whatever markup was produced before the failure so callers
    /// can surface it as a diagnostic payload instead of discarding it.
    #[error("document rendering failed: {reason}")]
    Render {
        /// Underlying template engine message.
        reason: String,
        /// Partial rendered markup, possibly empty.
        markup: String,
    },
}
