//! Report generation for scored products.
//!
//! This module provides the output formats for a transparency assessment:
//! - PDF: Paginated document for buyers and auditors
//! - JSON: Structured data for programmatic integration
//! - Summary: Compact shell-friendly output
//!
//! All formats are produced from the same [`ScoredProduct`]. The section
//! builders in [`sections`] decide *what* a report says; each renderer only
//! decides how it looks.
//!
//! # Security
//!
//! Product names and metadata values are user-controlled. The `escape`
//! module converts them into bytes the PDF fonts can render safely.

pub mod escape;
mod json;
pub mod layout;
mod pdf;
pub mod sections;
mod summary;
mod types;

pub use json::JsonReporter;
pub use pdf::{PdfRenderer, ReportArtifact, PDF_MEDIA_TYPE};
pub use sections::{build_sections, ScoredProduct};
pub use summary::SummaryReporter;
pub use types::{PageSize, ReportFormat, ReportOptions, DEFAULT_REPORT_TITLE};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failure; the PDF renderer never produces this
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate the complete report for a scored product
    fn generate_report(&self, scored: &ScoredProduct<'_>) -> Result<Vec<u8>, ReportError>;

    /// Write the report to a writer
    fn write_report(
        &self,
        scored: &ScoredProduct<'_>,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_report(scored)?;
        writer.write_all(&report)?;
        writer.flush()?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

impl ReportGenerator for PdfRenderer {
    fn generate_report(&self, scored: &ScoredProduct<'_>) -> Result<Vec<u8>, ReportError> {
        let mut buffer = Vec::new();
        self.render_scored(scored, &mut buffer)?;
        Ok(buffer)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Pdf
    }
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat, options: ReportOptions) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, options, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    options: ReportOptions,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Pdf => Box::new(PdfRenderer::new(options)),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use chrono::Utc;

    #[test]
    fn test_create_reporter_formats() {
        for format in [ReportFormat::Pdf, ReportFormat::Json, ReportFormat::Summary] {
            let reporter = create_reporter_with_options(format, ReportOptions::default(), false);
            assert_eq!(reporter.format(), format);
        }
    }

    #[test]
    fn test_write_report_uses_generated_bytes() {
        let product = Product::new("Widget", "acme");
        let scored = ScoredProduct::new(&product, Utc::now());
        let reporter = create_reporter_with_options(
            ReportFormat::Summary,
            ReportOptions::default(),
            false,
        );

        let mut out = Vec::new();
        reporter.write_report(&scored, &mut out).unwrap();
        assert_eq!(out, reporter.generate_report(&scored).unwrap());
    }
}
