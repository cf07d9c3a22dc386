//! Report output stage.
//!
//! Scores a product, renders it in the requested format and writes the
//! result to the configured destination.

use crate::model::Product;
use crate::quality::TransparencyScore;
use crate::reports::{create_reporter_with_options, ReportFormat, ReportOptions, ScoredProduct};
use anyhow::{Context, Result};

use super::{write_bytes, OutputTarget};

/// Settings for one report run
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub format: ReportFormat,
    pub options: ReportOptions,
    pub target: OutputTarget,
    pub use_color: bool,
    pub quiet: bool,
}

/// Render `product` and write it to the request's target.
///
/// Returns the score so callers can apply a quality gate.
pub fn output_report(product: &Product, request: &ReportRequest) -> Result<TransparencyScore> {
    let scored = ScoredProduct::new(product, request.options.timestamp());
    if !request.quiet {
        tracing::info!(
            "Transparency score for '{}': {}/100 ({})",
            product.name,
            scored.score.score,
            scored.score.tier
        );
    }

    let reporter = create_reporter_with_options(
        request.format,
        request.options.clone(),
        request.use_color,
    );
    let bytes = reporter
        .generate_report(&scored)
        .with_context(|| format!("Failed to generate {} report", request.format))?;

    write_bytes(&bytes, &request.target, request.quiet)?;
    Ok(scored.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Metadata;
    use tempfile::TempDir;

    #[test]
    fn test_output_pdf_report_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.pdf");
        let product = Product::new("Tee", "acme")
            .with_metadata(Metadata::new().with("materials", "cotton"));
        let request = ReportRequest {
            format: ReportFormat::Pdf,
            options: ReportOptions::default(),
            target: OutputTarget::File(path.clone()),
            use_color: false,
            quiet: true,
        };

        let score = output_report(&product, &request).unwrap();
        assert_eq!(score.score, 15);
        assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF-"));
    }

    #[test]
    fn test_output_json_report_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("score.json");
        let request = ReportRequest {
            format: ReportFormat::Json,
            options: ReportOptions::default(),
            target: OutputTarget::File(path.clone()),
            use_color: false,
            quiet: true,
        };

        output_report(&Product::new("Tee", "acme"), &request).unwrap();
        let json: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(json["score"]["score"], 0);
    }
}
