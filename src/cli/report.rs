//! Report command handler.
//!
//! Implements the `report` subcommand: renders the PDF transparency report
//! for a product.

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_product, output_report, OutputTarget, ReportRequest};
use crate::reports::{ReportFormat, PDF_MEDIA_TYPE};
use anyhow::Result;
use std::path::PathBuf;

/// Report command configuration
#[derive(Debug, Clone)]
pub struct ReportCommandConfig {
    pub product_path: PathBuf,
    pub quiet: bool,
}

/// Run the report command, returning the desired exit code.
///
/// Without an explicit output file the report is written to
/// `report_<productId>.pdf` in the working directory; `-` writes to stdout.
pub fn run_report(config: &ReportCommandConfig, app: &AppConfig) -> Result<i32> {
    let parsed = load_product(&config.product_path, config.quiet)?;
    let product = parsed.product();

    let target = OutputTarget::or_file(app.output.file.clone(), product.report_file_name());
    tracing::debug!("Rendering {} report to {:?}", PDF_MEDIA_TYPE, target);

    let request = ReportRequest {
        format: ReportFormat::Pdf,
        options: app.report_options(),
        target,
        use_color: false,
        quiet: config.quiet,
    };
    let score = output_report(product, &request)?;

    if !app.scoring.passes(score.score) {
        tracing::error!(
            "Transparency score {} is below minimum threshold {}",
            score.score,
            app.scoring.min_score.unwrap_or_default()
        );
        return Ok(exit_codes::BELOW_MIN_SCORE);
    }

    Ok(exit_codes::SUCCESS)
}
