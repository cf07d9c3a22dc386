//! Score command handler.
//!
//! Implements the `score` subcommand: computes the transparency score of a
//! product and prints it as a terminal summary, JSON or PDF.

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_product, should_use_color, write_bytes, OutputTarget};
use crate::reports::{
    create_reporter_with_options, JsonReporter, ReportFormat, ReportGenerator, ScoredProduct,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Score command configuration
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub product_path: PathBuf,
    /// Include the per-category field listing in JSON output
    pub include_fields: bool,
    pub quiet: bool,
}

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(config: &ScoreConfig, app: &AppConfig) -> Result<i32> {
    let parsed = load_product(&config.product_path, config.quiet)?;
    let product = parsed.product();
    let options = app.report_options();
    let scored = ScoredProduct::new(product, options.timestamp());

    let format = app.output.format;
    let reporter: Box<dyn ReportGenerator> = match format {
        ReportFormat::Json if !config.include_fields => Box::new(JsonReporter::score_only()),
        other => {
            create_reporter_with_options(other, options, should_use_color(app.output.no_color))
        }
    };
    let bytes = reporter
        .generate_report(&scored)
        .with_context(|| format!("Failed to generate {format} output"))?;

    let target = OutputTarget::from_option(app.output.file.clone());
    write_bytes(&bytes, &target, config.quiet)?;

    let score = scored.score.score;
    if !app.scoring.passes(score) {
        tracing::error!(
            "Transparency score {} is below minimum threshold {}",
            score,
            app.scoring.min_score.unwrap_or_default()
        );
        return Ok(exit_codes::BELOW_MIN_SCORE);
    }

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_product(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("product.json");
        std::fs::write(
            &path,
            r#"{"name": "Tee", "companyId": "acme",
                "metadata": {"product_name": "Tee", "sustainability_rating": "good", "materials": "cotton"}}"#,
        )
        .unwrap();
        path
    }

    fn score_config(path: PathBuf) -> ScoreConfig {
        ScoreConfig {
            product_path: path,
            include_fields: false,
            quiet: true,
        }
    }

    #[test]
    fn test_score_json_to_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("score.json");
        let app = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(out.clone()))
            .build();

        let code = run_score(&score_config(write_product(&tmp)), &app).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let json: serde_json::Value = serde_json::from_slice(&std::fs::read(out).unwrap()).unwrap();
        assert_eq!(json["score"]["score"], 30);
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn test_score_below_minimum() {
        let tmp = TempDir::new().unwrap();
        let app = AppConfig::builder()
            .output_file(Some(tmp.path().join("summary.txt")))
            .no_color(true)
            .min_score(31)
            .build();

        let code = run_score(&score_config(write_product(&tmp)), &app).unwrap();
        assert_eq!(code, exit_codes::BELOW_MIN_SCORE);
    }

    #[test]
    fn test_score_at_minimum_passes() {
        let tmp = TempDir::new().unwrap();
        let app = AppConfig::builder()
            .output_file(Some(tmp.path().join("summary.txt")))
            .min_score(30)
            .build();

        let code = run_score(&score_config(write_product(&tmp)), &app).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }
}
