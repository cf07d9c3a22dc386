//! Configuration types for product-transparency operations.
//!
//! Provides structured configuration for scoring and report rendering.

use crate::reports::{PageSize, ReportFormat, ReportOptions, DEFAULT_REPORT_TITLE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are applied over file settings with
/// [`AppConfig::apply_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Report content and layout
    pub report: ReportConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Scoring gate
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Renderer options derived from the report section
    #[must_use]
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            title: self.report.title.clone(),
            page_size: self.report.page_size,
            include_questions: self.report.include_questions,
            include_appendix: self.report.include_appendix,
            generated_at: None,
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the report title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.report.title = title.into();
        self
    }

    /// Set the page size.
    pub const fn page_size(mut self, page_size: PageSize) -> Self {
        self.config.report.page_size = page_size;
        self
    }

    /// Include or omit the raw metadata appendix.
    pub const fn include_appendix(mut self, include: bool) -> Self {
        self.config.report.include_appendix = include;
        self
    }

    /// Include or omit the questionnaire section.
    pub const fn include_questions(mut self, include: bool) -> Self {
        self.config.report.include_questions = include;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file path.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Fail when the score falls below `min_score`.
    pub const fn min_score(mut self, min_score: u8) -> Self {
        self.config.scoring.min_score = Some(min_score);
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Configuration Types
// ============================================================================

/// Report content and layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReportConfig {
    /// Title printed on the cover page
    pub title: String,
    /// Paper size: letter or a4
    pub page_size: PageSize,
    /// Render the questions & answers section when answers exist
    pub include_questions: bool,
    /// Render the raw metadata appendix
    pub include_appendix: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            page_size: PageSize::default(),
            include_questions: true,
            include_appendix: true,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for the score command: summary, json or pdf
    pub format: ReportFormat,
    /// Output file path (None for the command default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Summary,
            file: None,
            no_color: false,
        }
    }
}

/// Scoring gate configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Exit with a failure code when the score is below this value (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u8>,
}

impl ScoringConfig {
    /// Whether `score` passes the configured gate
    #[must_use]
    pub fn passes(&self, score: u8) -> bool {
        self.min_score.map_or(true, |min| score >= min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .title("Supplier Audit")
            .page_size(PageSize::A4)
            .include_appendix(false)
            .min_score(60)
            .build();

        assert_eq!(config.report.title, "Supplier Audit");
        assert_eq!(config.report.page_size, PageSize::A4);
        assert!(!config.report.include_appendix);
        assert!(config.report.include_questions);
        assert_eq!(config.scoring.min_score, Some(60));
    }

    #[test]
    fn test_report_options_follow_config() {
        let config = AppConfig::builder().title("T").include_questions(false).build();
        let options = config.report_options();
        assert_eq!(options.title, "T");
        assert!(!options.include_questions);
        assert!(options.generated_at.is_none());
    }

    #[test]
    fn test_scoring_gate() {
        assert!(ScoringConfig::default().passes(0));
        let gate = ScoringConfig {
            min_score: Some(50),
        };
        assert!(gate.passes(50));
        assert!(!gate.passes(49));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("scoring:\n  min_score: 40\n").unwrap();
        assert_eq!(config.scoring.min_score, Some(40));
        assert_eq!(config.report.title, DEFAULT_REPORT_TITLE);
        assert_eq!(config.output.format, ReportFormat::Summary);
    }
}
