//! Report type definitions.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default report title
pub const DEFAULT_REPORT_TITLE: &str = "Product Transparency Report";

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Paginated PDF document
    #[default]
    Pdf,
    /// Structured JSON score output
    Json,
    /// Brief terminal summary
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Paper size of generated documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// US Letter, 8.5 x 11 in
    #[default]
    Letter,
    /// ISO A4, 210 x 297 mm
    A4,
}

impl PageSize {
    /// Width and height in PDF points
    #[must_use]
    pub const fn dimensions(&self) -> (f32, f32) {
        match self {
            Self::Letter => (612.0, 792.0),
            Self::A4 => (595.28, 841.89),
        }
    }
}

/// Options controlling report content
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Title on the cover page
    pub title: String,
    pub page_size: PageSize,
    /// Render the questionnaire section when answers exist
    pub include_questions: bool,
    /// Render the raw metadata appendix
    pub include_appendix: bool,
    /// Fixed generation timestamp; `None` uses the current time
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            page_size: PageSize::default(),
            include_questions: true,
            include_appendix: true,
            generated_at: None,
        }
    }
}

impl ReportOptions {
    /// Pin the generation timestamp
    #[must_use]
    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Timestamp to stamp on the report
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.generated_at.unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format_display() {
        assert_eq!(ReportFormat::Pdf.to_string(), "pdf");
        assert_eq!(ReportFormat::Summary.to_string(), "summary");
    }

    #[test]
    fn test_page_dimensions() {
        assert_eq!(PageSize::Letter.dimensions(), (612.0, 792.0));
        let (w, h) = PageSize::A4.dimensions();
        assert!(w < h);
    }

    #[test]
    fn test_default_options() {
        let options = ReportOptions::default();
        assert_eq!(options.title, DEFAULT_REPORT_TITLE);
        assert!(options.include_questions);
        assert!(options.include_appendix);
        assert!(options.generated_at.is_none());
    }
}
