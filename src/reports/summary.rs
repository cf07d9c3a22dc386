//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use unicode_width::UnicodeWidthStr;

use super::{ReportError, ReportFormat, ReportGenerator, ScoredProduct};
use crate::quality::{key_findings, recommendations, Impact, TransparencyTier};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Pad `text` with spaces to `width` display columns
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

const fn tier_color(tier: TransparencyTier) -> &'static str {
    match tier {
        TransparencyTier::Excellent | TransparencyTier::Good => "green",
        TransparencyTier::Moderate => "yellow",
        TransparencyTier::Limited | TransparencyTier::Poor => "red",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn render(&self, scored: &ScoredProduct<'_>) -> String {
        let product = scored.product;
        let score = &scored.score;
        let mut lines = Vec::new();

        lines.push(self.color("Transparency Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {}",
            self.color("Product:", "cyan"),
            product.name.trim()
        ));
        if !product.company_id.trim().is_empty() {
            lines.push(format!(
                "{}  {}",
                self.color("Company:", "cyan"),
                product.company_id.trim()
            ));
        }
        lines.push(format!(
            "{}    {} ({})",
            self.color("Score:", "cyan"),
            self.color(&format!("{}/100", score.score), tier_color(score.tier)),
            score.tier.label()
        ));
        lines.push(format!("          {}", score.description));
        lines.push(String::new());

        lines.push(self.color("Categories:", "bold"));
        let label_width = score
            .breakdown
            .iter()
            .map(|c| c.category.title().width())
            .max()
            .unwrap_or(0);
        for category in &score.breakdown {
            lines.push(format!(
                "  {}  {:>2}/{:<2}  {:>3}%",
                pad(category.category.title(), label_width),
                category.earned,
                category.possible,
                category.percentage()
            ));
        }
        lines.push(String::new());

        lines.push(self.color("Key findings:", "bold"));
        for finding in key_findings(&product.metadata) {
            let (marker, color) = if finding.present {
                ("✓", "green")
            } else if finding.impact == Impact::High {
                ("✗", "red")
            } else {
                ("✗", "yellow")
            };
            lines.push(format!(
                "  {} {} {}",
                self.color(marker, color),
                pad(finding.label, 28),
                self.color(&format!("[{}]", finding.impact.label()), "dim")
            ));
        }

        let recs = recommendations(&product.metadata);
        if !recs.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Recommendations:", "bold"));
            for rec in recs {
                lines.push(format!("  • {}", rec.title));
            }
        }

        lines.join("\n") + "\n"
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_report(&self, scored: &ScoredProduct<'_>) -> Result<Vec<u8>, ReportError> {
        Ok(self.render(scored).into_bytes())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metadata, Product};
    use chrono::Utc;

    fn summary_text(product: &Product, reporter: &SummaryReporter) -> String {
        let scored = ScoredProduct::new(product, Utc::now());
        String::from_utf8(reporter.generate_report(&scored).unwrap()).unwrap()
    }

    #[test]
    fn test_summary_plain_text() {
        let product = Product::new("Organic Tee", "acme").with_metadata(
            Metadata::new()
                .with("product_name", "Organic Tee")
                .with("sustainability_rating", "good")
                .with("materials", "cotton"),
        );
        let text = summary_text(&product, &SummaryReporter::new().no_color());

        assert!(text.contains("Product:  Organic Tee"));
        assert!(text.contains("30/100 (Poor)"));
        assert!(text.contains("Calculate Carbon Footprint"));
        assert!(!text.contains("Establish Sustainability Rating"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_summary_colored() {
        let product = Product::new("Tee", "");
        let text = summary_text(&product, &SummaryReporter::new());
        assert!(text.contains("\x1b[31m0/100\x1b[0m"));
        assert!(!text.contains("Company:"));
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }
}
