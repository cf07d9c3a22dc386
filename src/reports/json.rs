//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator, ScoredProduct};
use crate::quality::{
    format_field_name, format_field_value, key_findings, recommendations, FindingStatus,
    Recommendation, TransparencyScore,
};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Include the formatted field listing per category
    include_fields: bool,
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_fields: true,
            pretty: true,
        }
    }

    /// Create a reporter that emits only the score and findings
    #[must_use]
    pub const fn score_only() -> Self {
        Self {
            include_fields: false,
            pretty: true,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn build<'a>(&self, scored: &'a ScoredProduct<'a>) -> JsonScoreReport<'a> {
        let product = scored.product;
        let fields = if self.include_fields {
            scored
                .fields
                .populated()
                .map(|category| JsonCategoryFields {
                    category: category.name(),
                    title: category.title(),
                    fields: scored
                        .fields
                        .get(category)
                        .iter()
                        .map(|&(key, value)| JsonField {
                            key,
                            label: format_field_name(key),
                            value: format_field_value(value),
                        })
                        .collect(),
                })
                .collect()
        } else {
            Vec::new()
        };

        JsonScoreReport {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            generated_at: scored.generated_at.to_rfc3339(),
            product: ProductInfo {
                id: product.id.as_deref(),
                name: &product.name,
                company_id: &product.company_id,
                metadata_fields: product.metadata.len(),
                questions: product.questions.len(),
            },
            score: &scored.score,
            key_findings: key_findings(&product.metadata),
            recommendations: recommendations(&product.metadata),
            fields,
        }
    }

    fn serialize<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.map_err(|e| ReportError::Serialization(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_report(&self, scored: &ScoredProduct<'_>) -> Result<Vec<u8>, ReportError> {
        let report = self.build(scored);
        let mut json = self.serialize(&report)?;
        json.push('\n');
        Ok(json.into_bytes())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonScoreReport<'a> {
    tool: ToolInfo,
    generated_at: String,
    product: ProductInfo<'a>,
    score: &'a TransparencyScore,
    key_findings: Vec<FindingStatus>,
    recommendations: Vec<&'static Recommendation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<JsonCategoryFields<'a>>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductInfo<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    name: &'a str,
    company_id: &'a str,
    metadata_fields: usize,
    questions: usize,
}

#[derive(Serialize)]
struct JsonCategoryFields<'a> {
    category: &'static str,
    title: &'static str,
    fields: Vec<JsonField<'a>>,
}

#[derive(Serialize)]
struct JsonField<'a> {
    key: &'a str,
    label: String,
    value: String,
}
