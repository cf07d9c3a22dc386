//! Fixed key-finding rows and improvement recommendations.

use serde::{Deserialize, Serialize};

use crate::model::Metadata;

/// How much a disclosure gap matters to the overall assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// A disclosure area highlighted in the report summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFinding {
    pub key: &'static str,
    pub label: &'static str,
    pub impact: Impact,
}

/// Summary rows, in display order.
pub static KEY_FINDINGS: &[KeyFinding] = &[
    KeyFinding {
        key: "sustainability_rating",
        label: "Sustainability Rating",
        impact: Impact::High,
    },
    KeyFinding {
        key: "carbon_footprint",
        label: "Carbon Footprint",
        impact: Impact::High,
    },
    KeyFinding {
        key: "certifications",
        label: "Certifications",
        impact: Impact::High,
    },
    KeyFinding {
        key: "materials",
        label: "Materials Disclosure",
        impact: Impact::Medium,
    },
    KeyFinding {
        key: "supplier_info",
        label: "Supplier Transparency",
        impact: Impact::Medium,
    },
    KeyFinding {
        key: "recyclability",
        label: "End-of-Life Recyclability",
        impact: Impact::Low,
    },
];

/// Evaluated key finding
#[derive(Debug, Clone, Serialize)]
pub struct FindingStatus {
    pub label: &'static str,
    pub present: bool,
    pub impact: Impact,
}

impl FindingStatus {
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.present {
            "Disclosed"
        } else {
            "Missing"
        }
    }
}

/// Evaluate every key finding against `metadata`
#[must_use]
pub fn key_findings(metadata: &Metadata) -> Vec<FindingStatus> {
    KEY_FINDINGS
        .iter()
        .map(|finding| FindingStatus {
            label: finding.label,
            present: metadata.is_present(finding.key),
            impact: finding.impact,
        })
        .collect()
}

/// Improvement suggestion emitted when its trigger field is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Field whose absence triggers the recommendation
    pub trigger: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

/// Recommendation rules, in output order.
pub static RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        trigger: "sustainability_rating",
        title: "Establish Sustainability Rating",
        message: "Obtain an independent sustainability assessment so buyers can compare \
                  this product against recognised benchmarks.",
    },
    Recommendation {
        trigger: "carbon_footprint",
        title: "Calculate Carbon Footprint",
        message: "Measure lifecycle greenhouse gas emissions and publish the result in \
                  kg CO2e per unit.",
    },
    Recommendation {
        trigger: "certifications",
        title: "Obtain Sustainability Certifications",
        message: "Pursue third-party certifications relevant to the product category, \
                  such as GOTS, Fair Trade or B Corp.",
    },
    Recommendation {
        trigger: "supplier_info",
        title: "Enhance Supplier Transparency",
        message: "Disclose the main suppliers and production sites in the supply chain.",
    },
];

/// Recommendations whose trigger field is absent from `metadata`
#[must_use]
pub fn recommendations(metadata: &Metadata) -> Vec<&'static Recommendation> {
    RECOMMENDATIONS
        .iter()
        .filter(|rec| !metadata.is_present(rec.trigger))
        .collect()
}
