//! Transparency scorer.
//!
//! Sums the points of present fields per category against the fixed
//! allocation in [`super::fields::FIELDS`] and maps the rounded
//! percentage to a [`TransparencyTier`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::fields::{fields_in, FieldCategory, TOTAL_POSSIBLE_POINTS};
use crate::model::{Metadata, Product};

/// Scoring engine version
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Qualitative band of a transparency score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TransparencyTier {
    /// 90-100
    Excellent,
    /// 75-89
    Good,
    /// 60-74
    Moderate,
    /// 40-59
    Limited,
    /// 0-39
    Poor,
}

impl TransparencyTier {
    /// Tier for a score in 0..=100
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            75..=89 => Self::Good,
            60..=74 => Self::Moderate,
            40..=59 => Self::Limited,
            _ => Self::Poor,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Limited => "Limited",
            Self::Poor => "Poor",
        }
    }

    /// Human-readable tier description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Excellent => {
                "Excellent transparency - comprehensive disclosure across all categories"
            }
            Self::Good => "Good transparency - most key information is disclosed",
            Self::Moderate => "Moderate transparency - several important gaps remain",
            Self::Limited => "Limited transparency - significant information is missing",
            Self::Poor => "Poor transparency - minimal disclosure provided",
        }
    }
}

impl std::fmt::Display for TransparencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Points earned within one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: FieldCategory,
    pub earned: u32,
    pub possible: u32,
}

impl CategoryScore {
    /// Share of the category's points earned, rounded to a whole percent
    #[must_use]
    pub fn percentage(&self) -> u32 {
        rounded_percentage(self.earned, self.possible)
    }
}

/// Result of scoring one metadata mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct TransparencyScore {
    /// Scoring engine version
    pub scoring_engine_version: String,
    /// Overall score (0-100)
    pub score: u8,
    /// Band the score falls in
    pub tier: TransparencyTier,
    /// Tier description
    pub description: String,
    pub earned_points: u32,
    pub possible_points: u32,
    /// Per-category points, in report order
    pub breakdown: Vec<CategoryScore>,
}

impl TransparencyScore {
    #[must_use]
    pub fn category(&self, category: FieldCategory) -> Option<&CategoryScore> {
        self.breakdown.iter().find(|c| c.category == category)
    }
}

/// Transparency scorer over the fixed field allocation
#[derive(Debug, Clone, Default)]
pub struct TransparencyScorer;

impl TransparencyScorer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Score a metadata mapping. Never fails; unknown keys are ignored.
    pub fn score(&self, metadata: &Metadata) -> TransparencyScore {
        let breakdown: Vec<CategoryScore> = FieldCategory::ALL
            .iter()
            .map(|category| Self::score_category(*category, metadata))
            .collect();

        let earned_points: u32 = breakdown.iter().map(|c| c.earned).sum();
        let possible_points = TOTAL_POSSIBLE_POINTS;
        let score = rounded_percentage(earned_points, possible_points).min(100) as u8;
        let tier = TransparencyTier::from_score(score);

        tracing::debug!(
            earned_points,
            possible_points,
            score,
            tier = tier.label(),
            "scored metadata"
        );

        TransparencyScore {
            scoring_engine_version: SCORING_ENGINE_VERSION.to_string(),
            score,
            tier,
            description: tier.description().to_string(),
            earned_points,
            possible_points,
            breakdown,
        }
    }

    /// Score a product's metadata
    pub fn score_product(&self, product: &Product) -> TransparencyScore {
        self.score(&product.metadata)
    }

    fn score_category(category: FieldCategory, metadata: &Metadata) -> CategoryScore {
        let mut scored_groups = HashSet::new();
        let earned = fields_in(category)
            .filter(|spec| metadata.is_present(spec.key))
            .filter(|spec| scored_groups.insert(spec.score_key()))
            .map(|spec| spec.points)
            .sum();

        CategoryScore {
            category,
            earned,
            possible: category.possible_points(),
        }
    }
}

/// `round(100 * earned / possible)`, half away from zero
fn rounded_percentage(earned: u32, possible: u32) -> u32 {
    if possible == 0 {
        return 0;
    }
    (earned * 200 + possible) / (possible * 2)
}
