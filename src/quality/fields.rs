//! Static metadata field vocabulary.
//!
//! Every known metadata key is declared exactly once in [`FIELDS`], with
//! its category, display label and score weight. Categorization, display
//! names and scoring all read from this table, so adding a field is a
//! single-line change here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Total points available across all categories.
pub const TOTAL_POSSIBLE_POINTS: u32 = 100;

/// Disclosure category of a metadata field
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum FieldCategory {
    /// Identification of the product and its origin
    Basic,
    /// Environmental performance
    Sustainability,
    /// Material composition and sourcing
    Materials,
    /// Third-party certifications
    Certifications,
    /// Supply chain details and any unrecognized key
    Additional,
}

impl FieldCategory {
    /// All categories in report order
    pub const ALL: [Self; 5] = [
        Self::Basic,
        Self::Sustainability,
        Self::Materials,
        Self::Certifications,
        Self::Additional,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Sustainability => "sustainability",
            Self::Materials => "materials",
            Self::Certifications => "certifications",
            Self::Additional => "additional",
        }
    }

    /// Heading used in reports
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Basic => "Basic Information",
            Self::Sustainability => "Sustainability",
            Self::Materials => "Materials & Composition",
            Self::Certifications => "Certifications",
            Self::Additional => "Additional Information",
        }
    }

    /// Points this category contributes to [`TOTAL_POSSIBLE_POINTS`]
    #[must_use]
    pub const fn possible_points(&self) -> u32 {
        match self {
            Self::Basic => 20,
            Self::Sustainability => 30,
            Self::Materials => 25,
            Self::Certifications => 15,
            Self::Additional => 10,
        }
    }
}

impl std::fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Declaration of one known metadata field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Metadata key
    pub key: &'static str,
    /// Category the key belongs to
    pub category: FieldCategory,
    /// Human-readable label
    pub label: &'static str,
    /// Points earned when the field is present
    pub points: u32,
    /// Fields sharing a group score once, when any member is present
    pub group: Option<&'static str>,
}

impl FieldSpec {
    const fn new(
        key: &'static str,
        category: FieldCategory,
        label: &'static str,
        points: u32,
    ) -> Self {
        Self {
            key,
            category,
            label,
            points,
            group: None,
        }
    }

    const fn grouped(mut self, group: &'static str) -> Self {
        self.group = Some(group);
        self
    }

    /// Key under which this field is scored
    #[must_use]
    pub fn score_key(&self) -> &'static str {
        self.group.unwrap_or(self.key)
    }
}

use FieldCategory::{Additional, Basic, Certifications, Materials, Sustainability};

/// The known field vocabulary.
pub static FIELDS: &[FieldSpec] = &[
    FieldSpec::new("product_name", Basic, "Product Name", 5),
    FieldSpec::new("brand", Basic, "Brand", 3),
    FieldSpec::new("category", Basic, "Product Category", 4),
    FieldSpec::new("origin_country", Basic, "Country of Origin", 4),
    FieldSpec::new("manufacturer", Basic, "Manufacturer", 4),
    FieldSpec::new("sustainability_rating", Sustainability, "Sustainability Rating", 10),
    FieldSpec::new("carbon_footprint", Sustainability, "Carbon Footprint (kg CO2e)", 8),
    FieldSpec::new("recyclability", Sustainability, "Recyclability", 6),
    FieldSpec::new("packaging", Sustainability, "Packaging", 6),
    FieldSpec::new("materials", Materials, "Primary Materials", 15),
    FieldSpec::new("fabric_composition", Materials, "Fabric Composition", 5).grouped("composition"),
    FieldSpec::new("ingredients_source", Materials, "Ingredients Source", 5).grouped("composition"),
    FieldSpec::new("material_sourcing", Materials, "Material Sourcing", 5),
    FieldSpec::new("certifications", Certifications, "Certifications", 10),
    FieldSpec::new("certification_body", Certifications, "Certification Body", 5),
    FieldSpec::new("supplier_info", Additional, "Supplier Information", 5),
    FieldSpec::new("manufacturing_process", Additional, "Manufacturing Process", 3),
    FieldSpec::new("notes", Additional, "Additional Notes", 2),
];

/// Look up a known field by key
#[must_use]
pub fn field_spec(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.key == key)
}

/// Category of a key; unknown keys fall into [`FieldCategory::Additional`].
#[must_use]
pub fn category_of(key: &str) -> FieldCategory {
    field_spec(key).map_or(FieldCategory::Additional, |spec| spec.category)
}

/// Known fields of a category, in declaration order
pub fn fields_in(category: FieldCategory) -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(move |spec| spec.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    /// Points of a category counting each score group once
    fn grouped_points(category: FieldCategory) -> u32 {
        let mut seen = HashSet::new();
        fields_in(category)
            .filter(|spec| seen.insert(spec.score_key()))
            .map(|spec| spec.points)
            .sum()
    }

    #[test]
    fn test_keys_are_unique() {
        let mut seen = HashSet::new();
        for spec in FIELDS {
            assert!(seen.insert(spec.key), "duplicate key {}", spec.key);
        }
    }

    #[test]
    fn test_category_points_match_table() {
        for category in FieldCategory::ALL {
            assert_eq!(
                grouped_points(category),
                category.possible_points(),
                "{category} points drift from the declared allocation"
            );
        }
    }

    #[test]
    fn test_total_possible_is_constant_sum() {
        let total: u32 = FieldCategory::ALL
            .iter()
            .map(FieldCategory::possible_points)
            .sum();
        assert_eq!(total, TOTAL_POSSIBLE_POINTS);
        let from_fields: u32 = FieldCategory::ALL.iter().map(|c| grouped_points(*c)).sum();
        assert_eq!(from_fields, TOTAL_POSSIBLE_POINTS);
    }

    #[test]
    fn test_group_members_share_category_and_points() {
        let mut groups: HashMap<&str, (FieldCategory, u32)> = HashMap::new();
        for spec in FIELDS.iter().filter(|s| s.group.is_some()) {
            let entry = groups
                .entry(spec.score_key())
                .or_insert((spec.category, spec.points));
            assert_eq!(*entry, (spec.category, spec.points), "group {}", spec.score_key());
        }
        assert_eq!(
            field_spec("fabric_composition").and_then(|s| s.group),
            field_spec("ingredients_source").and_then(|s| s.group)
        );
    }

    #[test]
    fn test_unknown_keys_are_additional() {
        assert_eq!(category_of("product_name"), FieldCategory::Basic);
        assert_eq!(category_of("carbon_footprint"), FieldCategory::Sustainability);
        assert_eq!(category_of("water_usage"), FieldCategory::Additional);
        assert_eq!(category_of(""), FieldCategory::Additional);
    }
}
