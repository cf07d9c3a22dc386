//! Display formatting for metadata keys and values.

use serde_json::Value;

use super::fields::field_spec;
use crate::model::value_to_string;

/// Long-form descriptions substituted for enumerated metadata values.
///
/// Matching is exact and case-sensitive; one value maps to one description
/// regardless of which field carries it.
static VALUE_VOCABULARY: &[(&str, &str)] = &[
    // Sustainability rating tiers
    ("excellent", "Excellent - Industry-leading sustainability practices"),
    ("good", "Good - Meets most sustainability standards"),
    ("fair", "Fair - Some sustainability measures in place"),
    ("poor", "Poor - Limited sustainability practices"),
    // Recyclability tiers
    ("fully_recyclable", "Fully recyclable"),
    ("partially_recyclable", "Partially recyclable"),
    ("not_recyclable", "Not recyclable"),
    // Packaging tiers
    ("plastic_free", "Plastic-free packaging"),
    ("minimal_plastic", "Minimal plastic packaging"),
    ("recycled_materials", "Packaging made from recycled materials"),
    ("conventional", "Conventional packaging"),
    // Product category tiers
    ("apparel", "Apparel & Textiles"),
    ("food", "Food & Beverage"),
    ("electronics", "Consumer Electronics"),
    ("cosmetics", "Cosmetics & Personal Care"),
    ("home", "Home & Living"),
    // Country codes
    ("US", "United States"),
    ("CN", "China"),
    ("IN", "India"),
    ("BD", "Bangladesh"),
    ("VN", "Vietnam"),
    ("DE", "Germany"),
    ("IT", "Italy"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("JP", "Japan"),
    ("PT", "Portugal"),
    ("TR", "Turkey"),
    // Sourcing tiers
    ("local", "Locally sourced"),
    ("regional", "Regionally sourced"),
    ("international", "Internationally sourced"),
    ("mixed", "Mixed sourcing"),
];

/// Long-form description for an enumerated value, if it has one
#[must_use]
pub fn describe_value(value: &str) -> Option<&'static str> {
    VALUE_VOCABULARY
        .iter()
        .find(|(short, _)| *short == value)
        .map(|(_, long)| *long)
}

/// Display name for a metadata key.
///
/// Known keys use their declared label; anything else has underscores
/// turned into spaces and each word capitalized.
#[must_use]
pub fn format_field_name(key: &str) -> String {
    if let Some(spec) = field_spec(key) {
        return spec.label.to_string();
    }

    let mut out = String::with_capacity(key.len());
    let mut prev_is_word = false;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric();
        if is_word && !prev_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

/// Display string for a metadata value.
///
/// Non-strings are stringified; strings in the enumerated vocabulary are
/// replaced with their description; any other string is returned as-is.
#[must_use]
pub fn format_field_value(value: &Value) -> String {
    match value {
        Value::String(s) => describe_value(s).map_or_else(|| s.clone(), str::to_string),
        other => value_to_string(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_known_field_names() {
        assert_eq!(format_field_name("product_name"), "Product Name");
        assert_eq!(
            format_field_name("carbon_footprint"),
            "Carbon Footprint (kg CO2e)"
        );
        assert_eq!(format_field_name("origin_country"), "Country of Origin");
    }

    #[test]
    fn test_unknown_field_name_fallback() {
        assert_eq!(format_field_name("water_usage"), "Water Usage");
        assert_eq!(format_field_name("supply_chain_tier_2"), "Supply Chain Tier 2");
        assert_eq!(format_field_name("already Spaced"), "Already Spaced");
        assert_eq!(format_field_name("x"), "X");
        assert_eq!(format_field_name(""), "");
    }

    #[test]
    fn test_value_substitution() {
        assert_eq!(
            format_field_value(&json!("good")),
            "Good - Meets most sustainability standards"
        );
        assert_eq!(format_field_value(&json!("BD")), "Bangladesh");
        assert_eq!(format_field_value(&json!("plastic_free")), "Plastic-free packaging");
    }

    #[test]
    fn test_value_passthrough() {
        assert_eq!(format_field_value(&json!("organic cotton")), "organic cotton");
        // Case-sensitive lookup
        assert_eq!(format_field_value(&json!("Good")), "Good");
        assert_eq!(format_field_value(&json!("us")), "us");
    }

    #[test]
    fn test_non_string_values_are_stringified() {
        assert_eq!(format_field_value(&json!(4.5)), "4.5");
        assert_eq!(format_field_value(&json!(true)), "true");
        assert_eq!(format_field_value(&json!(null)), "null");
    }

    #[test]
    fn test_vocabulary_keys_unique() {
        let mut seen = HashSet::new();
        for (short, _) in VALUE_VOCABULARY {
            assert!(seen.insert(*short), "duplicate vocabulary entry {short}");
        }
    }
}
