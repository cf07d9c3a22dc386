//! Integration tests for product-transparency
//!
//! These tests verify end-to-end functionality of product loading,
//! scoring, section building and report generation.

use chrono::{TimeZone, Utc};
use product_transparency::{
    parse_product_str,
    pipeline::load_product,
    quality::{recommendations, FieldCategory, TOTAL_POSSIBLE_POINTS},
    reports::{
        build_sections, create_reporter, layout::SectionKind, PdfRenderer, ReportFormat,
        ReportOptions, ScoredProduct, PDF_MEDIA_TYPE,
    },
    Metadata, Product, TransparencyScorer, TransparencyTier,
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn load_fixture(name: &str) -> Product {
    let path = fixture_path(&format!("products/{name}"));
    load_product(&path, true)
        .expect("Failed to load product fixture")
        .into_product()
}

fn pinned_options() -> ReportOptions {
    ReportOptions::default().generated_at(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap())
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

// ============================================================================
// Loading Tests
// ============================================================================

mod loading_tests {
    use super::*;

    #[test]
    fn test_load_minimal_product() {
        let product = load_fixture("minimal.json");
        assert_eq!(product.name, "X");
        assert_eq!(product.company_id, "C");
        assert!(product.metadata.is_empty());
        assert!(product.questions.is_empty());
        assert_eq!(product.report_file_name(), "report.pdf");
    }

    #[test]
    fn test_null_metadata_is_empty() {
        let product = load_fixture("null_metadata.json");
        assert!(product.metadata.is_empty());
        assert_eq!(product.report_file_name(), "report_3.pdf");
    }

    #[test]
    fn test_metadata_keeps_file_order() {
        let product = load_fixture("complete.json");
        let keys: Vec<&str> = product.metadata.iter().map(|(k, _)| k).take(3).collect();
        assert_eq!(keys, vec!["product_name", "brand", "category"]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_product(&fixture_path("products/does_not_exist.json"), true);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_product_str("").is_err());
        assert!(parse_product_str("not json").is_err());
        assert!(parse_product_str(r#"{"companyId": "C"}"#).is_err());
    }
}

// ============================================================================
// Scoring Tests
// ============================================================================

mod scoring_tests {
    use super::*;

    #[test]
    fn test_worked_example_scores_thirty() {
        let product = load_fixture("worked_example.json");
        let score = TransparencyScorer::new().score_product(&product);

        assert_eq!(score.score, 30);
        assert_eq!(score.tier, TransparencyTier::Poor);
        assert!(score.description.starts_with("Poor transparency"));
    }

    #[test]
    fn test_empty_metadata_scores_zero() {
        let score = TransparencyScorer::new().score(&Metadata::new());
        assert_eq!(score.score, 0);
        assert_eq!(score.tier, TransparencyTier::Poor);
        assert_eq!(score.possible_points, TOTAL_POSSIBLE_POINTS);
    }

    #[test]
    fn test_complete_product_scores_hundred() {
        let product = load_fixture("complete.json");
        let score = TransparencyScorer::new().score_product(&product);

        assert_eq!(score.score, 100);
        assert_eq!(score.tier, TransparencyTier::Excellent);
        for category in score.breakdown {
            assert_eq!(category.earned, category.possible, "{:?}", category.category);
        }
    }

    #[test]
    fn test_mixed_value_types_score() {
        // product_name 5 + category 4 + materials 15 + carbon_footprint 8 + certifications 10
        let product = load_fixture("with_questions.json");
        let score = TransparencyScorer::new().score_product(&product);
        assert_eq!(score.score, 42);
        assert_eq!(score.tier, TransparencyTier::Limited);
    }

    #[test]
    fn test_unknown_keys_do_not_change_score() {
        let base = Metadata::new().with("materials", "wool");
        let extended = base.clone().with("water_usage", "30L").with("dye", "none");
        let scorer = TransparencyScorer::new();
        assert_eq!(scorer.score(&base).score, scorer.score(&extended).score);
    }

    #[test]
    fn test_literal_false_string_counts_as_present() {
        let score = TransparencyScorer::new().score(&Metadata::new().with("materials", "false"));
        assert_eq!(score.score, 15);
    }

    #[test]
    fn test_carbon_recommendation_follows_presence() {
        let title = "Calculate Carbon Footprint";
        let without = Metadata::new().with("materials", "cotton");
        let with = without.clone().with("carbon_footprint", "2.1");

        assert!(recommendations(&without).iter().any(|r| r.title == title));
        assert!(!recommendations(&with).iter().any(|r| r.title == title));
    }
}

// ============================================================================
// Section Tests
// ============================================================================

mod section_tests {
    use super::*;

    fn kinds(product: &Product, options: &ReportOptions) -> Vec<SectionKind> {
        let scored = ScoredProduct::new(product, options.timestamp());
        build_sections(&scored, options)
            .into_iter()
            .map(|s| s.kind)
            .collect()
    }

    #[test]
    fn test_section_order_for_worked_example() {
        let product = load_fixture("worked_example.json");
        assert_eq!(
            kinds(&product, &pinned_options()),
            vec![
                SectionKind::Cover,
                SectionKind::Summary,
                SectionKind::Category(FieldCategory::Basic),
                SectionKind::Category(FieldCategory::Sustainability),
                SectionKind::Category(FieldCategory::Materials),
                SectionKind::Breakdown,
                SectionKind::Recommendations,
                SectionKind::Appendix,
            ]
        );
    }

    #[test]
    fn test_questions_section_only_with_answers() {
        let options = pinned_options();
        let with_questions = load_fixture("with_questions.json");
        assert!(kinds(&with_questions, &options).contains(&SectionKind::Questions));

        let minimal = load_fixture("minimal.json");
        assert!(!kinds(&minimal, &options).contains(&SectionKind::Questions));

        let options = ReportOptions {
            include_questions: false,
            ..pinned_options()
        };
        assert!(!kinds(&with_questions, &options).contains(&SectionKind::Questions));
    }

    #[test]
    fn test_complete_product_has_no_recommendations() {
        let product = load_fixture("complete.json");
        let options = pinned_options();
        let scored = ScoredProduct::new(&product, options.timestamp());
        let sections = build_sections(&scored, &options);
        let recs = sections
            .iter()
            .find(|s| s.kind == SectionKind::Recommendations)
            .expect("recommendations section");

        for title in [
            "Establish Sustainability Rating",
            "Calculate Carbon Footprint",
            "Obtain Sustainability Certifications",
            "Enhance Supplier Transparency",
        ] {
            assert!(!recs.contains_text(title), "unexpected {title}");
        }
    }

    #[test]
    fn test_category_tables_use_display_values() {
        let product = load_fixture("complete.json");
        let options = pinned_options();
        let scored = ScoredProduct::new(&product, options.timestamp());
        let sections = build_sections(&scored, &options);
        let basic = sections
            .iter()
            .find(|s| s.kind == SectionKind::Category(FieldCategory::Basic))
            .expect("basic section");

        assert!(basic.contains_text("Country of Origin"));
        assert!(basic.contains_text("Portugal"));
        assert!(basic.contains_text("Apparel & Textiles"));
    }
}

// ============================================================================
// Report Generation Tests
// ============================================================================

mod report_tests {
    use super::*;

    #[test]
    fn test_minimal_product_renders_zero_score() {
        let product = load_fixture("minimal.json");
        let pdf = PdfRenderer::new(pinned_options())
            .render(&product)
            .expect("render should succeed");

        assert!(!pdf.is_empty());
        assert!(pdf.starts_with(b"%PDF-"));
        assert!(contains(&pdf, b"0/100"));
    }

    #[test]
    fn test_render_is_deterministic_for_fixed_timestamp() {
        let product = load_fixture("with_questions.json");
        let renderer = PdfRenderer::new(pinned_options());
        let first = renderer.render(&product).unwrap();
        let second = renderer.render(&product).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_fixtures_render() {
        for name in [
            "minimal.json",
            "null_metadata.json",
            "worked_example.json",
            "complete.json",
            "with_questions.json",
        ] {
            let product = load_fixture(name);
            let pdf = PdfRenderer::new(pinned_options())
                .render(&product)
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            assert!(contains(&pdf, b"%%EOF"), "{name}");
        }
    }

    #[test]
    fn test_artifact_metadata() {
        let product = load_fixture("worked_example.json");
        let artifact = PdfRenderer::new(pinned_options())
            .render_artifact(&product)
            .unwrap();

        assert_eq!(artifact.file_name, "report_widget-1.pdf");
        assert_eq!(artifact.media_type, PDF_MEDIA_TYPE);
        assert!(artifact.bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_json_report_for_fixture() {
        let product = load_fixture("worked_example.json");
        let options = pinned_options();
        let scored = ScoredProduct::new(&product, options.timestamp());
        let bytes = create_reporter(ReportFormat::Json, options)
            .generate_report(&scored)
            .unwrap();

        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["score"]["score"], 30);
        assert_eq!(json["product"]["name"], "Widget");
        assert_eq!(json["recommendations"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_summary_report_for_fixture() {
        let product = load_fixture("with_questions.json");
        let options = pinned_options();
        let scored = ScoredProduct::new(&product, options.timestamp());
        let bytes = create_reporter(ReportFormat::Summary, options)
            .generate_report(&scored)
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("Bamboo Toothbrush"));
        assert!(text.contains("42/100"));
    }
}
