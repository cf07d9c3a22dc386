//! Transparency scoring module.
//!
//! Assesses how completely a product's metadata discloses the information
//! buyers and regulators look for, against a fixed weighted rubric.
//!
//! # Features
//!
//! - **Field vocabulary**: one static table declares every known key with
//!   its category, display label and points
//! - **Categorization**: splits present metadata entries into basic,
//!   sustainability, materials, certifications and additional buckets
//! - **Formatting**: display names for keys and long-form descriptions for
//!   enumerated values
//! - **Scoring**: weighted completeness score (0-100) with a tier description
//! - **Findings & recommendations**: fixed summary rows and improvement
//!   suggestions for missing disclosures
//!
//! # Usage
//!
//! ```
//! use product_transparency::model::Metadata;
//! use product_transparency::quality::TransparencyScorer;
//!
//! let metadata = Metadata::new()
//!     .with("product_name", "Widget")
//!     .with("materials", "cotton");
//! let result = TransparencyScorer::new().score(&metadata);
//!
//! assert_eq!(result.score, 20);
//! println!("{}/100: {}", result.score, result.description);
//! ```

mod categorize;
mod fields;
mod findings;
mod format;
mod scorer;

pub use categorize::{categorize, CategorizedFields};
pub use fields::{
    category_of, field_spec, fields_in, FieldCategory, FieldSpec, FIELDS, TOTAL_POSSIBLE_POINTS,
};
pub use findings::{
    key_findings, recommendations, FindingStatus, Impact, KeyFinding, Recommendation,
    KEY_FINDINGS, RECOMMENDATIONS,
};
pub use format::{describe_value, format_field_name, format_field_value};
pub use scorer::{
    CategoryScore, TransparencyScore, TransparencyScorer, TransparencyTier,
    SCORING_ENGINE_VERSION,
};
