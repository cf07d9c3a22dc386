//! **Transparency scoring and PDF reporting for product disclosures.**
//!
//! `product-transparency` assesses how completely a product's published
//! metadata discloses its origin, environmental performance, materials,
//! certifications and supply chain. It produces a weighted score from 0 to
//! 100, groups the disclosed fields into report categories with readable
//! labels, and renders a paginated PDF report.
//!
//! ## Key Features
//!
//! - **Weighted Scoring**: A fixed rubric of known metadata keys, each worth
//!   a number of points, grouped into five categories that sum to 100.
//! - **Categorization & Formatting**: Present fields are split into basic,
//!   sustainability, materials, certifications and additional buckets, with
//!   display labels and long-form descriptions for enumerated values.
//! - **PDF Reports**: Cover page, summary with key findings, per-category
//!   tables, questionnaire answers, score breakdown, recommendations and a
//!   raw-metadata appendix.
//! - **Machine-readable Output**: JSON score reports and a compact terminal
//!   summary for CI quality gates.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Product`] records and their insertion-ordered
//!   [`Metadata`] mapping.
//! - **[`quality`]**: The field vocabulary, categorizer, formatter and
//!   [`TransparencyScorer`].
//! - **[`reports`]**: Section builders and the [`PdfRenderer`], JSON and
//!   summary reporters.
//! - **[`pipeline`]**: Loading products and writing reports to files or
//!   stdout.
//!
//! ## Getting Started
//!
//! ```
//! use product_transparency::{Metadata, PdfRenderer, Product, TransparencyScorer};
//!
//! let product = Product::new("Organic Tee", "acme").with_metadata(
//!     Metadata::new()
//!         .with("product_name", "Organic Tee")
//!         .with("sustainability_rating", "good")
//!         .with("materials", "organic cotton"),
//! );
//!
//! let score = TransparencyScorer::new().score(&product.metadata);
//! assert_eq!(score.score, 30);
//!
//! let pdf = PdfRenderer::default().render(&product)?;
//! assert!(pdf.starts_with(b"%PDF-"));
//! # Ok::<(), product_transparency::reports::ReportError>(())
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the library crate. The `product-transparency`
//! binary wraps it with `score`, `report` and `fields` commands.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Layout math converts between point sizes and column counts
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod quality;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, OutputConfig, ReportConfig, ScoringConfig};
pub use config::{ConfigError, ConfigOverrides, Validatable};
pub use error::{ErrorContext, Result, TransparencyError};
pub use model::{Metadata, Product, QuestionAnswer};
pub use pipeline::parse_product_str;
pub use quality::{
    categorize, CategorizedFields, FieldCategory, TransparencyScore, TransparencyScorer,
    TransparencyTier,
};
pub use reports::{
    PdfRenderer, ReportArtifact, ReportFormat, ReportGenerator, ReportOptions, ScoredProduct,
};
