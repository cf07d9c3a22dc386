//! Configuration module for product-transparency.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```
//! use product_transparency::config::{AppConfig, Validatable};
//! use product_transparency::reports::PageSize;
//!
//! let config = AppConfig::builder()
//!     .title("Supplier Audit")
//!     .page_size(PageSize::A4)
//!     .min_score(60)
//!     .build();
//!
//! assert!(config.is_valid());
//! assert_eq!(config.report_options().title, "Supplier Audit");
//! ```
//!
//! # Configuration File
//!
//! Place a `.product-transparency.yaml` file in your project root or
//! `~/.config/product-transparency/`:
//!
//! ```yaml
//! report:
//!   title: Supplier Audit
//!   page_size: a4
//! scoring:
//!   min_score: 60
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, AppConfigBuilder, OutputConfig, ReportConfig, ScoringConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError, ConfigOverrides,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option that can be set in
/// `.product-transparency.yaml` and can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        let properties = &value["properties"];
        assert!(properties.get("report").is_some());
        assert!(properties.get("output").is_some());
        assert!(properties.get("scoring").is_some());
    }
}
