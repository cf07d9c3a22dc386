//! Configuration validation for product-transparency.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, OutputConfig, ReportConfig, ScoringConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.report.validate());
        errors.extend(self.output.validate());
        errors.extend(self.scoring.validate());
        errors
    }
}

impl Validatable for ReportConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(ConfigError {
                field: "report.title".to_string(),
                message: "Report title must not be empty".to_string(),
            });
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!(
                            "Parent directory does not exist: {}",
                            parent.display()
                        ),
                    });
                }
            }
        }

        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min_score) = self.min_score {
            if min_score > 100 {
                errors.push(ConfigError {
                    field: "scoring.min_score".to_string(),
                    message: format!("Minimum score must be between 0 and 100, got {min_score}"),
                });
            }
        }
        errors
    }
}
