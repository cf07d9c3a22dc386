//! Pipeline orchestration for transparency reports.
//!
//! This module provides shared orchestration logic for load → score → report
//! workflows, reducing duplication across CLI command handlers.

mod output;
mod parse;
mod report_stage;

pub use output::{should_use_color, write_bytes, write_output, OutputTarget};
pub use parse::{load_product, parse_product_str, read_product_source, ParsedProduct};
pub use report_stage::{output_report, ReportRequest};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - report written, score at or above any configured minimum
    pub const SUCCESS: i32 = 0;
    /// The score fell below the configured minimum
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
