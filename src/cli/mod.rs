//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod fields;
mod report;
mod score;

pub use fields::run_fields;
pub use report::{run_report, ReportCommandConfig};
pub use score::{run_score, ScoreConfig};

// Re-export config types used by handlers
pub use crate::config::AppConfig;
