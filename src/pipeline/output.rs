//! Output handling for reports.
//!
//! Provides output target selection and writers for text and binary reports.

use anyhow::{Context, Result};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

/// Target for output - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path; `-` selects stdout
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() == "-" => Self::Stdout,
            Some(p) => Self::File(p),
            None => Self::Stdout,
        }
    }

    /// Like [`OutputTarget::from_option`] but falls back to `default` instead of stdout
    #[must_use]
    pub fn or_file(path: Option<PathBuf>, default: impl Into<PathBuf>) -> Self {
        Self::from_option(Some(path.unwrap_or_else(|| default.into())))
    }

    /// Check if output is to a terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }

    /// Path of a file target
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File(p) => Some(p),
        }
    }
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Write text output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            print!("{content}");
            std::io::stdout().flush().context("Failed to flush stdout")?;
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("Report written to {:?}", path);
            }
            Ok(())
        }
    }
}

/// Write binary output (e.g. a PDF) to the target
pub fn write_bytes(bytes: &[u8], target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.flush())
                .context("Failed to write report to stdout")?;
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, bytes)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            if !quiet {
                tracing::info!("Report written to {:?} ({} bytes)", path, bytes.len());
            }
            Ok(())
        }
    }
}
