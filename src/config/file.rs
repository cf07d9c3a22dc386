//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::reports::{PageSize, ReportFormat};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".product-transparency.yaml",
    ".product-transparency.yml",
    "product-transparency.yaml",
    "product-transparency.yml",
];

/// Directory name under the user config directory
const CONFIG_DIR_NAME: &str = "product-transparency";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/product-transparency/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join(CONFIG_DIR_NAME)))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Command-Line Overrides
// ============================================================================

/// Settings given explicitly on the command line.
///
/// Every field is optional; `None` leaves the file (or default) value in
/// place, `Some` always wins, even when it equals the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub title: Option<String>,
    pub page_size: Option<PageSize>,
    pub include_questions: Option<bool>,
    pub include_appendix: Option<bool>,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub no_color: Option<bool>,
    pub min_score: Option<u8>,
}

impl AppConfig {
    /// Apply command-line overrides on top of this config.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(title) = &overrides.title {
            self.report.title.clone_from(title);
        }
        if let Some(page_size) = overrides.page_size {
            self.report.page_size = page_size;
        }
        if let Some(include) = overrides.include_questions {
            self.report.include_questions = include;
        }
        if let Some(include) = overrides.include_appendix {
            self.report.include_appendix = include;
        }

        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(file) = &overrides.output_file {
            self.output.file = Some(file.clone());
        }
        if let Some(no_color) = overrides.no_color {
            self.output.no_color = no_color;
        }

        if let Some(min_score) = overrides.min_score {
            self.scoring.min_score = Some(min_score);
        }
    }

    /// Load from file and apply CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# Product Transparency Configuration
# Place this file at .product-transparency.yaml in your project root
# or ~/.config/product-transparency/

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# Product Transparency Configuration File
# =======================================
#
# Place it at:
#   - .product-transparency.yaml in your project root
#   - ~/.config/product-transparency/product-transparency.yaml for global config
#
# CLI arguments always override file settings.

# Report content
report:
  # Title printed on the cover page
  title: Product Transparency Report
  # Paper size: letter, a4
  page_size: letter
  # Render the questions & answers section when answers exist
  include_questions: true
  # Render the raw metadata appendix
  include_appendix: true

# Output configuration
output:
  # Format for the score command: summary, json, pdf
  format: summary
  # Output file path (omit for the command default)
  # file: report.pdf
  # Disable colored output
  no_color: false

# Scoring gate: exit with code 1 when the score is below min_score
# scoring:
#   min_score: 60
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".product-transparency.yaml");
        std::fs::write(&config_path, "scoring:\n  min_score: 50\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
report:
  title: Supplier Audit
  page_size: a4
  include_appendix: false
output:
  format: json
scoring:
  min_score: 75
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.report.title, "Supplier Audit");
        assert_eq!(config.report.page_size, PageSize::A4);
        assert!(!config.report.include_appendix);
        assert!(config.report.include_questions);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.scoring.min_score, Some(75));
    }

    #[test]
    fn test_load_empty_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("empty.yaml");
        std::fs::write(&config_path, "\n").unwrap();
        assert_eq!(load_config_file(&config_path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "report: [unclosed\n").unwrap();
        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = AppConfig::builder()
            .title("From File")
            .min_score(40)
            .build();
        config.apply_overrides(&ConfigOverrides {
            page_size: Some(PageSize::A4),
            min_score: Some(80),
            no_color: Some(true),
            ..ConfigOverrides::default()
        });

        assert_eq!(config.report.title, "From File");
        assert_eq!(config.report.page_size, PageSize::A4);
        assert_eq!(config.scoring.min_score, Some(80));
        assert!(config.output.no_color);
    }

    #[test]
    fn test_explicit_default_page_size_wins() {
        let mut config = AppConfig::builder().page_size(PageSize::A4).build();
        config.apply_overrides(&ConfigOverrides {
            page_size: Some(PageSize::Letter),
            ..ConfigOverrides::default()
        });
        assert_eq!(config.report.page_size, PageSize::Letter);
    }

    #[test]
    fn test_explicit_default_format_wins() {
        let mut config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .build();
        config.apply_overrides(&ConfigOverrides {
            format: Some(ReportFormat::Summary),
            ..ConfigOverrides::default()
        });
        assert_eq!(config.output.format, ReportFormat::Summary);
    }

    #[test]
    fn test_empty_overrides_keep_file_values() {
        let file = AppConfig::builder()
            .title("Supplier Audit")
            .page_size(PageSize::A4)
            .include_appendix(false)
            .output_format(ReportFormat::Json)
            .build();
        let mut config = file.clone();
        config.apply_overrides(&ConfigOverrides::default());
        assert_eq!(config, file);
    }

    #[test]
    fn test_from_file_with_overrides() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "report:\n  page_size: a4\noutput:\n  format: json\n")
            .unwrap();

        let overrides = ConfigOverrides {
            page_size: Some(PageSize::Letter),
            ..ConfigOverrides::default()
        };
        let (config, loaded_from) =
            AppConfig::from_file_with_overrides(Some(&config_path), &overrides);

        assert_eq!(loaded_from, Some(config_path));
        assert_eq!(config.report.page_size, PageSize::Letter);
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_generated_examples_parse() {
        let example = generate_example_config();
        assert!(example.contains("report:"));
        let parsed: AppConfig = serde_yaml::from_str(&example).unwrap();
        assert_eq!(parsed, AppConfig::default());

        let full: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(full.output.format, ReportFormat::Summary);
        assert_eq!(full.scoring.min_score, None);
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "report:\n  title: Custom\n").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }
}
