//! product-transparency: transparency scoring and PDF reports for products
//!
//! Scores how completely a product's metadata discloses its origin,
//! sustainability, materials, certifications and supply chain, and renders
//! a paginated PDF report.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use product_transparency::{
    cli,
    config::{self, AppConfig, ConfigOverrides, Validatable},
    pipeline::{exit_codes, OutputTarget},
    reports::{PageSize, ReportFormat},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with scoring info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nScoring categories (100 points):",
        "\n  Basic Information 20, Sustainability 30, Materials & Composition 25,",
        "\n  Certifications 15, Additional Information 10",
        "\n\nOutput Formats:",
        "\n  pdf, json, summary"
    )
}

#[derive(Parser)]
#[command(name = "product-transparency")]
#[command(version, long_version = build_long_version())]
#[command(about = "Product transparency scoring and PDF report generation", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Score below --min-score
    3  Error occurred

EXAMPLES:
    # Print the transparency score of a product
    product-transparency score product.json

    # Quality gate in CI
    product-transparency score product.json --min-score 60 -o json

    # Render the PDF report (written to report_<id>.pdf)
    product-transparency report product.json

    # Stream the PDF to another program
    cat product.json | product-transparency report - -O - > report.pdf")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Path to the product JSON (`-` for stdin)
    product: PathBuf,

    /// Output format (summary, json or pdf; default from config, else summary)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Include the per-category field listing in JSON output
    #[arg(long)]
    fields: bool,

    /// Exit with code 1 when the score is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,
}

/// Arguments for the `report` subcommand
#[derive(Parser)]
struct ReportArgs {
    /// Path to the product JSON (`-` for stdin)
    product: PathBuf,

    /// Output file path (default: report_<productId>.pdf, `-` for stdout)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Title printed on the cover page
    #[arg(long)]
    title: Option<String>,

    /// Paper size
    #[arg(long, value_enum)]
    page_size: Option<PageSize>,

    /// Omit the questions & answers section
    #[arg(long)]
    no_questions: bool,

    /// Omit the raw metadata appendix
    #[arg(long)]
    no_appendix: bool,

    /// Exit with code 1 when the score is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the transparency score of a product
    Score(ScoreArgs),

    /// Render the PDF transparency report of a product
    Report(ReportArgs),

    /// List the scored metadata fields
    Fields {
        /// Output format (summary or json)
        #[arg(short, long, default_value = "summary")]
        output: ReportFormat,

        /// Output file path (stdout if not specified)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .product-transparency.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so report bytes on stdout stay clean
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) if code != exit_codes::SUCCESS => std::process::exit(code),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Load the config file, apply CLI overrides and validate the result
fn effective_config(
    explicit: Option<&std::path::Path>,
    overrides: &ConfigOverrides,
) -> Result<AppConfig> {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(explicit, overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration:\n  {}", details.join("\n  "));
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Score(args) => {
            let overrides = ConfigOverrides {
                format: args.output,
                output_file: args.output_file,
                no_color: cli.no_color.then_some(true),
                min_score: args.min_score,
                ..ConfigOverrides::default()
            };
            let app = effective_config(cli.config.as_deref(), &overrides)?;
            let config = cli::ScoreConfig {
                product_path: args.product,
                include_fields: args.fields,
                quiet: cli.quiet,
            };
            cli::run_score(&config, &app)
        }

        Commands::Report(args) => {
            let overrides = ConfigOverrides {
                title: args.title,
                page_size: args.page_size,
                include_questions: args.no_questions.then_some(false),
                include_appendix: args.no_appendix.then_some(false),
                output_file: args.output_file,
                no_color: cli.no_color.then_some(true),
                min_score: args.min_score,
                ..ConfigOverrides::default()
            };
            let app = effective_config(cli.config.as_deref(), &overrides)?;
            let config = cli::ReportCommandConfig {
                product_path: args.product,
                quiet: cli.quiet,
            };
            cli::run_report(&config, &app)
        }

        Commands::Fields {
            output,
            output_file,
        } => {
            cli::run_fields(output, &OutputTarget::from_option(output_file))?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "product-transparency",
                &mut io::stdout(),
            );
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to generate schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                    if let Some(path) = &loaded_from {
                        eprintln!("# Loaded from: {}", path.display());
                    } else {
                        eprintln!("# No config file found; showing defaults");
                    }
                    let yaml =
                        serde_yaml::to_string(&config).context("failed to serialize config")?;
                    print!("{yaml}");
                }
                ConfigAction::Path => {
                    let search_paths: [Option<String>; 3] = [
                        std::env::current_dir()
                            .ok()
                            .map(|p| p.display().to_string()),
                        ::dirs::config_dir()
                            .map(|p| p.join("product-transparency").display().to_string()),
                        ::dirs::home_dir().map(|p| p.display().to_string()),
                    ];
                    eprintln!("Config file search paths (in order):");
                    for path in search_paths.into_iter().flatten() {
                        eprintln!("  {path}");
                    }
                    eprintln!();
                    eprintln!("Recognized file names:");
                    for name in &[
                        ".product-transparency.yaml",
                        ".product-transparency.yml",
                        "product-transparency.yaml",
                        "product-transparency.yml",
                    ] {
                        eprintln!("  {name}");
                    }
                    eprintln!();
                    match config::discover_config_file(cli.config.as_deref()) {
                        Some(path) => eprintln!("Active config file: {}", path.display()),
                        None => eprintln!("No config file found."),
                    }
                }
                ConfigAction::Init => {
                    let target = std::env::current_dir()
                        .context("cannot determine current directory")?
                        .join(".product-transparency.yaml");
                    if target.exists() {
                        anyhow::bail!(
                            "{} already exists. Remove it first to re-initialize.",
                            target.display()
                        );
                    }
                    let content = config::generate_full_example_config();
                    std::fs::write(&target, content)
                        .with_context(|| format!("failed to write {}", target.display()))?;
                    eprintln!("Created {}", target.display());
                }
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}
