//! govscore: Governance risk scoring for AI deployments
//!
//! Scores governance answer sheets against weighted question catalogs and
//! gates CI pipelines on the result.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use govscore::{
    cli::{self, exit_codes, AssessConfig, CatalogConfig, CatalogOutput, ReportFileConfig},
    report::ReportFormat,
};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with catalog and format info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nBuilt-in Catalog:",
        "\n  healthcare-llm-governance (5 categories, 20 questions)",
        "\n\nAnswer Sheet Format:",
        "\n  JSON object mapping question id -> bool | number | string",
        "\n\nOutput Formats:",
        "\n  text, json, markdown",
        "\n\nFeatures:",
        "\n  Weighted scoring, critical issue tracking, CI gating, custom catalogs"
    )
}

#[derive(Parser)]
#[command(name = "govscore")]
#[command(version, long_version = build_long_version())]
#[command(about = "Governance risk scoring for AI deployments", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Assessment passed (or no gate requested)
    1  Score below --min-score threshold
    2  Critical issues present with --fail-on-critical
    3  Error occurred

EXAMPLES:
    # Score an answer sheet against the built-in catalog
    govscore assess answers.json

    # CI/CD pipeline gate
    govscore assess answers.json --min-score 80 --fail-on-critical

    # Export JSON for processing
    govscore assess answers.json -o json > report.json

    # Write the date-stamped report file
    govscore report answers.json --output-dir reports/

    # Inspect a custom catalog
    govscore catalog --catalog framework.yaml")]
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

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs (extracted for readability)
// ============================================================================

/// Arguments for the `assess` subcommand
#[derive(Parser)]
struct AssessArgs {
    /// Path to the answer sheet (JSON object mapping question id to answer)
    answers: PathBuf,

    /// Catalog file (JSON or YAML); defaults to the built-in healthcare catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Fail if the overall score is below threshold (0-100)
    #[arg(long)]
    min_score: Option<f64>,

    /// Exit with code 2 if any critical compliance issue is present
    #[arg(long)]
    fail_on_critical: bool,

    /// Show per-category score breakdown
    #[arg(long)]
    metrics: bool,

    /// Omit recommendations from the report
    #[arg(long)]
    no_recommendations: bool,

    /// Exclude unanswered questions from scoring instead of counting them as zero
    #[arg(long)]
    exclude_unanswered: bool,
}

/// Arguments for the `report` subcommand
#[derive(Parser)]
struct ReportArgs {
    /// Path to the answer sheet (JSON object mapping question id to answer)
    answers: PathBuf,

    /// Catalog file (JSON or YAML); defaults to the built-in healthcare catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory to write the report into (current directory if not specified)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

/// Arguments for the `catalog` subcommand
#[derive(Parser)]
struct CatalogArgs {
    /// Catalog file (JSON or YAML); defaults to the built-in healthcare catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    output: CatalogOutput,

    /// Print the JSON Schema for catalog files and exit
    #[arg(long, conflicts_with = "example")]
    schema: bool,

    /// Print a commented starter catalog and exit
    #[arg(long)]
    example: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an answer sheet against a governance catalog
    Assess(AssessArgs),

    /// Write a date-stamped JSON report file
    Report(ReportArgs),

    /// Inspect a catalog, or print the catalog schema / a starter file
    Catalog(CatalogArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate a man page and print it to stdout
    Man,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers, returning the process exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Assess(args) => {
            let config = AssessConfig {
                answers_path: args.answers,
                catalog_path: args.catalog,
                output: args.output,
                output_file: args.output_file,
                min_score: args.min_score,
                fail_on_critical: args.fail_on_critical,
                show_metrics: args.metrics,
                no_recommendations: args.no_recommendations,
                exclude_unanswered: args.exclude_unanswered,
                no_color: cli.no_color,
                quiet: cli.quiet,
            };
            cli::run_assess(config)
        }

        Commands::Report(args) => {
            let config = ReportFileConfig {
                answers_path: args.answers,
                catalog_path: args.catalog,
                output_dir: args.output_dir,
                quiet: cli.quiet,
            };
            cli::run_report(config)
        }

        Commands::Catalog(args) => {
            let config = CatalogConfig {
                catalog_path: args.catalog,
                output: args.output,
                schema: args.schema,
                example: args.example,
            };
            cli::run_catalog(config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "govscore", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buf = Vec::new();
            man.render(&mut buf).context("failed to render man page")?;
            io::stdout().write_all(&buf)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}
