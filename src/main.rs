//! bidmaster: procurement quotation scoring and ranking tool
//!
//! Scores supplier quotations on a weighted price/technical split and
//! ranks them per catalog item.

#![allow(clippy::struct_excessive_bools)]

use anyhow::{Context, Result};
use bidmaster::{
    analysis::SupplierReportFilter,
    cli::{self, AnalyzeConfig, ReportOptions, SuppliersConfig},
    config::AppConfig,
    pipeline::{exit_codes, DatasetSource},
    reports::ReportFormat,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput Formats:",
        "\n  Combined dataset: JSON (items + quotations)",
        "\n  Split files:      JSON or CSV per file",
        "\n\nOutput Formats:",
        "\n  json, csv, summary",
        "\n\nFeatures:",
        "\n  Weighted scoring, per-item ranking, orphan detection, supplier and brand views"
    )
}

#[derive(Parser)]
#[command(name = "bidmaster")]
#[command(version, long_version = build_long_version())]
#[command(about = "Procurement quotation scoring and ranking tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Orphan quotations detected (with --fail-on-orphans)
    3  Error occurred

EXAMPLES:
    # Rank all quotations, human-readable on a terminal
    bidmaster analyze tender.json

    # CI check that every quotation matches a catalog item
    bidmaster analyze tender.json --fail-on-orphans -o json > report.json

    # Separate catalog and quotation files (JSON or CSV)
    bidmaster condensed --items items.csv --quotes quotes.csv

    # Supplier drill-down: Acme's winning quotations only
    bidmaster suppliers tender.json --supplier Acme --rank 1")]
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

/// Arguments shared by every report subcommand
#[derive(Parser)]
struct ReportArgs {
    /// Combined dataset file (JSON holding items and quotations)
    data: Option<PathBuf>,

    /// Catalog items file (JSON or CSV); requires --quotes
    #[arg(long, requires = "quotes", conflicts_with = "data")]
    items: Option<PathBuf>,

    /// Quotations file (JSON or CSV); requires --items
    #[arg(long, requires = "items", conflicts_with = "data")]
    quotes: Option<PathBuf>,

    /// Price weight percentage, 0-100 (technical weight is the remainder)
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(0..=100))]
    weight: Option<i32>,

    /// Output format (auto detects TTY: summary if interactive, json otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `analyze` subcommand
#[derive(Parser)]
struct AnalyzeArgs {
    #[command(flatten)]
    report: ReportArgs,

    /// Exit with code 1 if quotations reference unknown item codes
    #[arg(long)]
    fail_on_orphans: bool,
}

/// Arguments for the `suppliers` subcommand
#[derive(Parser)]
struct SuppliersArgs {
    #[command(flatten)]
    report: ReportArgs,

    /// Only show this supplier (exact name)
    #[arg(long)]
    supplier: Option<String>,

    /// Only show quotations for this item code
    #[arg(long)]
    item: Option<String>,

    /// Only show quotations of this brand
    #[arg(long)]
    brand: Option<String>,

    /// Only show quotations with this rank (1 = winner)
    #[arg(long)]
    rank: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score and rank all quotations per catalog item
    Analyze(AnalyzeArgs),

    /// Show the winning quotation for each catalog item
    Condensed(ReportArgs),

    /// Show per-supplier performance with optional drill-down filters
    Suppliers(SuppliersArgs),

    /// Show quotation counts, wins and average price per brand
    Brands(ReportArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
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
    /// Generate an example .bidmaster.yaml in the current directory
    Init,
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Initialize logging
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
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let (config, _loaded_from) = bidmaster::config::load_or_default(cli.config.as_deref());
    config.validate().context("invalid configuration file")?;

    // Dispatch to command handlers
    let no_color = cli.no_color;
    let quiet = cli.quiet;
    let config_path = cli.config.clone();
    match cli.command {
        Commands::Analyze(args) => cli::run_analyze(AnalyzeConfig {
            options: build_options(args.report, no_color, quiet, &config)?,
            fail_on_orphans: args.fail_on_orphans,
        }),

        Commands::Condensed(args) => cli::run_condensed(build_options(args, no_color, quiet, &config)?),

        Commands::Suppliers(args) => cli::run_suppliers(SuppliersConfig {
            options: build_options(args.report, no_color, quiet, &config)?,
            filter: SupplierReportFilter {
                supplier: args.supplier,
                item_code: args.item,
                brand: args.brand,
                rank: args.rank,
            },
        }),

        Commands::Brands(args) => cli::run_brands(build_options(args, no_color, quiet, &config)?),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "bidmaster", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config_action(action, config_path.as_deref(), &config),
    }
}

/// Layer CLI arguments over file config into the shared report options.
fn build_options(
    args: ReportArgs,
    no_color: bool,
    quiet: bool,
    config: &AppConfig,
) -> Result<ReportOptions> {
    let source = DatasetSource::resolve(args.data, args.items, args.quotes)?;

    let weight_percent = args
        .weight
        .unwrap_or(config.analysis.default_weight_percent);
    let format = if args.output == ReportFormat::Auto {
        config.output.format
    } else {
        args.output
    };
    let output_file = args.output_file.or_else(|| config.output.file.clone());

    Ok(ReportOptions {
        source,
        weight_percent,
        format,
        output_file,
        no_color: no_color || config.output.no_color,
        quiet,
    })
}

fn run_config_action(
    action: ConfigAction,
    config_path: Option<&std::path::Path>,
    config: &AppConfig,
) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            match bidmaster::config::discover_config_file(config_path) {
                Some(path) => eprintln!("# Loaded from: {}", path.display()),
                None => eprintln!("# No config file found; showing defaults"),
            }
            let yaml = serde_yaml::to_string(config).context("failed to serialize config")?;
            print!("{yaml}");
            Ok(exit_codes::SUCCESS)
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("bidmaster").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in &[
                ".bidmaster.yaml",
                ".bidmaster.yml",
                "bidmaster.yaml",
                "bidmaster.yml",
                ".bidmasterrc",
            ] {
                eprintln!("  {name}");
            }
            eprintln!();
            match bidmaster::config::discover_config_file(config_path) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
            Ok(exit_codes::SUCCESS)
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".bidmaster.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = bidmaster::config::generate_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
            Ok(exit_codes::SUCCESS)
        }
    }
}
