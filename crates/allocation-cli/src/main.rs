mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::allocation::{AllocationArgs, AssetsArgs};
use commands::catalog::CatalogArgs;
use commands::projection::ProjectArgs;
use commands::recommend::RecommendArgs;

/// Risk-profile asset allocation and growth projection
#[derive(Parser)]
#[command(
    name = "allocate",
    version,
    about = "Suggest an asset allocation for an amount and risk profile",
    long_about = "Suggests an investment allocation across asset classes for an amount \
                  of capital and a risk profile (conservative, balanced, aggressive), \
                  derives the blended expected return and risk score, and projects \
                  constant-rate growth over a horizon. All figures use decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log computation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full recommendation: allocation, blended statistics and projection
    Recommend(RecommendArgs),
    /// Allocation table for a risk profile
    Allocation(AllocationArgs),
    /// Per-asset values, returns and risk for an amount
    Assets(AssetsArgs),
    /// Constant-rate growth projection
    Project(ProjectArgs),
    /// Asset class catalog with return estimates and risk scores
    Catalog(CatalogArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Recommend(args) => commands::recommend::run_recommend(args),
        Commands::Allocation(args) => commands::allocation::run_allocation(args),
        Commands::Assets(args) => commands::allocation::run_assets(args),
        Commands::Project(args) => commands::projection::run_project(args),
        Commands::Catalog(args) => commands::catalog::run_catalog(args),
        Commands::Version => {
            println!("allocate {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
