//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "orglens",
    version,
    about = "Orglens (Rust + CSV)",
    long_about = "Orglens — a tiny, fast CLI to analyze a company's employee roster.\n\nReads a CSV (id, firstName, lastName, salary, managerId) and reports employees with too-long reporting lines and managers paid outside the allowed band relative to their direct subordinates.\n\nConfiguration precedence: CLI > orglens.toml > defaults.",
    after_help = "Examples:\n  orglens analyze staff.csv\n  orglens analyze staff.csv --reporting-level 2 --output json\n  orglens analyze staff.csv --min-percent 110 --max-percent 140",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current orglens version."
    )]
    Version,
    /// Analyze a roster CSV and print the reports
    #[command(
        about = "Run roster analysis",
        long_about = "Build the employee hierarchy from a CSV roster and generate the reporting-line and salary-band reports. A structurally broken roster (no CEO, multiple CEOs, dangling manager id) yields a single unrecoverable-error report and a non-zero exit.",
        after_help = "Examples:\n  orglens analyze staff.csv\n  orglens analyze staff.csv --output json"
    )]
    Analyze {
        #[arg(help = "Path to the roster CSV file")]
        file: String,
        #[arg(long, help = "Repository root for config discovery (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Maximum allowed reporting-line depth (default: 4)")]
        reporting_level: Option<u32>,
        #[arg(long, help = "Minimum allowed manager salary in percent of subordinate average (default: 120)")]
        min_percent: Option<u32>,
        #[arg(long, help = "Maximum allowed manager salary in percent of subordinate average (default: 150)")]
        max_percent: Option<u32>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
