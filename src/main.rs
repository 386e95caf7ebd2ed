//! Orglens CLI binary entry point.
//! Delegates to the library for parsing/linking/report generation and prints results.

use clap::Parser;
use orglens::cli::{Cli, Commands};
use orglens::error::AnalysisError;
use orglens::models::Report;
use orglens::reports::Generator;
use orglens::{config, hierarchy, output, parse, reports, utils};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Analyze {
            file,
            repo_root,
            reporting_level,
            min_percent,
            max_percent,
            output,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                reporting_level,
                min_percent,
                max_percent,
            );
            // Friendly note if no orglens config was found
            if eff.output != "json" && !eff.config_found {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No orglens.toml found; using defaults."
                );
            }
            // Generators run in this fixed configuration order.
            let generators = [
                Generator::ReportingLine {
                    allowed_level: eff.reporting_level,
                },
                Generator::SalaryBand {
                    min_percent: eff.min_salary_percent,
                    max_percent: eff.max_salary_percent,
                },
            ];
            match analyze(Path::new(&file), &generators) {
                Ok(report_list) => output::print_reports(&report_list, &eff.output),
                Err(err) => {
                    output::print_error_report(&reports::unrecoverable_report(&err), &eff.output);
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Full analysis pipeline for one roster file: decode, link, generate.
fn analyze(path: &Path, generators: &[Generator]) -> Result<Vec<Report>, AnalysisError> {
    let mut registry = parse::parse_file(path)?;
    hierarchy::link_subordinates(&mut registry)?;
    reports::run_reports(&registry, generators)
}
