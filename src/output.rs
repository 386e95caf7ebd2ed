//! Output rendering for analysis reports.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-report entries and a top-level summary. Entry order within a report
//! is unspecified (reports are sets); consumers must not rely on it.

use crate::models::{Report, ReportKind};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

const SEPARATOR: &str = "------------------------";

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the ordered report list in the requested format.
pub fn print_reports(reports: &[Report], output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_reports_json(reports)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for report in reports {
                println!("{}", SEPARATOR);
                if color {
                    println!("{}", report.kind.title().bold());
                } else {
                    println!("{}", report.kind.title());
                }

                println!("Errors:");
                if report.errors.is_empty() {
                    println!("No errors.");
                } else {
                    for line in &report.errors {
                        if color {
                            println!("{}", line.yellow());
                        } else {
                            println!("{}", line);
                        }
                    }
                }

                println!("Report:");
                if report.entries.is_empty() {
                    println!("No issues.");
                } else {
                    for line in &report.entries {
                        println!("{}", line);
                    }
                }
                println!("{}", SEPARATOR);
            }
            let findings: usize = reports.iter().map(|r| r.entries.len()).sum();
            let errors: usize = reports.iter().map(|r| r.errors.len()).sum();
            let summary = format!(
                "— Summary — findings={} errors={} reports={}",
                findings,
                errors,
                reports.len()
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print the single unrecoverable-error report emitted instead of all
/// generator output.
pub fn print_error_report(report: &Report, output: &str) {
    match output {
        "json" => eprintln!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(report)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            if color {
                eprintln!("{}", report.kind.title().red().bold());
            } else {
                eprintln!("{}", report.kind.title());
            }
            for line in &report.errors {
                eprintln!("{}", line);
            }
        }
    }
}

/// Compose one report as JSON (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report) -> JsonVal {
    json!({
        "kind": report.kind,
        "title": report.kind.title(),
        "entries": &report.entries,
        "errors": &report.errors,
    })
}

/// Compose the full report list as JSON (pure) for testing/snapshot purposes.
pub fn compose_reports_json(reports: &[Report]) -> JsonVal {
    let items: Vec<_> = reports.iter().map(compose_report_json).collect();
    let summary = json!({
        "findings": reports.iter().map(|r| r.entries.len()).sum::<usize>(),
        "errors": reports.iter().map(|r| r.errors.len()).sum::<usize>(),
        "reports": reports.len(),
    });
    json!({"reports": items, "summary": summary})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_reports_json_shape() {
        let mut line = Report::new(ReportKind::ReportingLine);
        line.add_entry("too deep".into());
        let mut band = Report::new(ReportKind::SalaryBand);
        band.add_error("no salary".into());

        let out = compose_reports_json(&[line, band]);
        assert_eq!(out["summary"]["findings"], 1);
        assert_eq!(out["summary"]["errors"], 1);
        assert_eq!(out["summary"]["reports"], 2);
        assert_eq!(out["reports"][0]["kind"], "reporting_line");
        assert_eq!(out["reports"][0]["title"], "REPORTING LINE REPORT");
        assert_eq!(out["reports"][1]["entries"].as_array().unwrap().len(), 0);
        assert_eq!(out["reports"][1]["errors"][0], "no salary");
    }

    #[test]
    fn test_compose_error_report_json() {
        let mut report = Report::new(ReportKind::UnrecoverableError);
        report.add_error("There is no CEO in the company structure".into());
        let out = compose_report_json(&report);
        assert_eq!(out["kind"], "unrecoverable_error");
        assert_eq!(out["title"], "UNRECOVERABLE ERROR REPORT");
        assert_eq!(
            out["errors"][0],
            "There is no CEO in the company structure"
        );
    }
}
