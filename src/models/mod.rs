//! Shared data models for the employee registry and report outputs.

pub mod employee;

use serde::Serialize;
use std::collections::HashSet;

/// Identifies which generator (or failure path) produced a report.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    ReportingLine,
    SalaryBand,
    UnrecoverableError,
}

impl ReportKind {
    /// Display title used by the printers.
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::ReportingLine => "REPORTING LINE REPORT",
            ReportKind::SalaryBand => "SALARY REPORT",
            ReportKind::UnrecoverableError => "UNRECOVERABLE ERROR REPORT",
        }
    }
}

/// A named result set for one generator run.
///
/// Entries and errors are sets: duplicate-insensitive and with no defined
/// order. Consumers (and tests) must never rely on iteration order.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct Report {
    pub kind: ReportKind,
    pub entries: HashSet<String>,
    pub errors: HashSet<String>,
}

impl Report {
    pub fn new(kind: ReportKind) -> Self {
        Report {
            kind,
            entries: HashSet::new(),
            errors: HashSet::new(),
        }
    }

    /// Record a finding (e.g. an out-of-band manager salary).
    pub fn add_entry(&mut self, line: String) {
        self.entries.insert(line);
    }

    /// Record a recoverable per-record issue (e.g. a missing salary).
    pub fn add_error(&mut self, line: String) {
        self.errors.insert(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_entries_are_duplicate_insensitive() {
        let mut report = Report::new(ReportKind::SalaryBand);
        report.add_entry("finding".into());
        report.add_entry("finding".into());
        report.add_error("issue".into());
        report.add_error("issue".into());
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.kind.title(), "SALARY REPORT");
    }
}
