//! Report generators and the aggregator.
//!
//! Two generators share one contract: resolve the root, traverse the linked
//! hierarchy breadth-first, and collect findings into a `Report`. Structural
//! failures (no CEO, multiple CEOs) abort the run; per-record data issues
//! (missing or negative salary) are absorbed into the current report and
//! traversal continues.

use crate::error::AnalysisError;
use crate::hierarchy;
use crate::models::employee::{Employee, Registry};
use crate::money::{self, Cents};
use crate::models::{Report, ReportKind};

/// The closed set of report generation strategies.
///
/// Each carries its configuration, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub enum Generator {
    /// Flags employees whose reporting-line depth exceeds the allowed level.
    ReportingLine { allowed_level: u32 },
    /// Flags managers whose salary falls outside the allowed percentage band
    /// relative to the average salary of their direct subordinates.
    SalaryBand { min_percent: u32, max_percent: u32 },
}

impl Generator {
    /// Run this generator against one linked registry.
    pub fn generate(&self, registry: &Registry) -> Result<Report, AnalysisError> {
        match *self {
            Generator::ReportingLine { allowed_level } => {
                reporting_line_report(registry, allowed_level)
            }
            Generator::SalaryBand {
                min_percent,
                max_percent,
            } => salary_band_report(registry, min_percent, max_percent),
        }
    }
}

/// Run every configured generator in order against one linked registry.
///
/// Fails fast: the first structural error aborts, and no partial report list
/// is returned.
pub fn run_reports(
    registry: &Registry,
    generators: &[Generator],
) -> Result<Vec<Report>, AnalysisError> {
    generators.iter().map(|g| g.generate(registry)).collect()
}

/// Wrap a fatal failure into the single report emitted instead of all
/// generator output.
pub fn unrecoverable_report(error: &AnalysisError) -> Report {
    let mut report = Report::new(ReportKind::UnrecoverableError);
    report.add_error(error.to_string());
    report
}

fn reporting_line_report(registry: &Registry, allowed_level: u32) -> Result<Report, AnalysisError> {
    let mut report = Report::new(ReportKind::ReportingLine);
    let root = hierarchy::find_root(registry)?;

    // The root's direct reports are level 1.
    let mut level = 1u32;
    let mut current = direct_subordinates(registry, &[root]);
    while !current.is_empty() {
        if level > allowed_level {
            for employee in &current {
                report.add_entry(format!(
                    "The employee with id {} has a reporting line of {} levels, which is {} more than the allowed level {}",
                    employee.id,
                    level,
                    level - allowed_level,
                    allowed_level
                ));
            }
        }
        current = direct_subordinates(registry, &current);
        level += 1;
    }
    Ok(report)
}

fn salary_band_report(
    registry: &Registry,
    min_percent: u32,
    max_percent: u32,
) -> Result<Report, AnalysisError> {
    let mut report = Report::new(ReportKind::SalaryBand);
    let root = hierarchy::find_root(registry)?;

    let mut current = vec![root];
    while !current.is_empty() {
        for employee in &current {
            if let Some(percent) = subordinate_salary_percent(employee, registry, &mut report) {
                if percent > i64::from(max_percent) {
                    report.add_entry(format!(
                        "Manager with id {} earn {} percent of their subordinates, the maximum allowed level is {}",
                        employee.id, percent, max_percent
                    ));
                } else if percent < i64::from(min_percent) {
                    report.add_entry(format!(
                        "Manager with id {} earn {} percent of their subordinates, the minimum allowed level is {}",
                        employee.id, percent, min_percent
                    ));
                }
            }
        }
        current = direct_subordinates(registry, &current);
    }
    Ok(report)
}

/// Evaluate one employee's salary as a percentage of their direct
/// subordinates' average salary.
///
/// Missing and negative salaries are recoverable: they become error entries
/// and the employee is skipped. Leaves are skipped silently, as is a manager
/// whose eligible subordinate set is empty or averages to zero (there is no
/// meaningful percentage to evaluate in either case).
fn subordinate_salary_percent(
    employee: &Employee,
    registry: &Registry,
    report: &mut Report,
) -> Option<i64> {
    let salary = match employee.salary {
        Some(salary) if salary < 0 => {
            report.add_error(format!("Employee with id {} has negative salary", employee.id));
            return None;
        }
        Some(salary) => salary,
        None => {
            report.add_error(format!("Employee with id {} has no salary", employee.id));
            return None;
        }
    };
    if !employee.has_subordinates() {
        return None;
    }

    let eligible: Vec<Cents> = employee
        .subordinates
        .iter()
        .filter_map(|id| registry.get(id))
        .filter_map(|sub| sub.salary)
        .filter(|salary| *salary >= 0)
        .collect();
    if eligible.is_empty() {
        return None;
    }
    let average = money::average_cents(&eligible);
    if average == 0 {
        return None;
    }
    Some(money::percent_of(salary, average))
}

fn direct_subordinates<'a>(registry: &'a Registry, employees: &[&Employee]) -> Vec<&'a Employee> {
    employees
        .iter()
        .flat_map(|e| e.subordinates.iter())
        .filter_map(|id| registry.get(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn employee(id: i64, salary: Option<Cents>, manager_id: Option<i64>) -> Employee {
        Employee::new(id, String::new(), String::new(), salary, manager_id)
    }

    fn linked_registry(employees: Vec<Employee>) -> Registry {
        let mut registry: Registry = employees.into_iter().map(|e| (e.id, e)).collect();
        hierarchy::link_subordinates(&mut registry).unwrap();
        registry
    }

    fn entries(lines: &[&str]) -> HashSet<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reporting_line_flags_only_employees_past_the_limit() {
        let registry = linked_registry(vec![
            employee(12, None, None),
            employee(13, None, Some(12)),
            employee(14, None, Some(13)),
            employee(15, None, Some(14)),
        ]);
        let report = Generator::ReportingLine { allowed_level: 2 }
            .generate(&registry)
            .unwrap();

        assert_eq!(report.kind, ReportKind::ReportingLine);
        assert_eq!(
            report.entries,
            entries(&["The employee with id 15 has a reporting line of 3 levels, which is 1 more than the allowed level 2"])
        );
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_reporting_line_within_limit_produces_no_entries() {
        let registry = linked_registry(vec![employee(12, None, None), employee(13, None, Some(12))]);
        let report = Generator::ReportingLine { allowed_level: 2 }
            .generate(&registry)
            .unwrap();
        assert!(report.entries.is_empty());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_salary_within_band_produces_no_entries() {
        let registry = linked_registry(vec![
            employee(12, Some(13_000), None),
            employee(13, Some(10_000), Some(12)),
        ]);
        let report = Generator::SalaryBand {
            min_percent: 120,
            max_percent: 150,
        }
        .generate(&registry)
        .unwrap();
        assert_eq!(report.kind, ReportKind::SalaryBand);
        assert!(report.entries.is_empty());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_manager_below_minimum_band_is_flagged_with_literal_percent() {
        // Subordinates average to 100.00; the manager earns 119.00 -> 119%.
        let registry = linked_registry(vec![
            employee(12, Some(11_900), None),
            employee(13, Some(9_000), Some(12)),
            employee(14, Some(11_000), Some(12)),
        ]);
        let report = Generator::SalaryBand {
            min_percent: 120,
            max_percent: 150,
        }
        .generate(&registry)
        .unwrap();
        assert_eq!(
            report.entries,
            entries(&["Manager with id 12 earn 119 percent of their subordinates, the minimum allowed level is 120"])
        );
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_manager_above_maximum_band_is_flagged() {
        let registry = linked_registry(vec![
            employee(12, Some(15_100), None),
            employee(13, Some(9_000), Some(12)),
            employee(14, Some(11_000), Some(12)),
        ]);
        let report = Generator::SalaryBand {
            min_percent: 120,
            max_percent: 150,
        }
        .generate(&registry)
        .unwrap();
        assert_eq!(
            report.entries,
            entries(&["Manager with id 12 earn 151 percent of their subordinates, the maximum allowed level is 150"])
        );
    }

    #[test]
    fn test_absent_and_negative_salaries_become_errors_and_leave_the_average() {
        let registry = linked_registry(vec![
            employee(12, Some(11_900), None),
            employee(13, Some(9_000), Some(12)),
            employee(14, Some(11_000), Some(12)),
            employee(15, None, Some(12)),
            employee(16, Some(-1), Some(12)),
        ]);
        let report = Generator::SalaryBand {
            min_percent: 120,
            max_percent: 150,
        }
        .generate(&registry)
        .unwrap();

        // 15 and 16 are excluded from the average, so 12 still sits at 119%.
        assert_eq!(
            report.entries,
            entries(&["Manager with id 12 earn 119 percent of their subordinates, the minimum allowed level is 120"])
        );
        assert_eq!(
            report.errors,
            entries(&[
                "Employee with id 15 has no salary",
                "Employee with id 16 has negative salary",
            ])
        );
    }

    #[test]
    fn test_manager_with_no_eligible_subordinates_is_skipped_silently() {
        let registry = linked_registry(vec![
            employee(12, Some(10_000), None),
            employee(13, None, Some(12)),
            employee(14, Some(-500), Some(12)),
        ]);
        let report = Generator::SalaryBand {
            min_percent: 120,
            max_percent: 150,
        }
        .generate(&registry)
        .unwrap();
        // No percentage finding for 12; the subordinates are still flagged
        // once, when visited as employees in their own right.
        assert!(report.entries.is_empty());
        assert_eq!(
            report.errors,
            entries(&[
                "Employee with id 13 has no salary",
                "Employee with id 14 has negative salary",
            ])
        );
    }

    #[test]
    fn test_both_generators_fail_identically_on_broken_structure() {
        let two_roots: Registry = vec![employee(12, None, None), employee(13, None, None)]
            .into_iter()
            .map(|e| (e.id, e))
            .collect();
        for generator in [
            Generator::ReportingLine { allowed_level: 2 },
            Generator::SalaryBand {
                min_percent: 120,
                max_percent: 150,
            },
        ] {
            let err = generator.generate(&two_roots).unwrap_err();
            assert_eq!(
                err.to_string(),
                "There are more than 1 CEO in the company structure"
            );
        }
    }

    #[test]
    fn test_run_reports_preserves_configuration_order() {
        let registry = linked_registry(vec![
            employee(12, Some(13_000), None),
            employee(13, Some(10_000), Some(12)),
        ]);
        let generators = [
            Generator::ReportingLine { allowed_level: 4 },
            Generator::SalaryBand {
                min_percent: 120,
                max_percent: 150,
            },
        ];
        let reports = run_reports(&registry, &generators).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].kind, ReportKind::ReportingLine);
        assert_eq!(reports[1].kind, ReportKind::SalaryBand);
    }

    #[test]
    fn test_run_reports_fails_fast_on_structural_error() {
        let no_root: Registry = vec![employee(12, None, Some(13)), employee(13, None, Some(12))]
            .into_iter()
            .map(|e| (e.id, e))
            .collect();
        let generators = [Generator::ReportingLine { allowed_level: 4 }];
        let err = run_reports(&no_root, &generators).unwrap_err();
        let report = unrecoverable_report(&err);
        assert_eq!(report.kind, ReportKind::UnrecoverableError);
        assert_eq!(
            report.errors,
            entries(&["There is no CEO in the company structure"])
        );
    }

    #[test]
    fn test_generation_is_idempotent_over_an_immutable_registry() {
        let registry = linked_registry(vec![
            employee(12, Some(30_000), None),
            employee(13, Some(9_000), Some(12)),
            employee(14, None, Some(12)),
            employee(15, Some(8_000), Some(13)),
        ]);
        let generator = Generator::SalaryBand {
            min_percent: 120,
            max_percent: 150,
        };
        let first = generator.generate(&registry).unwrap();
        let second = generator.generate(&registry).unwrap();
        assert_eq!(first.entries, second.entries);
        assert_eq!(first.errors, second.errors);
    }
}
