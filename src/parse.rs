//! CSV decoding into the employee registry.
//!
//! The roster file is comma-delimited with a fixed header line:
//! `id, firstName, lastName, salary, managerId` (names case-insensitive,
//! order fixed). Rows that do not split into exactly five fields, or whose
//! `id` is blank or non-integer, are silently discarded. An unparsable
//! `salary` or `managerId` decodes as absent and the row is kept.

use crate::error::AnalysisError;
use crate::models::employee::{Employee, Registry};
use crate::money;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;

const HEADERS: [&str; 5] = ["id", "firstName", "lastName", "salary", "managerId"];

/// Parse a roster file into an id-indexed registry with empty subordinate
/// lists. Fails fast on a missing file, bad headers, or an I/O error.
///
/// Duplicate ids are not an error: the last row wins.
pub fn parse_file(path: &Path) -> Result<Registry, AnalysisError> {
    if !path.exists() {
        return Err(AnalysisError::MissingFile(path.to_path_buf()));
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;

    if !check_headers(reader.headers()?) {
        return Err(AnalysisError::InvalidHeaders);
    }

    let mut registry = Registry::new();
    for row in reader.records() {
        let record = row?;
        if let Some(employee) = decode_record(&record) {
            registry.insert(employee.id, employee);
        }
    }
    Ok(registry)
}

/// Decode one validated row into an employee record.
///
/// Returns `None` when the row must be discarded (wrong field count, blank
/// or non-integer id). Unparsable numeric fields other than the id become
/// absent values instead of failing the row.
pub fn decode_record(record: &StringRecord) -> Option<Employee> {
    if record.len() != HEADERS.len() {
        return None;
    }
    let id: i64 = record.get(0)?.parse().ok()?;
    let first_name = record.get(1)?.to_string();
    let last_name = record.get(2)?.to_string();
    let salary = money::parse_cents(record.get(3)?);
    let manager_id: Option<i64> = record.get(4)?.parse().ok();
    Some(Employee::new(id, first_name, last_name, salary, manager_id))
}

fn check_headers(headers: &StringRecord) -> bool {
    headers.len() == HEADERS.len()
        && headers
            .iter()
            .zip(HEADERS.iter())
            .all(|(actual, expected)| actual.eq_ignore_ascii_case(expected))
}
