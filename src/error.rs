//! Fatal analysis errors.
//!
//! Everything here aborts the whole run: the aggregator converts one of
//! these into a single unrecoverable-error report instead of any generator
//! output. Recoverable per-record issues (missing or negative salary) never
//! take this path; they are collected inside the report they belong to.

use std::path::PathBuf;
use thiserror::Error;

/// A structural or input failure that invalidates the whole analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("File {} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("Invalid file structure, headers must be presented on the first line in the next order: (id,firstName,lastName,salary,managerId)")]
    InvalidHeaders,

    #[error("Impossible to read file. Additional information: {0}")]
    Csv(#[from] csv::Error),

    #[error("Employer with Id: {employee} has non-existed manager id {manager}")]
    DanglingManager { employee: i64, manager: i64 },

    #[error("There is no CEO in the company structure")]
    NoCeo,

    #[error("There are more than 1 CEO in the company structure")]
    MultipleCeos,
}
