//! Orglens core library.
//!
//! This crate exposes programmatic APIs for analyzing a company's employee
//! roster (a flat CSV with id, names, salary, and manager id) and producing
//! two reports: reporting-line depth violations and salary-band violations.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `error`: Fatal analysis errors carrying their user-facing messages.
//! - `hierarchy`: Subordinate linking and root (CEO) resolution.
//! - `models`: Employee registry and report data models.
//! - `money`: Fixed-point salary arithmetic with half-up rounding.
//! - `output`: Human/JSON printers for reports.
//! - `parse`: CSV decoding into the employee registry.
//! - `reports`: Report generators and the aggregator.
//! - `utils`: Supporting helpers.
//!
//! Note: All documentation comments are written in English by convention.
pub mod cli;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod models;
pub mod money;
pub mod output;
pub mod parse;
pub mod reports;
pub mod utils;
