//! Subordinate linking and root resolution.
//!
//! The registry arrives from the decoder with manager ids populated and
//! subordinate lists empty. Linking resolves every manager reference into a
//! parent-to-child edge or aborts on the first dangling reference; no
//! partial hierarchy is ever returned. Root resolution is re-run by every
//! generator so a structurally broken registry fails identically for each
//! requested report.

use crate::error::AnalysisError;
use crate::models::employee::{Employee, Registry};

/// Populate subordinate lists from manager references.
///
/// Every present `manager_id` must resolve to a registry key; a dangling
/// reference is fatal. Registry iteration order is not defined, so the
/// order of subordinates within a list may differ between runs (accepted
/// non-determinism; reports compare as sets).
pub fn link_subordinates(registry: &mut Registry) -> Result<(), AnalysisError> {
    let mut edges: Vec<(i64, i64)> = Vec::with_capacity(registry.len());
    for employee in registry.values() {
        if let Some(manager_id) = employee.manager_id {
            if !registry.contains_key(&manager_id) {
                return Err(AnalysisError::DanglingManager {
                    employee: employee.id,
                    manager: manager_id,
                });
            }
            edges.push((manager_id, employee.id));
        }
    }
    for (manager_id, subordinate_id) in edges {
        if let Some(manager) = registry.get_mut(&manager_id) {
            manager.subordinates.push(subordinate_id);
        }
    }
    Ok(())
}

/// Find the single employee without a manager (the CEO).
///
/// Zero roots and multiple roots are both fatal.
pub fn find_root(registry: &Registry) -> Result<&Employee, AnalysisError> {
    let mut root: Option<&Employee> = None;
    for employee in registry.values() {
        if employee.manager_id.is_none() {
            if root.is_some() {
                return Err(AnalysisError::MultipleCeos);
            }
            root = Some(employee);
        }
    }
    root.ok_or(AnalysisError::NoCeo)
}
