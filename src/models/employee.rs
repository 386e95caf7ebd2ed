//! Employee records and the id-indexed registry.

use crate::money::Cents;
use std::collections::HashMap;

/// One decoded roster row.
///
/// Identity fields are set once by the record decoder. The subordinate list
/// holds ids (never owning references) and is populated exactly once by the
/// hierarchy builder; generators treat it as read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub salary: Option<Cents>,
    pub manager_id: Option<i64>,
    pub subordinates: Vec<i64>,
}

impl Employee {
    pub fn new(
        id: i64,
        first_name: String,
        last_name: String,
        salary: Option<Cents>,
        manager_id: Option<i64>,
    ) -> Self {
        Employee {
            id,
            first_name,
            last_name,
            salary,
            manager_id,
            subordinates: Vec::new(),
        }
    }

    pub fn has_subordinates(&self) -> bool {
        !self.subordinates.is_empty()
    }
}

/// The hierarchy-wide registry: exclusive owner of all employee records.
pub type Registry = HashMap<i64, Employee>;
