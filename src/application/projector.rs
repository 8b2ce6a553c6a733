// Result Projector: flatten a solve result into one output record

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::{Cell, SolveResult, Table};

/// Key under which the achieved objective value is emitted
pub const OBJECTIVE_KEY: &str = "Objective";

/// Variable values in registry order followed by the objective value.
/// `None` marks a value the engine did not provide.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OutputRecord {
    entries: IndexMap<String, Option<f64>>,
}

impl OutputRecord {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.get(key).copied().flatten()
    }

    pub fn objective(&self) -> Option<f64> {
        self.get(OBJECTIVE_KEY)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One-row table: the header is the record's keys.
    pub fn to_table(&self) -> Table {
        Table::new(self.entries.keys().cloned())
            .with_row(self.entries.values().map(|v| Cell::from(*v)).collect())
    }
}

/// Never fails: a non-optimal result projects whatever values it carries.
pub fn project(result: &SolveResult) -> OutputRecord {
    let mut entries: IndexMap<String, Option<f64>> = result.values.clone();
    entries.insert(OBJECTIVE_KEY.to_string(), result.objective_value);
    OutputRecord { entries }
}
