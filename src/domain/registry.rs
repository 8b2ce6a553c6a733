use indexmap::IndexMap;

use super::models::{DecisionVariable, VariableId, VariableSpec};

/// The decision variables of one run, keyed by name, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableRegistry {
    variables: IndexMap<String, DecisionVariable>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable. Returns `None` when the name is already taken,
    /// leaving the registry unchanged.
    pub fn insert(&mut self, spec: VariableSpec) -> Option<VariableId> {
        if self.variables.contains_key(&spec.name) {
            return None;
        }
        let id = VariableId(self.variables.len());
        self.variables
            .insert(spec.name.clone(), DecisionVariable { id, spec });
        Some(id)
    }

    pub fn lookup(&self, name: &str) -> Option<VariableId> {
        self.variables.get_index_of(name).map(VariableId)
    }

    pub fn get(&self, id: VariableId) -> Option<&DecisionVariable> {
        self.variables.get_index(id.0).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecisionVariable> {
        self.variables.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
