// Variable Registry: one decision variable per row of the Variables table

use crate::application::projector::OBJECTIVE_KEY;
use crate::domain::{
    BuildError, TableKind, VariableDomain, VariableId, VariableRegistry, VariableRow, VariableSpec,
};

/// Build the registry in row order.
pub fn build(rows: &[VariableRow]) -> Result<VariableRegistry, BuildError> {
    let mut registry = VariableRegistry::new();
    // Source row of each registered variable, indexed by `VariableId`
    let mut source_rows: Vec<usize> = Vec::with_capacity(rows.len());

    for row in rows {
        let name = row.name.trim();

        if name == OBJECTIVE_KEY {
            return Err(BuildError::ReservedVariableName {
                name: name.to_string(),
                row: row.row,
            });
        }

        let spec = VariableSpec {
            name: name.to_string(),
            lower_bound: row.lower_bound,
            upper_bound: row.upper_bound,
            domain: VariableDomain::from_category(&row.category),
        };
        match registry.insert(spec) {
            Some(_) => source_rows.push(row.row),
            None => {
                return Err(BuildError::DuplicateVariable {
                    name: name.to_string(),
                    first_row: registry
                        .lookup(name)
                        .map_or(row.row, |id| source_rows[id.0]),
                    row: row.row,
                })
            }
        }

        if let Some(upper) = row.upper_bound {
            if row.lower_bound > upper {
                return Err(BuildError::InvertedBounds {
                    name: name.to_string(),
                    row: row.row,
                    lower: row.lower_bound,
                    upper,
                });
            }
        }
    }

    log::debug!(
        "registered {} variables ({} integer)",
        registry.len(),
        registry.iter().filter(|v| v.spec.is_integer()).count()
    );

    Ok(registry)
}

/// Look up a variable referenced from `table` at `row`.
pub fn resolve(
    registry: &VariableRegistry,
    table: TableKind,
    row: usize,
    name: &str,
) -> Result<VariableId, BuildError> {
    registry
        .lookup(name)
        .ok_or_else(|| BuildError::UnknownVariable {
            table,
            row,
            name: name.to_string(),
        })
}
