// Constraint Builder: rows sharing a Constraint name form one `≤` inequality

use indexmap::map::Entry;
use indexmap::IndexMap;

use super::registry::resolve;
use crate::domain::{
    BuildError, ConstraintGroup, ConstraintRow, LinearTerm, TableKind, VariableRegistry,
};

/// Group rows by constraint name in first-appearance order. The RHS of a
/// group comes from its first row and every later row must repeat it.
pub fn build(
    rows: &[ConstraintRow],
    registry: &VariableRegistry,
) -> Result<Vec<ConstraintGroup>, BuildError> {
    let mut groups: IndexMap<&str, ConstraintGroup> = IndexMap::new();

    for row in rows {
        let variable = resolve(registry, TableKind::Constraints, row.row, &row.variable)?;

        let group = match groups.entry(row.constraint.as_str()) {
            Entry::Occupied(entry) => {
                let group = entry.into_mut();
                if group.rhs != row.rhs {
                    return Err(BuildError::ConstraintRhsMismatch {
                        constraint: row.constraint.clone(),
                        row: row.row,
                        expected: group.rhs,
                        found: row.rhs,
                    });
                }
                group
            }
            Entry::Vacant(entry) => entry.insert(ConstraintGroup::new(&row.constraint, row.rhs)),
        };
        group.terms.push(LinearTerm::new(variable, row.coefficient));
    }

    log::debug!(
        "built {} constraints from {} rows",
        groups.len(),
        rows.len()
    );

    Ok(groups.into_values().collect())
}
