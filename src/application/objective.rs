// Objective Builder

use super::registry::resolve;
use crate::domain::{BuildError, Objective, ObjectiveRow, ObjectiveTerm, TableKind, VariableRegistry};

/// Build the maximize objective. Terms keep row order; a variable listed
/// twice contributes the sum of its coefficients.
pub fn build(rows: &[ObjectiveRow], registry: &VariableRegistry) -> Result<Objective, BuildError> {
    let terms = rows
        .iter()
        .map(|row| -> Result<ObjectiveTerm, BuildError> {
            let variable = resolve(registry, TableKind::Objective, row.row, &row.variable)?;
            Ok(ObjectiveTerm::new(variable, row.coefficient))
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("objective has {} terms", terms.len());

    Ok(Objective::maximize(terms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OptimizationSense, VariableId, VariableSpec};

    fn registry() -> VariableRegistry {
        let mut registry = VariableRegistry::new();
        registry.insert(VariableSpec::continuous("x"));
        registry.insert(VariableSpec::integer("y"));
        registry
    }

    fn row(row: usize, variable: &str, coefficient: f64) -> ObjectiveRow {
        ObjectiveRow {
            row,
            variable: variable.to_string(),
            coefficient,
        }
    }

    #[test]
    fn test_build_given_known_variables_should_keep_row_order() {
        let objective = build(&[row(1, "y", 5.0), row(2, "x", 3.0)], &registry()).unwrap();

        assert_eq!(objective.sense, OptimizationSense::Maximize);
        assert_eq!(
            objective.terms,
            vec![
                ObjectiveTerm::new(VariableId(1), 5.0),
                ObjectiveTerm::new(VariableId(0), 3.0),
            ]
        );
    }

    #[test]
    fn test_build_given_repeated_variable_should_sum_coefficients() {
        let objective = build(&[row(1, "x", 2.0), row(2, "x", 1.5)], &registry()).unwrap();

        assert_eq!(objective.terms.len(), 2);
        assert_eq!(objective.coefficients(), vec![(VariableId(0), 3.5)]);
    }

    #[test]
    fn test_build_given_unknown_variable_should_fail() {
        let err = build(&[row(1, "x", 1.0), row(2, "w", 1.0)], &registry()).unwrap_err();
        assert_eq!(
            err,
            BuildError::UnknownVariable {
                table: TableKind::Objective,
                row: 2,
                name: "w".to_string(),
            }
        );
    }

    #[test]
    fn test_build_given_no_rows_should_produce_zero_objective() {
        let objective = build(&[], &registry()).unwrap();
        assert!(objective.is_empty());
        assert_eq!(objective.evaluate(|_| 7.0), 0.0);
    }
}
