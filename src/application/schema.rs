// Schema validation: untyped tables in, typed rows out

use crate::domain::{
    BuildError, Cell, ConstraintRow, ObjectiveRow, SchemaError, Table, TableKind,
    ValidatedTables, VariableRow, Workbook,
};

/// The three tables a run consumes
#[derive(Debug, Clone, PartialEq)]
pub struct InputTables {
    pub variables: Table,
    pub objective: Table,
    pub constraints: Table,
}

impl InputTables {
    pub fn new(variables: Table, objective: Table, constraints: Table) -> Self {
        Self {
            variables,
            objective,
            constraints,
        }
    }

    /// Pick the `Variables`, `Objective` and `Constraints` sheets out of a workbook.
    pub fn from_workbook(workbook: &Workbook) -> Result<Self, SchemaError> {
        let sheet = |kind: TableKind| {
            workbook
                .sheet(kind.sheet_name())
                .cloned()
                .ok_or(SchemaError::MissingTable { table: kind })
        };

        Ok(Self {
            variables: sheet(TableKind::Variables)?,
            objective: sheet(TableKind::Objective)?,
            constraints: sheet(TableKind::Constraints)?,
        })
    }
}

/// Check the shape of all three tables, then convert every row.
pub fn validate(tables: &InputTables) -> Result<ValidatedTables, BuildError> {
    let variable_columns = resolve_columns::<4>(&tables.variables, TableKind::Variables)?;
    let objective_columns = resolve_columns::<2>(&tables.objective, TableKind::Objective)?;
    let constraint_columns = resolve_columns::<4>(&tables.constraints, TableKind::Constraints)?;

    // An empty objective is a valid zero objective
    require_rows(&tables.variables, TableKind::Variables)?;
    require_rows(&tables.constraints, TableKind::Constraints)?;

    let [var, lower, upper, category] = variable_columns;
    let variables = data_rows(&tables.variables, TableKind::Variables)
        .map(|r| -> Result<VariableRow, BuildError> {
            Ok(VariableRow {
                row: r.number(),
                name: r.required_text(var, "Variable")?,
                lower_bound: r.lower_bound(lower)?,
                upper_bound: r.upper_bound(upper)?,
                category: r.cell(category).as_text(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let [var, coefficient] = objective_columns;
    let objective = data_rows(&tables.objective, TableKind::Objective)
        .map(|r| -> Result<ObjectiveRow, BuildError> {
            Ok(ObjectiveRow {
                row: r.number(),
                variable: r.required_text(var, "Variable")?,
                coefficient: r.coefficient(coefficient, "Coefficient")?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let [name, var, coefficient, rhs] = constraint_columns;
    let constraints = data_rows(&tables.constraints, TableKind::Constraints)
        .map(|r| -> Result<ConstraintRow, BuildError> {
            Ok(ConstraintRow {
                row: r.number(),
                constraint: r.required_text(name, "Constraint")?,
                variable: r.required_text(var, "Variable")?,
                coefficient: r.coefficient(coefficient, "Coefficient")?,
                rhs: r.coefficient(rhs, "RHS")?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "validated {} variable, {} objective and {} constraint rows",
        variables.len(),
        objective.len(),
        constraints.len()
    );

    Ok(ValidatedTables {
        variables,
        objective,
        constraints,
    })
}

/// Indices of the required columns, in declaration order. All missing
/// columns are reported at once.
fn resolve_columns<const N: usize>(
    table: &Table,
    kind: TableKind,
) -> Result<[usize; N], SchemaError> {
    let required = kind.required_columns();
    debug_assert_eq!(required.len(), N);

    let mut indices = [0; N];
    let mut missing = Vec::new();
    for (slot, name) in indices.iter_mut().zip(required) {
        match table.column_index(name) {
            Some(i) => *slot = i,
            None => missing.push(name.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(SchemaError::MissingColumns {
            table: kind,
            columns: missing,
        })
    }
}

fn require_rows(table: &Table, kind: TableKind) -> Result<(), SchemaError> {
    if data_rows(table, kind).next().is_none() {
        return Err(SchemaError::EmptyTable { table: kind });
    }
    Ok(())
}

/// Rows that carry at least one non-blank cell. Trailing blank rows are
/// common in spreadsheet exports and are not data.
fn data_rows(table: &Table, kind: TableKind) -> impl Iterator<Item = RowReader<'_>> {
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, cells)| !cells.iter().all(Cell::is_blank))
        .map(move |(index, _)| RowReader { table, kind, index })
}

struct RowReader<'a> {
    table: &'a Table,
    kind: TableKind,
    index: usize,
}

impl<'a> RowReader<'a> {
    fn number(&self) -> usize {
        self.index + 1
    }

    fn cell(&self, column: usize) -> &'a Cell {
        self.table.cell(self.index, column)
    }

    fn required_text(&self, column: usize, name: &'static str) -> Result<String, SchemaError> {
        let cell = self.cell(column);
        if cell.is_blank() {
            return Err(SchemaError::BlankCell {
                table: self.kind,
                row: self.number(),
                column: name,
            });
        }
        Ok(cell.as_text())
    }

    fn lower_bound(&self, column: usize) -> Result<f64, BuildError> {
        match parse_number(self.cell(column)) {
            Some(Ok(v)) if v != f64::INFINITY => Ok(v),
            _ => Err(self.invalid_bound(column, "LowerBound")),
        }
    }

    fn upper_bound(&self, column: usize) -> Result<Option<f64>, BuildError> {
        match parse_number(self.cell(column)) {
            None => Ok(None),
            Some(Ok(v)) if v != f64::NEG_INFINITY => Ok(Some(v)),
            _ => Err(self.invalid_bound(column, "UpperBound")),
        }
    }

    fn coefficient(&self, column: usize, name: &'static str) -> Result<f64, BuildError> {
        match parse_number(self.cell(column)) {
            Some(Ok(v)) if v.is_finite() => Ok(v),
            _ => Err(BuildError::InvalidCoefficient {
                table: self.kind,
                row: self.number(),
                column: name,
                value: self.cell(column).as_text(),
            }),
        }
    }

    fn invalid_bound(&self, column: usize, name: &'static str) -> BuildError {
        BuildError::InvalidBound {
            table: self.kind,
            row: self.number(),
            column: name,
            value: self.cell(column).as_text(),
        }
    }
}

/// `None` for a blank cell, `Some(Err(()))` when the cell is not a number.
fn parse_number(cell: &Cell) -> Option<Result<f64, ()>> {
    let value = match cell {
        _ if cell.is_blank() => return None,
        Cell::Number(n) => Ok(*n),
        Cell::Text(s) => s.trim().parse::<f64>().map_err(|_| ()),
        Cell::Empty => return None,
    };
    Some(value.and_then(|v| if v.is_nan() { Err(()) } else { Ok(v) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variables_table() -> Table {
        Table::new(["Variable", "LowerBound", "UpperBound", "Category"])
            .with_row(vec!["x".into(), 0.0.into(), 10.0.into(), "Continuous".into()])
            .with_row(vec![" y ".into(), "0".into(), Cell::Empty, "Integer".into()])
    }

    fn objective_table() -> Table {
        Table::new(["Variable", "Coefficient"])
            .with_row(vec!["x".into(), 3.0.into()])
            .with_row(vec!["y".into(), "5".into()])
    }

    fn constraints_table() -> Table {
        Table::new(["Constraint", "Variable", "Coefficient", "RHS"])
            .with_row(vec!["c1".into(), "x".into(), 1.0.into(), 8.0.into()])
            .with_row(vec!["c1".into(), "y".into(), 1.0.into(), 8.0.into()])
    }

    fn tables() -> InputTables {
        InputTables::new(variables_table(), objective_table(), constraints_table())
    }

    #[test]
    fn test_validate_given_well_formed_tables_should_produce_typed_rows() {
        let validated = validate(&tables()).unwrap();

        assert_eq!(
            validated.variables[1],
            VariableRow {
                row: 2,
                name: "y".to_string(),
                lower_bound: 0.0,
                upper_bound: None,
                category: "Integer".to_string(),
            }
        );
        assert_eq!(validated.objective[1].coefficient, 5.0);
        assert_eq!(validated.constraints.len(), 2);
        assert_eq!(validated.constraints[0].rhs, 8.0);
    }

    #[test]
    fn test_validate_given_missing_columns_should_name_all_of_them() {
        let mut input = tables();
        input.constraints = Table::new(["Constraint", "Variable"]);

        let err = validate(&input).unwrap_err();
        assert_eq!(
            err,
            BuildError::Schema(SchemaError::MissingColumns {
                table: TableKind::Constraints,
                columns: vec!["Coefficient".to_string(), "RHS".to_string()],
            })
        );
    }

    #[test]
    fn test_validate_given_no_variable_rows_should_fail_with_empty_table() {
        let mut input = tables();
        input.variables.rows.clear();

        assert_eq!(
            validate(&input).unwrap_err(),
            BuildError::Schema(SchemaError::EmptyTable {
                table: TableKind::Variables
            })
        );
    }

    #[test]
    fn test_validate_given_empty_objective_should_accept() {
        let mut input = tables();
        input.objective.rows.clear();

        assert!(validate(&input).unwrap().objective.is_empty());
    }

    #[test]
    fn test_validate_given_text_lower_bound_should_fail_with_invalid_bound() {
        let mut input = tables();
        input.variables.rows[0][1] = "abc".into();

        assert_eq!(
            validate(&input).unwrap_err(),
            BuildError::InvalidBound {
                table: TableKind::Variables,
                row: 1,
                column: "LowerBound",
                value: "abc".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_given_blank_lower_bound_should_fail_with_invalid_bound() {
        let mut input = tables();
        input.variables.rows[1][1] = Cell::Empty;

        assert!(matches!(
            validate(&input),
            Err(BuildError::InvalidBound { row: 2, column: "LowerBound", .. })
        ));
    }

    #[test]
    fn test_validate_given_infinite_bounds_should_accept_open_directions_only() {
        let mut input = tables();
        input.variables.rows[0][1] = "-inf".into();
        input.variables.rows[0][2] = "inf".into();
        let validated = validate(&input).unwrap();
        assert_eq!(validated.variables[0].lower_bound, f64::NEG_INFINITY);
        assert_eq!(validated.variables[0].upper_bound, Some(f64::INFINITY));

        input.variables.rows[0][2] = "-inf".into();
        assert!(matches!(
            validate(&input),
            Err(BuildError::InvalidBound { column: "UpperBound", .. })
        ));
    }

    #[test]
    fn test_validate_given_non_numeric_rhs_should_fail_with_invalid_coefficient() {
        let mut input = tables();
        input.constraints.rows[1][3] = "eight".into();

        assert_eq!(
            validate(&input).unwrap_err(),
            BuildError::InvalidCoefficient {
                table: TableKind::Constraints,
                row: 2,
                column: "RHS",
                value: "eight".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_given_nan_coefficient_should_fail() {
        let mut input = tables();
        input.objective.rows[0][1] = "NaN".into();

        assert!(matches!(
            validate(&input),
            Err(BuildError::InvalidCoefficient {
                table: TableKind::Objective,
                column: "Coefficient",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_given_blank_constraint_name_should_fail_with_blank_cell() {
        let mut input = tables();
        input.constraints.rows[0][0] = " ".into();

        assert_eq!(
            validate(&input).unwrap_err(),
            BuildError::Schema(SchemaError::BlankCell {
                table: TableKind::Constraints,
                row: 1,
                column: "Constraint",
            })
        );
    }

    #[test]
    fn test_validate_given_trailing_blank_rows_should_skip_them() {
        let mut input = tables();
        input.variables.rows.push(vec![Cell::Empty, "".into()]);

        assert_eq!(validate(&input).unwrap().variables.len(), 2);
    }

    #[test]
    fn test_from_workbook_given_missing_sheet_should_name_it() {
        let workbook = Workbook::new()
            .with_sheet("Variables", variables_table())
            .with_sheet("Constraints", constraints_table());

        assert_eq!(
            InputTables::from_workbook(&workbook).unwrap_err(),
            SchemaError::MissingTable {
                table: TableKind::Objective
            }
        );
    }
}
