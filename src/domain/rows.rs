// Strongly-typed rows produced by schema validation.
// `row` is the 1-based data row number, kept for error reporting.

/// One row of the Variables table
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRow {
    pub row: usize,
    pub name: String,
    pub lower_bound: f64,
    /// `None` when the cell was empty (unbounded above)
    pub upper_bound: Option<f64>,
    pub category: String,
}

/// One row of the Objective table
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveRow {
    pub row: usize,
    pub variable: String,
    pub coefficient: f64,
}

/// One row of the Constraints table
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintRow {
    pub row: usize,
    pub constraint: String,
    pub variable: String,
    pub coefficient: f64,
    pub rhs: f64,
}

/// All three tables after validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedTables {
    pub variables: Vec<VariableRow>,
    pub objective: Vec<ObjectiveRow>,
    pub constraints: Vec<ConstraintRow>,
}
