// Build-time error taxonomy. Any of these aborts a run before the engine is called.

use super::solver_service::SolverError;
use super::table::TableKind;

/// The input tables do not have the expected shape
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("missing table '{table}'")]
    MissingTable { table: TableKind },

    #[error("table '{table}' is missing required column(s): {}", .columns.join(", "))]
    MissingColumns {
        table: TableKind,
        columns: Vec<String>,
    },

    #[error("table '{table}' has no data rows")]
    EmptyTable { table: TableKind },

    #[error("table '{table}' row {row}: column '{column}' must not be blank")]
    BlankCell {
        table: TableKind,
        row: usize,
        column: &'static str,
    },
}

/// Errors raised while turning the tables into a model
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("table '{table}' row {row}: invalid {column} '{value}'")]
    InvalidBound {
        table: TableKind,
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("table '{table}' row {row}: invalid {column} '{value}'")]
    InvalidCoefficient {
        table: TableKind,
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("variable '{name}' is defined twice (rows {first_row} and {row})")]
    DuplicateVariable {
        name: String,
        first_row: usize,
        row: usize,
    },

    #[error("variable '{name}' (row {row}) has lower bound {lower} above upper bound {upper}")]
    InvertedBounds {
        name: String,
        row: usize,
        lower: f64,
        upper: f64,
    },

    #[error("variable name '{name}' (row {row}) is reserved for the objective value")]
    ReservedVariableName { name: String, row: usize },

    #[error("table '{table}' row {row}: unknown variable '{name}'")]
    UnknownVariable {
        table: TableKind,
        row: usize,
        name: String,
    },

    #[error(
        "constraint '{constraint}' row {row}: RHS {found} differs from {expected} given on its first row"
    )]
    ConstraintRhsMismatch {
        constraint: String,
        row: usize,
        expected: f64,
        found: f64,
    },
}

/// Any failure of a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model build failed: {0}")]
    Build(#[from] BuildError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

impl From<SchemaError> for Error {
    fn from(err: SchemaError) -> Self {
        Error::Build(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
