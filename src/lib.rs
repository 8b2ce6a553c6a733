// Domain layer: Business logic and rules
pub mod domain;

// Application layer: Table-to-model pipeline
pub mod application;

// Solver adapters: Concrete implementations of SolverService
pub mod solver;

// Infrastructure layer: External concerns (configuration, table files)
#[cfg(feature = "cli")]
pub mod infrastructure;

// Re-export commonly used types
pub use domain::{
    BuildError, Cell, ConstraintGroup, ConstraintRelation, DecisionVariable, Error, Objective,
    ObjectiveTerm, OptimizationModel, OptimizationSense, Result, SchemaError, SolutionStatus,
    SolveResult, SolverBackend, SolverConfig, SolverError, SolverService, Table, TableKind,
    VariableDomain, VariableRegistry, VariableSpec, Workbook,
};

pub use application::{build_model, run, InputTables, OutputRecord, RunOutcome, OBJECTIVE_KEY};

pub use solver::{MicroLpSolver, SolverFactory};

#[cfg(feature = "coin_cbc")]
pub use solver::CoinCbcSolver;

#[cfg(feature = "highs")]
pub use solver::HighsSolver;

#[cfg(feature = "cli")]
pub use infrastructure::AppConfig;
