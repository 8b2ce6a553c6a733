// Domain service interface for solving optimization models
// Engines plug in behind this trait; the pipeline never names a concrete backend

use super::models::{OptimizationModel, SolveResult};

/// Failures of the engine itself. Infeasible or unbounded models are not
/// errors; they come back as a [`SolveResult`] status.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Solver not available: {0}")]
    SolverNotAvailable(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

/// Domain service interface for optimization engines
///
/// Implementations maximize the model's objective subject to its `≤`
/// constraints and report per-variable values in registry order.
pub trait SolverService: Send + Sync {
    /// Solve an assembled model
    fn solve(&self, model: &OptimizationModel) -> Result<SolveResult, SolverError>;

    /// Get the name of this solver backend
    fn name(&self) -> &str;

    /// Check if this solver supports mixed-integer programming
    fn supports_mip(&self) -> bool;
}
