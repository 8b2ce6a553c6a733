// Model Assembler: compose the built parts and hand the model to an engine

use std::panic::{self, AssertUnwindSafe};

use crate::domain::{
    ConstraintGroup, Objective, OptimizationModel, SolutionStatus, SolveResult, SolverError,
    SolverService, VariableRegistry,
};

pub fn assemble(
    registry: VariableRegistry,
    objective: Objective,
    constraints: Vec<ConstraintGroup>,
) -> OptimizationModel {
    OptimizationModel {
        registry,
        objective,
        constraints,
    }
}

/// Solve the model, consuming it.
///
/// Infeasible and unbounded models are reported through the result status.
/// Engine failures, including a panic inside the engine, become
/// [`SolverError::ExecutionFailed`].
pub fn solve(model: OptimizationModel, solver: &dyn SolverService) -> Result<SolveResult, SolverError> {
    log::debug!(
        "solving {} variables ({} integer), {} constraints with {}",
        model.num_variables(),
        model.num_integer_variables(),
        model.num_constraints(),
        solver.name()
    );

    if model.is_mixed_integer() && !solver.supports_mip() {
        return Err(SolverError::SolverNotAvailable(format!(
            "{} cannot solve models with integer variables",
            solver.name()
        )));
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| solver.solve(&model)))
        .map_err(|payload| SolverError::ExecutionFailed(panic_message(payload.as_ref())))??;

    match result.status {
        SolutionStatus::Optimal => log::debug!(
            "optimal objective {:?} in {:.1} ms",
            result.objective_value,
            result.statistics.solve_time_ms
        ),
        status => log::warn!("solve finished with status {}: {}", status, result.message),
    }

    Ok(result)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("engine panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("engine panicked: {}", s)
    } else {
        "engine panicked".to_string()
    }
}
