// One optimization run: Validate → Registry → Objective → Constraints → Assemble → Solve → Project

use super::projector::{self, OutputRecord};
use super::schema::{self, InputTables};
use super::{assembler, constraints, objective, registry};
use crate::domain::{BuildError, OptimizationModel, Result, SolveResult, SolverService};

/// Everything a caller gets back from a run. The record is always present;
/// callers branch on `result.status` to tell optimal from other outcomes.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub result: SolveResult,
    pub record: OutputRecord,
}

/// Validate the tables and assemble the model without solving it.
pub fn build_model(tables: &InputTables) -> std::result::Result<OptimizationModel, BuildError> {
    let rows = schema::validate(tables)?;
    let registry = registry::build(&rows.variables)?;
    let objective = objective::build(&rows.objective, &registry)?;
    let constraints = constraints::build(&rows.constraints, &registry)?;
    Ok(assembler::assemble(registry, objective, constraints))
}

/// Run the whole pipeline. Build errors abort before the engine is called.
pub fn run(tables: &InputTables, solver: &dyn SolverService) -> Result<RunOutcome> {
    let model = build_model(tables)?;
    let result = assembler::solve(model, solver)?;
    let record = projector::project(&result);

    log::debug!("run finished with status {}", result.status);

    Ok(RunOutcome { result, record })
}
