// HiGHS Solver Adapter (feature `highs`)
// Translates the domain model column by column into a HiGHS RowProblem

use crate::domain::{
    models::{OptimizationModel, SolveResult, SolverStatistics},
    solver_service::{SolverError, SolverService},
    value_objects::{ConstraintRelation, OptimizationSense, SolutionStatus},
};
use highs::{HighsModelStatus, RowProblem, Sense};
use std::time::Instant;

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, model: &OptimizationModel) -> Result<SolveResult, SolverError> {
        let start_time = Instant::now();

        // HiGHS wants one objective coefficient per column
        let mut column_costs = vec![0.0; model.num_variables()];
        for (id, coefficient) in model.objective.coefficients() {
            column_costs[id.0] = coefficient;
        }

        let mut pb = RowProblem::default();
        let mut columns = Vec::with_capacity(model.num_variables());

        for (var, &cost) in model.registry.iter().zip(&column_costs) {
            let lower = var.spec.lower_bound;
            let upper = var.spec.upper_bound.unwrap_or(f64::INFINITY);

            let col = if var.spec.is_integer() {
                pb.add_integer_column(cost, lower..upper)
            } else {
                pb.add_column(cost, lower..upper)
            };
            columns.push(col);
        }

        for group in &model.constraints {
            // Duplicate entries in one row are rejected by HiGHS, so sum them first
            let terms: Vec<_> = group
                .coefficients()
                .into_iter()
                .map(|(id, coefficient)| (columns[id.0], coefficient))
                .collect();

            match group.relation {
                ConstraintRelation::LessThanOrEqual => {
                    pb.add_row(..=group.rhs, &terms);
                }
            }
        }

        let sense = match model.sense() {
            OptimizationSense::Maximize => Sense::Maximise,
        };

        let mut highs_model = pb.optimise(sense);
        highs_model.set_option("output_flag", false);
        let solved = highs_model.solve();

        let statistics = SolverStatistics {
            solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
            ..model.statistics()
        };

        match verdict(solved.status())? {
            SolutionStatus::Optimal => {
                let values = solved.get_solution().columns().to_vec();
                Ok(SolveResult::optimal(model, values)
                    .with_message("Optimal solution found by HiGHS")
                    .with_statistics(statistics))
            }
            SolutionStatus::Infeasible => Ok(SolveResult::new(
                model,
                SolutionStatus::Infeasible,
                "Problem is infeasible: no solution satisfies all constraints",
            )
            .with_statistics(statistics)),
            SolutionStatus::Unbounded => Ok(SolveResult::new(
                model,
                SolutionStatus::Unbounded,
                "Problem is unbounded: objective can be improved infinitely",
            )
            .with_statistics(statistics)),
            SolutionStatus::Error => Ok(SolveResult::new(
                model,
                SolutionStatus::Error,
                format!("HiGHS stopped without a verdict: {:?}", solved.status()),
            )
            .with_statistics(statistics)),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}

/// Map a HiGHS terminal status onto a solution status. Load, model and
/// solve failures are engine errors; limits and unknown states carry no
/// verdict.
fn verdict(status: HighsModelStatus) -> Result<SolutionStatus, SolverError> {
    match status {
        HighsModelStatus::Optimal => Ok(SolutionStatus::Optimal),
        HighsModelStatus::Infeasible => Ok(SolutionStatus::Infeasible),
        HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
            Ok(SolutionStatus::Unbounded)
        }
        HighsModelStatus::LoadError
        | HighsModelStatus::ModelError
        | HighsModelStatus::PresolveError
        | HighsModelStatus::SolveError
        | HighsModelStatus::PostsolveError => Err(SolverError::ExecutionFailed(format!(
            "HiGHS solver returned status: {:?}",
            status
        ))),
        _ => Ok(SolutionStatus::Error),
    }
}
