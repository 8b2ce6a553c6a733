// Shared translation of an OptimizationModel into a good_lp problem.
// Any good_lp backend whose model reports `ResolutionError` can reuse it.

use crate::domain::{
    models::{OptimizationModel, SolveResult, SolverStatistics},
    solver_service::SolverError,
    value_objects::{ConstraintRelation, OptimizationSense, SolutionStatus},
};
use good_lp::{
    solvers::Solver, variable, variables, Expression, ResolutionError, Solution, SolverModel,
    Variable as GoodLpVariable,
};
use std::time::Instant;

pub(crate) fn solve_with<S>(
    model: &OptimizationModel,
    solver: S,
    backend_name: &str,
) -> Result<SolveResult, SolverError>
where
    S: Solver + Copy,
    S::Model: SolverModel<Error = ResolutionError>,
{
    let start_time = Instant::now();

    // Engines may clamp infinite integer bounds to a finite range, which turns
    // an unbounded MIP into a bogus optimum. The continuous relaxation does not
    // have that problem.
    let relaxation_unbounded = model.num_integer_variables() > 0 && {
        let (relaxed, _) = translate(model, solver, true);
        matches!(relaxed.solve(), Err(ResolutionError::Unbounded))
    };
    if relaxation_unbounded {
        log::debug!("{}: continuous relaxation is unbounded", backend_name);
    }

    let (lp_model, lp_variables) = translate(model, solver, false);
    let outcome = lp_model.solve();
    let statistics = SolverStatistics {
        solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        ..model.statistics()
    };

    match outcome {
        // A feasible MIP whose relaxation is unbounded is itself unbounded
        Ok(_) | Err(ResolutionError::Unbounded) if relaxation_unbounded => {
            Ok(unbounded(model).with_statistics(statistics))
        }
        Ok(solution) => {
            let values = lp_variables.iter().map(|&v| solution.value(v)).collect();
            Ok(SolveResult::optimal(model, values)
                .with_message(format!("Optimal solution found by {}", backend_name))
                .with_statistics(statistics))
        }
        Err(ResolutionError::Infeasible) => Ok(SolveResult::new(
            model,
            SolutionStatus::Infeasible,
            "Problem is infeasible: no solution satisfies all constraints",
        )
        .with_statistics(statistics)),
        Err(ResolutionError::Unbounded) => Ok(unbounded(model).with_statistics(statistics)),
        Err(e) => Err(SolverError::ExecutionFailed(format!("{}: {}", backend_name, e))),
    }
}

fn unbounded(model: &OptimizationModel) -> SolveResult {
    SolveResult::new(
        model,
        SolutionStatus::Unbounded,
        "Problem is unbounded: objective can be improved infinitely",
    )
}

/// Build the good_lp model. With `relax` set, integer variables are
/// declared continuous.
fn translate<S>(
    model: &OptimizationModel,
    solver: S,
    relax: bool,
) -> (S::Model, Vec<GoodLpVariable>)
where
    S: Solver,
{
    // Build variables using good_lp, in registry order
    let mut vars = variables!();
    let mut lp_variables: Vec<GoodLpVariable> = Vec::with_capacity(model.num_variables());

    for var in model.registry.iter() {
        let spec = &var.spec;
        let mut definition = variable().name(spec.name.clone()).min(spec.lower_bound);
        if let Some(upper) = spec.upper_bound {
            definition = definition.max(upper);
        }
        if spec.is_integer() && !relax {
            definition = definition.integer();
        }
        lp_variables.push(vars.add(definition));
    }

    // Repeated variables simply add up inside the expression
    let mut objective: Expression = 0.into();
    for term in &model.objective.terms {
        objective += term.coefficient * lp_variables[term.variable.0];
    }

    let problem = match model.sense() {
        OptimizationSense::Maximize => vars.maximise(objective),
    };
    let mut lp_model = problem.using(solver);

    for group in &model.constraints {
        let mut lhs: Expression = 0.into();
        for term in &group.terms {
            lhs += term.coefficient * lp_variables[term.variable.0];
        }

        lp_model = match group.relation {
            ConstraintRelation::LessThanOrEqual => lp_model.with(lhs.leq(group.rhs)),
        };
    }

    (lp_model, lp_variables)
}
