// microlp adapter: pure-Rust simplex with branch-and-bound, always compiled in

use super::good_lp_model::solve_with;
use crate::domain::{
    models::{OptimizationModel, SolveResult},
    solver_service::{SolverError, SolverService},
};
use good_lp::solvers::microlp::microlp;

pub struct MicroLpSolver;

impl MicroLpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MicroLpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for MicroLpSolver {
    fn solve(&self, model: &OptimizationModel) -> Result<SolveResult, SolverError> {
        solve_with(model, microlp, self.name())
    }

    fn name(&self) -> &str {
        "microlp"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::assembler::assemble;
    use crate::domain::{
        ConstraintGroup, LinearTerm, Objective, SolutionStatus, VariableId, VariableRegistry,
        VariableSpec,
    };

    const EPS: f64 = 1e-6;

    fn model(x: VariableSpec, y: VariableSpec, objective: &[f64], limit: Option<f64>) -> OptimizationModel {
        let mut registry = VariableRegistry::new();
        registry.insert(x);
        registry.insert(y);
        let objective = Objective::maximize(
            objective
                .iter()
                .enumerate()
                .map(|(i, &c)| LinearTerm::new(VariableId(i), c))
                .collect(),
        );
        let constraints = limit
            .map(|rhs| {
                let mut group = ConstraintGroup::new("limit", rhs);
                group.terms.push(LinearTerm::new(VariableId(0), 1.0));
                group.terms.push(LinearTerm::new(VariableId(1), 1.0));
                vec![group]
            })
            .unwrap_or_default();
        assemble(registry, objective, constraints)
    }

    #[test]
    fn test_solve_given_bounded_mip_should_return_optimum() {
        let model = model(
            VariableSpec::continuous("x").with_bounds(0.0, Some(10.0)),
            VariableSpec::integer("y"),
            &[3.0, 5.0],
            Some(8.0),
        );
        let result = MicroLpSolver::new().solve(&model).unwrap();

        assert_eq!(result.status, SolutionStatus::Optimal);
        assert!((result.value("y").unwrap() - 8.0).abs() < EPS);
        assert!(result.value("x").unwrap().abs() < EPS);
        assert!((result.objective_value.unwrap() - 40.0).abs() < EPS);
        assert_eq!(result.statistics.num_integer_vars, 1);
    }

    #[test]
    fn test_solve_given_free_direction_should_report_unbounded() {
        let model = model(
            VariableSpec::continuous("x").with_bounds(0.0, Some(10.0)),
            VariableSpec::continuous("y"),
            &[1.0, 1.0],
            None,
        );
        let result = MicroLpSolver::new().solve(&model).unwrap();

        assert_eq!(result.status, SolutionStatus::Unbounded);
        assert_eq!(result.objective_value, None);
        assert_eq!(result.value("x"), None);
    }

    #[test]
    fn test_solve_given_integer_without_upper_bound_should_report_unbounded() {
        let model = model(
            VariableSpec::continuous("x").with_bounds(0.0, Some(4.0)),
            VariableSpec::integer("y"),
            &[1.0, 2.0],
            None,
        );
        let result = MicroLpSolver::new().solve(&model).unwrap();

        assert_eq!(result.status, SolutionStatus::Unbounded);
        assert_eq!(result.value("y"), None);
        assert_eq!(result.objective_value, None);
    }

    #[test]
    fn test_solve_given_integer_with_negative_cost_should_stay_optimal() {
        // y is unbounded above but the objective pushes it down to its lower bound
        let model = model(
            VariableSpec::continuous("x").with_bounds(0.0, Some(4.0)),
            VariableSpec::integer("y"),
            &[1.0, -2.0],
            None,
        );
        let result = MicroLpSolver::new().solve(&model).unwrap();

        assert_eq!(result.status, SolutionStatus::Optimal);
        assert!((result.value("x").unwrap() - 4.0).abs() < EPS);
        assert!(result.value("y").unwrap().abs() < EPS);
    }

    #[test]
    fn test_solve_given_unreachable_limit_should_report_infeasible() {
        let model = model(
            VariableSpec::continuous("x").with_bounds(2.0, None),
            VariableSpec::continuous("y").with_bounds(2.0, None),
            &[1.0, 1.0],
            Some(1.0),
        );
        let result = MicroLpSolver::new().solve(&model).unwrap();

        assert_eq!(result.status, SolutionStatus::Infeasible);
        assert_eq!(result.values.len(), 2);
    }
}
