use indexmap::IndexMap;

use super::registry::VariableRegistry;
use super::value_objects::{
    ConstraintRelation, OptimizationSense, SolutionStatus, SolverBackend, VariableDomain,
};

/// Declared shape of one decision variable
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSpec {
    pub name: String,
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
    pub domain: VariableDomain,
}

impl VariableSpec {
    pub fn continuous(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower_bound: 0.0,
            upper_bound: None,
            domain: VariableDomain::Continuous,
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            domain: VariableDomain::Integer,
            ..Self::continuous(name)
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: Option<f64>) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    pub fn is_integer(&self) -> bool {
        self.domain == VariableDomain::Integer
    }
}

/// Handle to a variable inside a [`VariableRegistry`]; its position in registry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(pub usize);

/// A variable owned by the registry for the lifetime of one run
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionVariable {
    pub id: VariableId,
    pub spec: VariableSpec,
}

impl DecisionVariable {
    pub fn name(&self) -> &str {
        &self.spec.name
    }
}

/// `coefficient × variable`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTerm {
    pub variable: VariableId,
    pub coefficient: f64,
}

impl LinearTerm {
    pub fn new(variable: VariableId, coefficient: f64) -> Self {
        Self {
            variable,
            coefficient,
        }
    }
}

pub type ObjectiveTerm = LinearTerm;

/// Sum coefficients of repeated variables, keeping first-appearance order.
pub fn collapse_terms(terms: &[LinearTerm]) -> Vec<(VariableId, f64)> {
    let mut summed: IndexMap<VariableId, f64> = IndexMap::with_capacity(terms.len());
    for term in terms {
        *summed.entry(term.variable).or_insert(0.0) += term.coefficient;
    }
    summed.into_iter().collect()
}

/// Linear objective; terms are kept as written, duplicates add up
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    pub sense: OptimizationSense,
    pub terms: Vec<ObjectiveTerm>,
}

impl Objective {
    pub fn maximize(terms: Vec<ObjectiveTerm>) -> Self {
        Self {
            sense: OptimizationSense::Maximize,
            terms,
        }
    }

    /// One summed coefficient per referenced variable.
    pub fn coefficients(&self) -> Vec<(VariableId, f64)> {
        collapse_terms(&self.terms)
    }

    /// Objective value for the given per-variable values.
    pub fn evaluate(&self, value_of: impl Fn(VariableId) -> f64) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coefficient * value_of(t.variable))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// One named linear inequality
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintGroup {
    pub name: String,
    pub terms: Vec<LinearTerm>,
    pub relation: ConstraintRelation,
    pub rhs: f64,
}

impl ConstraintGroup {
    pub fn new(name: impl Into<String>, rhs: f64) -> Self {
        Self {
            name: name.into(),
            terms: Vec::new(),
            relation: ConstraintRelation::LessThanOrEqual,
            rhs,
        }
    }

    pub fn coefficients(&self) -> Vec<(VariableId, f64)> {
        collapse_terms(&self.terms)
    }
}

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub backend: SolverBackend,
}

/// Complete optimization model, ready to hand to an engine
#[derive(Debug, Clone)]
pub struct OptimizationModel {
    pub registry: VariableRegistry,
    pub objective: Objective,
    pub constraints: Vec<ConstraintGroup>,
}

impl OptimizationModel {
    pub fn sense(&self) -> OptimizationSense {
        self.objective.sense
    }

    pub fn num_variables(&self) -> usize {
        self.registry.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn num_integer_variables(&self) -> usize {
        self.registry.iter().filter(|v| v.spec.is_integer()).count()
    }

    pub fn is_mixed_integer(&self) -> bool {
        self.num_integer_variables() > 0
    }

    pub fn statistics(&self) -> SolverStatistics {
        SolverStatistics {
            solve_time_ms: 0.0,
            num_variables: self.num_variables() as u32,
            num_constraints: self.num_constraints() as u32,
            num_integer_vars: self.num_integer_variables() as u32,
        }
    }
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverStatistics {
    pub solve_time_ms: f64,
    pub num_variables: u32,
    pub num_constraints: u32,
    pub num_integer_vars: u32,
}

/// What the engine reported for one model
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub status: SolutionStatus,
    pub objective_value: Option<f64>,
    /// Variable values keyed by name, in registry order
    pub values: IndexMap<String, Option<f64>>,
    pub message: String,
    pub statistics: SolverStatistics,
}

impl SolveResult {
    /// A result without values, e.g. for an infeasible or unbounded model.
    pub fn new(
        model: &OptimizationModel,
        status: SolutionStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            objective_value: None,
            values: model
                .registry
                .iter()
                .map(|v| (v.name().to_string(), None))
                .collect(),
            message: message.into(),
            statistics: model.statistics(),
        }
    }

    /// `values` must be in registry order, one per variable.
    pub fn optimal(model: &OptimizationModel, values: Vec<f64>) -> Self {
        let objective_value = model
            .objective
            .evaluate(|id| values.get(id.0).copied().unwrap_or(0.0));

        Self {
            status: SolutionStatus::Optimal,
            objective_value: Some(objective_value),
            values: model
                .registry
                .iter()
                .zip(values)
                .map(|(v, value)| (v.name().to_string(), Some(value)))
                .collect(),
            message: "Optimal solution found".to_string(),
            statistics: model.statistics(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_statistics(mut self, statistics: SolverStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied().flatten()
    }
}
