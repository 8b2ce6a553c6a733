// Domain value objects representing core business concepts

use std::fmt;
use std::str::FromStr;

/// Domain of a decision variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableDomain {
    /// Continuous real number (x ∈ ℝ)
    Continuous,
    /// Integer number (x ∈ ℤ)
    Integer,
}

impl VariableDomain {
    /// Category literal that selects the integer domain.
    pub const INTEGER_CATEGORY: &'static str = "Integer";

    /// Resolve a Category cell. Only the exact literal `Integer` selects the
    /// integer domain; anything else, including an empty cell, is continuous.
    pub fn from_category(category: &str) -> Self {
        if category.trim() == Self::INTEGER_CATEGORY {
            VariableDomain::Integer
        } else {
            VariableDomain::Continuous
        }
    }
}

impl fmt::Display for VariableDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableDomain::Continuous => write!(f, "Continuous"),
            VariableDomain::Integer => write!(f, "Integer"),
        }
    }
}

/// Type of constraint comparison.
///
/// The tabular format carries no relation column, so every constraint is `≤`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintRelation {
    /// Less than or equal (≤)
    LessThanOrEqual,
}

impl fmt::Display for ConstraintRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintRelation::LessThanOrEqual => write!(f, "<="),
        }
    }
}

/// Direction of optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationSense {
    /// Maximize the objective function
    Maximize,
}

/// Status of a solve attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Found optimal solution
    Optimal,
    /// Problem has no feasible solution
    Infeasible,
    /// Objective can be improved infinitely
    Unbounded,
    /// Engine stopped without a definitive classification
    Error,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Optimal => write!(f, "Optimal"),
            SolutionStatus::Infeasible => write!(f, "Infeasible"),
            SolutionStatus::Unbounded => write!(f, "Unbounded"),
            SolutionStatus::Error => write!(f, "Error"),
        }
    }
}

/// Solver backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverBackend {
    /// Pick the best backend compiled into this build
    #[default]
    Auto,
    /// Pure-Rust microlp solver
    MicroLp,
    /// COIN-OR CBC solver
    CoinCbc,
    /// HiGHS solver
    Highs,
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::Auto => write!(f, "Auto"),
            SolverBackend::MicroLp => write!(f, "microlp"),
            SolverBackend::CoinCbc => write!(f, "COIN-OR CBC"),
            SolverBackend::Highs => write!(f, "HiGHS"),
        }
    }
}

/// Returned when a backend name cannot be recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown solver backend '{0}' (expected auto, microlp, cbc or highs)")]
pub struct UnknownBackendError(pub String);

impl FromStr for SolverBackend {
    type Err = UnknownBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(SolverBackend::Auto),
            "microlp" => Ok(SolverBackend::MicroLp),
            "cbc" | "coin_cbc" | "coin-cbc" => Ok(SolverBackend::CoinCbc),
            "highs" => Ok(SolverBackend::Highs),
            _ => Err(UnknownBackendError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_category_given_exact_literal_should_be_integer() {
        assert_eq!(VariableDomain::from_category("Integer"), VariableDomain::Integer);
        assert_eq!(VariableDomain::from_category(" Integer "), VariableDomain::Integer);
    }

    #[test]
    fn test_from_category_given_other_text_should_be_continuous() {
        assert_eq!(VariableDomain::from_category("integer"), VariableDomain::Continuous);
        assert_eq!(VariableDomain::from_category("Continuous"), VariableDomain::Continuous);
        assert_eq!(VariableDomain::from_category(""), VariableDomain::Continuous);
    }

    #[test]
    fn test_backend_from_str_given_aliases_should_parse() {
        assert_eq!("HiGHS".parse::<SolverBackend>(), Ok(SolverBackend::Highs));
        assert_eq!("cbc".parse::<SolverBackend>(), Ok(SolverBackend::CoinCbc));
        assert_eq!("coin_cbc".parse::<SolverBackend>(), Ok(SolverBackend::CoinCbc));
        assert_eq!(" microlp ".parse::<SolverBackend>(), Ok(SolverBackend::MicroLp));
        assert!("glpk".parse::<SolverBackend>().is_err());
    }
}
