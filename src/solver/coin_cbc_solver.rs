// COIN-OR CBC adapter (feature `coin_cbc`); links the native Cbc library

use super::good_lp_model::solve_with;
use crate::domain::{
    models::{OptimizationModel, SolveResult},
    solver_service::{SolverError, SolverService},
};
use good_lp::solvers::coin_cbc::coin_cbc;

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, model: &OptimizationModel) -> Result<SolveResult, SolverError> {
        solve_with(model, coin_cbc, self.name())
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
