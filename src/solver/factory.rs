use crate::domain::{
    models::SolverConfig,
    solver_service::{SolverError, SolverService},
    value_objects::SolverBackend,
};
use crate::solver::MicroLpSolver;
use std::sync::Arc;

/// Factory for creating solver instances based on configuration
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver based on the configuration
    pub fn create_solver(config: &SolverConfig) -> Result<Arc<dyn SolverService>, SolverError> {
        Self::create_from_backend(config.backend)
    }

    /// Create a solver for a specific backend. Backends whose cargo feature is
    /// off are reported as not available.
    pub fn create_from_backend(backend: SolverBackend) -> Result<Arc<dyn SolverService>, SolverError> {
        match backend {
            SolverBackend::Auto => Ok(Self::default_solver()),
            SolverBackend::MicroLp => Ok(Arc::new(MicroLpSolver::new())),
            SolverBackend::CoinCbc => Self::coin_cbc(),
            SolverBackend::Highs => Self::highs(),
        }
    }

    /// Best backend compiled into this build: HiGHS, then CBC, then microlp
    pub fn default_solver() -> Arc<dyn SolverService> {
        match Self::highs().or_else(|_| Self::coin_cbc()) {
            Ok(solver) => solver,
            Err(_) => Arc::new(MicroLpSolver::new()),
        }
    }

    #[cfg(feature = "coin_cbc")]
    fn coin_cbc() -> Result<Arc<dyn SolverService>, SolverError> {
        Ok(Arc::new(crate::solver::CoinCbcSolver::new()))
    }

    #[cfg(not(feature = "coin_cbc"))]
    fn coin_cbc() -> Result<Arc<dyn SolverService>, SolverError> {
        Err(SolverError::SolverNotAvailable(
            "COIN-OR CBC support is not compiled in (enable the `coin_cbc` feature)".to_string(),
        ))
    }

    #[cfg(feature = "highs")]
    fn highs() -> Result<Arc<dyn SolverService>, SolverError> {
        Ok(Arc::new(crate::solver::HighsSolver::new()))
    }

    #[cfg(not(feature = "highs"))]
    fn highs() -> Result<Arc<dyn SolverService>, SolverError> {
        Err(SolverError::SolverNotAvailable(
            "HiGHS support is not compiled in (enable the `highs` feature)".to_string(),
        ))
    }
}
