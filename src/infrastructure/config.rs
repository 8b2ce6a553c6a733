// Infrastructure: runtime configuration from the environment

use std::env;

use crate::domain::value_objects::{SolverBackend, UnknownBackendError};
use crate::domain::SolverConfig;

/// Environment variable selecting the solver backend
pub const SOLVER_ENV: &str = "TABLEOPT_SOLVER";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TABLEOPT_SOLVER: {0}")]
    InvalidSolver(#[from] UnknownBackendError),
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub solver: SolverConfig,
}

impl AppConfig {
    /// Load `.env` when present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(SOLVER_ENV).filter(|v| !v.trim().is_empty()) {
            config.solver.backend = value.parse()?;
        }

        Ok(config)
    }

    pub fn with_backend(mut self, backend: SolverBackend) -> Self {
        self.solver.backend = backend;
        self
    }
}
