// Domain module: Business logic and models

pub mod error;
pub mod models;
pub mod registry;
pub mod rows;
pub mod solver_service;
pub mod table;
pub mod value_objects;

pub use error::{BuildError, Error, Result, SchemaError};
pub use models::*;
pub use registry::VariableRegistry;
pub use rows::*;
pub use solver_service::{SolverError, SolverService};
pub use table::*;
pub use value_objects::*;
