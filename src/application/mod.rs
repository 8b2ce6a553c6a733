// Application layer: the table-to-model pipeline

pub mod assembler;
pub mod constraints;
pub mod objective;
pub mod pipeline;
pub mod projector;
pub mod registry;
pub mod schema;

pub use pipeline::{build_model, run, RunOutcome};
pub use projector::{project, OutputRecord, OBJECTIVE_KEY};
pub use schema::{validate, InputTables};
