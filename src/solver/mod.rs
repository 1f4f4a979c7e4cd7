pub mod constants;
mod config;
mod core;
mod errors;
mod result;

pub use config::{ShortCircuit, SolverConfig};
pub use self::core::{ExpressionSolver, select_solution};
pub use errors::SolverError;
pub use result::SearchResult;
