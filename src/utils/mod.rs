//! Input parsing and combinatorial helpers

mod combinatorics;
mod errors;
mod numbers;
mod operators;

pub use combinatorics::{distinct_permutations, operator_tuples};
pub use errors::UtilsError;
pub use numbers::{parse_number, parse_numbers};
pub use operators::parse_operators;
