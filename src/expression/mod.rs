//! Labelled expression trees: operators, assignments, evaluation and rendering

mod assignment;
mod display;
mod errors;
mod eval;
mod operator;

pub use assignment::{Assignment, Token};
pub use display::render;
pub use errors::ExpressionError;
pub use eval::evaluate;
pub use operator::Operator;

#[cfg(test)]
mod tests;
