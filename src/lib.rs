//! Treesearch - enumerate full binary tree shapes and search them for
//! arithmetic expressions that reach a target value
//!
//! Shapes are generated bottom-up with a memo table keyed by internal node
//! count. A shape labelled with operators and operands in pre-order is
//! evaluated with exact rationals, and the solver tries every shape, operator
//! tuple and distinct ordering of the input numbers.

pub mod expression;
pub mod shape;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Assignment, ExpressionError, Operator, evaluate, render};
pub use shape::{ShapeError, TreeEnumerator, TreeShape, shapes};
pub use solver::{ExpressionSolver, SearchResult, ShortCircuit, SolverConfig, SolverError};
pub use utils::UtilsError;

/// Find every expression over `numbers` that evaluates to `target`
///
/// This is a convenience function that parses its inputs and runs a default
/// solver.
///
/// # Arguments
///
/// * `numbers` - Integers or fractions such as `"6"` or `"3/4"`
/// * `operators` - Operator symbols such as `"+-*/"`
/// * `target` - The target value, in the same notation as the numbers
///
/// # Errors
///
/// This function will return an error if:
/// * A number or the target cannot be parsed
/// * The operator string is empty or holds an unknown symbol
/// * No numbers are given
///
/// # Examples
///
/// ```
/// use treesearch::find_expressions;
///
/// match find_expressions(&["6", "4", "3", "1"], "+-*/", "24") {
///     Ok(results) if results.is_empty() => println!("No solution"),
///     Ok(results) => println!("{} solutions", results.len()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_expressions(
    numbers: &[&str],
    operators: &str,
    target: &str,
) -> Result<Vec<SearchResult>, SolverError> {
    let numbers = utils::parse_numbers(numbers)?;
    let operators = utils::parse_operators(operators)?;
    let target = utils::parse_number(target)?;

    let solver = ExpressionSolver::default();
    solver.search(&numbers, &operators, &target, false)
}
