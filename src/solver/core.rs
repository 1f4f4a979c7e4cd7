use itertools::Itertools;
use log::{debug, info, warn};
use num_rational::BigRational;
use rayon::prelude::*;
use std::sync::Arc;

use crate::expression::{ExpressionError, Operator, evaluate};
use crate::shape::{TreeShape, shapes};
use crate::solver::config::SolverConfig;
use crate::solver::constants::SELECTION_CONSTANT;
use crate::solver::errors::SolverError;
use crate::solver::result::SearchResult;
use crate::utils::{distinct_permutations, operator_tuples};

/// Brute-force search over shapes, operator tuples and number orderings
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find labelled shapes over `numbers` that evaluate exactly to `target`.
    ///
    /// Operator tuples are the outer loop, distinct orderings of the numbers
    /// the middle loop and shapes the inner loop; results come back in that
    /// order. With `stop_at_first` at most one result is returned, and it is
    /// the first one in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if `numbers` is empty, or if there are at least two
    /// numbers and no operator.
    pub fn search(
        &self,
        numbers: &[BigRational],
        operators: &[Operator],
        target: &BigRational,
        stop_at_first: bool,
    ) -> Result<Vec<SearchResult>, SolverError> {
        if numbers.is_empty() {
            warn!("Search requested without numbers");
            return Err(SolverError::EmptyNumbers);
        }
        let slots = numbers.len() - 1;
        let operators: Vec<Operator> = operators.iter().copied().unique().collect();
        if slots > 0 && operators.is_empty() {
            warn!("Search requested without operators");
            return Err(SolverError::NoOperators(numbers.len()));
        }

        let shapes = shapes(slots);
        let tuples = operator_tuples(&operators, slots);
        let permutations = distinct_permutations(numbers);

        info!(
            "Searching {} shapes x {} operator tuples x {} orderings for target {}",
            shapes.len(),
            tuples.len(),
            permutations.len(),
            target
        );

        let scan = |ops: &Vec<Operator>| {
            self.scan_operator_tuple(&shapes, ops, &permutations, target, stop_at_first)
        };

        let results: Vec<SearchResult> = if stop_at_first {
            let first = if self.config.parallel {
                tuples
                    .par_iter()
                    .find_map_first(|ops| first_of(scan(ops)))
            } else {
                tuples.iter().find_map(|ops| first_of(scan(ops)))
            };
            first.transpose()?.into_iter().collect()
        } else {
            let per_tuple: Vec<Vec<SearchResult>> = if self.config.parallel {
                tuples.par_iter().map(scan).collect::<Result<Vec<_>, SolverError>>()?
            } else {
                tuples.iter().map(scan).collect::<Result<Vec<_>, SolverError>>()?
            };
            per_tuple.into_iter().flatten().collect()
        };

        info!("Found {} matching expressions", results.len());
        Ok(results)
    }

    /// Evaluate every ordering of the numbers under one operator tuple
    fn scan_operator_tuple(
        &self,
        shapes: &[Arc<TreeShape>],
        operators: &[Operator],
        permutations: &[Vec<BigRational>],
        target: &BigRational,
        stop_at_first: bool,
    ) -> Result<Vec<SearchResult>, SolverError> {
        let shape_limit = if self.config.short_circuit.applies(operators) {
            1
        } else {
            shapes.len()
        };

        let mut found = Vec::new();
        for operands in permutations {
            for shape in shapes.iter().take(shape_limit) {
                match evaluate(shape, operators, operands) {
                    Ok(value) if &value == target => {
                        found.push(SearchResult {
                            shape: Arc::clone(shape),
                            operators: operators.to_vec(),
                            operands: operands.clone(),
                            value,
                        });
                        if stop_at_first {
                            return Ok(found);
                        }
                    }
                    Ok(_) => {}
                    Err(ExpressionError::DivisionByZero) => {
                        debug!("Skipping candidate with division by zero");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(found)
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

fn first_of(
    scanned: Result<Vec<SearchResult>, SolverError>,
) -> Option<Result<SearchResult, SolverError>> {
    match scanned {
        Ok(found) => found.into_iter().next().map(Ok),
        Err(e) => Some(Err(e)),
    }
}

/// Pick the reported solution: `SELECTION_CONSTANT` modulo the count, so
/// the choice is arbitrary but reproducible.
pub fn select_solution(results: &[SearchResult]) -> Option<(usize, &SearchResult)> {
    if results.is_empty() {
        return None;
    }
    let index = SELECTION_CONSTANT % results.len();
    results.get(index).map(|result| (index, result))
}
