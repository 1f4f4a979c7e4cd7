use num_rational::BigRational;
use std::fmt;
use std::sync::Arc;

use crate::expression::{Assignment, ExpressionError, Operator};
use crate::shape::TreeShape;

/// A labelled shape whose exact value matched the search target
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub shape: Arc<TreeShape>,
    pub operators: Vec<Operator>,
    pub operands: Vec<BigRational>,
    pub value: BigRational,
}

impl SearchResult {
    /// # Errors
    ///
    /// Only fails if the fields were edited into an inconsistent state.
    pub fn assignment(&self) -> Result<Assignment<'_>, ExpressionError> {
        Assignment::new(&self.shape, &self.operators, &self.operands)
    }

    /// Fully parenthesized infix form
    pub fn expression(&self) -> Result<String, ExpressionError> {
        self.assignment()?.infix()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let expression = self.expression().map_err(|_| fmt::Error)?;
        write!(f, "{} = {}", expression, self.value)
    }
}
