use log::debug;
use num_rational::BigRational;

use crate::expression::assignment::{Assignment, Token};
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;
use crate::shape::TreeShape;

impl Assignment<'_> {
    /// Evaluate the reverse-Polish form with a value stack.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] if any division has a zero
    /// right operand.
    pub fn evaluate(&self) -> Result<BigRational, ExpressionError> {
        let rpn = self.rpn()?;
        let mut stack: Vec<BigRational> = Vec::with_capacity(self.operands().len());

        for token in rpn {
            match token {
                Token::Operand(value) => stack.push(value.clone()),
                Token::Operator(op) => {
                    let right = stack.pop().ok_or(ExpressionError::MalformedExpression)?;
                    let left = stack.pop().ok_or(ExpressionError::MalformedExpression)?;
                    stack.push(op.apply(&left, &right)?);
                }
            }
        }

        let value = stack.pop().ok_or(ExpressionError::MalformedExpression)?;
        if !stack.is_empty() {
            return Err(ExpressionError::MalformedExpression);
        }
        debug!("Expression evaluated to: {}", value);
        Ok(value)
    }
}

/// Evaluate `shape` labelled with `operators` and `operands` in pre-order.
///
/// # Errors
///
/// Returns an error on a count mismatch or a division by zero.
pub fn evaluate(
    shape: &TreeShape,
    operators: &[Operator],
    operands: &[BigRational],
) -> Result<BigRational, ExpressionError> {
    Assignment::new(shape, operators, operands)?.evaluate()
}
