use num_rational::BigRational;
use std::fmt;

use crate::expression::assignment::Assignment;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;
use crate::shape::TreeShape;

fn operand_to_string(value: &BigRational) -> String {
    if value.is_integer() {
        value.to_string()
    } else {
        format!("({})", value)
    }
}

impl Assignment<'_> {
    /// Infix form with every internal node parenthesized
    pub fn infix(&self) -> Result<String, ExpressionError> {
        self.fold(operand_to_string, |op, left, right| {
            format!("({} {} {})", left, op, right)
        })
    }
}

impl fmt::Display for Assignment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let infix = self.infix().map_err(|_| fmt::Error)?;
        write!(f, "{}", infix)
    }
}

/// # Errors
///
/// Returns an error if the operator and operand counts do not fit the shape.
pub fn render(
    shape: &TreeShape,
    operators: &[Operator],
    operands: &[BigRational],
) -> Result<String, ExpressionError> {
    Assignment::new(shape, operators, operands)?.infix()
}
