use log::debug;
use num_rational::BigRational;
use num_traits::Zero;
use std::fmt;

use crate::expression::errors::ExpressionError;

/// Binary arithmetic operator over exact rationals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Accepts the ASCII symbols plus `x`, `×` and `÷`
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' | 'x' | '×' => Some(Operator::Mul),
            '/' | '÷' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Whether the operator is both associative and commutative, so a chain
    /// of it gives the same value under any bracketing.
    pub fn is_associative_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }

    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when dividing by zero.
    pub fn apply(
        self,
        left: &BigRational,
        right: &BigRational,
    ) -> Result<BigRational, ExpressionError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                if right.is_zero() {
                    debug!("Division by zero attempted: {} / {}", left, right);
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
