use num_rational::BigRational;

use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;
use crate::shape::{NodeKind, TreeShape};

/// A shape labelled with one operator per internal node and one operand
/// per leaf, both in the shape's pre-order.
#[derive(Debug, Clone, Copy)]
pub struct Assignment<'a> {
    shape: &'a TreeShape,
    operators: &'a [Operator],
    operands: &'a [BigRational],
}

/// A labelled node of a linearized expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Operand(&'a BigRational),
    Operator(Operator),
}

impl<'a> Assignment<'a> {
    /// # Errors
    ///
    /// Returns an error unless `operands.len() == operators.len() + 1` and
    /// the shape has exactly one internal node per operator.
    pub fn new(
        shape: &'a TreeShape,
        operators: &'a [Operator],
        operands: &'a [BigRational],
    ) -> Result<Self, ExpressionError> {
        if operands.len() != operators.len() + 1 {
            return Err(ExpressionError::OperandCountMismatch {
                operators: operators.len(),
                operands: operands.len(),
            });
        }
        let internal_nodes = shape.internal_nodes();
        if internal_nodes != operators.len() {
            return Err(ExpressionError::ShapeMismatch {
                internal_nodes,
                operators: operators.len(),
            });
        }
        Ok(Self {
            shape,
            operators,
            operands,
        })
    }

    pub fn shape(&self) -> &'a TreeShape {
        self.shape
    }

    pub fn operators(&self) -> &'a [Operator] {
        self.operators
    }

    pub fn operands(&self) -> &'a [BigRational] {
        self.operands
    }

    /// Labels in pre-order (Polish notation)
    pub fn prefix(&self) -> Result<Vec<Token<'a>>, ExpressionError> {
        self.shape
            .preorder()
            .iter()
            .map(|node| match node.kind {
                NodeKind::Internal { ordinal } => self
                    .operators
                    .get(ordinal)
                    .map(|op| Token::Operator(*op)),
                NodeKind::Leaf { ordinal } => self.operands.get(ordinal).map(Token::Operand),
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(ExpressionError::MalformedExpression)
    }

    /// Reduce the pre-order labels bottom-up.
    ///
    /// Scanning the prefix sequence backwards, every operator finds its left
    /// operand on top of the stack and its right operand just below.
    pub fn fold<T>(
        &self,
        mut leaf: impl FnMut(&'a BigRational) -> T,
        mut node: impl FnMut(Operator, T, T) -> T,
    ) -> Result<T, ExpressionError> {
        let mut stack: Vec<T> = Vec::with_capacity(self.operands.len());
        for token in self.prefix()?.into_iter().rev() {
            match token {
                Token::Operand(value) => stack.push(leaf(value)),
                Token::Operator(op) => {
                    let left = stack.pop().ok_or(ExpressionError::MalformedExpression)?;
                    let right = stack.pop().ok_or(ExpressionError::MalformedExpression)?;
                    stack.push(node(op, left, right));
                }
            }
        }
        let result = stack.pop().ok_or(ExpressionError::MalformedExpression)?;
        if stack.is_empty() {
            Ok(result)
        } else {
            Err(ExpressionError::MalformedExpression)
        }
    }

    /// Labels in reverse-Polish order: left operand, right operand, operator
    pub fn rpn(&self) -> Result<Vec<Token<'a>>, ExpressionError> {
        self.fold(
            |value| vec![Token::Operand(value)],
            |op, mut left, right| {
                left.extend(right);
                left.push(Token::Operator(op));
                left
            },
        )
    }
}
