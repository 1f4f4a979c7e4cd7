use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Operand count must be operator count + 1, got {operators} operators and {operands} operands")]
    OperandCountMismatch { operators: usize, operands: usize },
    #[error("Shape has {internal_nodes} internal nodes but {operators} operators were given")]
    ShapeMismatch {
        internal_nodes: usize,
        operators: usize,
    },
    #[error("Malformed expression: token sequence does not reduce to a single value")]
    MalformedExpression,
}
