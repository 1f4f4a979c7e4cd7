use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Not an integer or fraction: '{0}'")]
    InvalidNumber(String),
    #[error("Fraction has a zero denominator: '{0}'")]
    ZeroDenominator(String),
    #[error("Unknown operator symbol '{0}'")]
    UnknownOperator(char),
    #[error("Operator set cannot be empty")]
    EmptyOperatorSet,
}
