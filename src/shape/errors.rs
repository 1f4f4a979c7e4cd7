use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Internal node count must be non-negative, got {0}")]
    NegativeNodeCount(i64),
}
