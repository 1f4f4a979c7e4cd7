//! Full binary tree shapes and their memoized enumeration

mod ast;
mod catalan;
mod enumerate;
mod errors;
mod traversal;

pub use ast::TreeShape;
pub use catalan::catalan;
pub use enumerate::{ShapeList, TreeEnumerator, node_count, shapes};
pub use errors::ShapeError;
pub use traversal::{NodeKind, PreorderNode};
