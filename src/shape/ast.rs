use std::sync::Arc;

/// Topology of a full binary tree, without operator or operand labels.
///
/// Subtrees are shared through `Arc`, so the shapes of size `n` produced by
/// the enumerator reuse the smaller shapes as substructure instead of copying.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TreeShape {
    Leaf,
    Internal(Arc<TreeShape>, Arc<TreeShape>),
}

impl TreeShape {
    pub fn internal(left: Arc<TreeShape>, right: Arc<TreeShape>) -> Self {
        TreeShape::Internal(left, right)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeShape::Leaf)
    }

    /// Number of internal (operator) nodes
    pub fn internal_nodes(&self) -> usize {
        match self {
            TreeShape::Leaf => 0,
            TreeShape::Internal(l, r) => 1 + l.internal_nodes() + r.internal_nodes(),
        }
    }

    /// Number of leaves (operand slots)
    pub fn leaves(&self) -> usize {
        match self {
            TreeShape::Leaf => 1,
            TreeShape::Internal(l, r) => l.leaves() + r.leaves(),
        }
    }

    /// Length of the longest root-to-leaf path, a lone leaf has depth 0
    pub fn depth(&self) -> usize {
        match self {
            TreeShape::Leaf => 0,
            TreeShape::Internal(l, r) => 1 + l.depth().max(r.depth()),
        }
    }
}
