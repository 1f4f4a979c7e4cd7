use crate::shape::ast::TreeShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The `ordinal`-th internal node, i.e. the slot of the ordinal-th operator
    Internal { ordinal: usize },
    /// The `ordinal`-th leaf, i.e. the slot of the ordinal-th operand
    Leaf { ordinal: usize },
}

/// One node of a shape as seen by the canonical pre-order walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreorderNode {
    pub kind: NodeKind,
    /// Position of the parent in the pre-order sequence
    pub parent: Option<usize>,
    pub depth: usize,
}

impl TreeShape {
    /// Visit the node, then its left subtree, then its right subtree.
    ///
    /// This is the only traversal of a shape in the crate. Operators are
    /// assigned to internal nodes and operands to leaves in this order, and
    /// evaluation and rendering read labels back from the same sequence.
    pub fn preorder(&self) -> Vec<PreorderNode> {
        let mut nodes = Vec::with_capacity(2 * self.internal_nodes() + 1);
        let (mut internal, mut leaf) = (0, 0);

        let mut stack: Vec<(&TreeShape, Option<usize>, usize)> = vec![(self, None, 0)];
        while let Some((shape, parent, depth)) = stack.pop() {
            let position = nodes.len();
            match shape {
                TreeShape::Leaf => {
                    nodes.push(PreorderNode {
                        kind: NodeKind::Leaf { ordinal: leaf },
                        parent,
                        depth,
                    });
                    leaf += 1;
                }
                TreeShape::Internal(l, r) => {
                    nodes.push(PreorderNode {
                        kind: NodeKind::Internal { ordinal: internal },
                        parent,
                        depth,
                    });
                    internal += 1;
                    // right is pushed first so the left subtree is visited first
                    stack.push((&**r, Some(position), depth + 1));
                    stack.push((&**l, Some(position), depth + 1));
                }
            }
        }
        nodes
    }
}
