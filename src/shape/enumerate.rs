use log::{debug, info};
use std::sync::{Arc, Mutex, PoisonError};

use crate::shape::ast::TreeShape;
use crate::shape::errors::ShapeError;

/// Shapes of one size, shared between the memo table and its callers
pub type ShapeList = Arc<[Arc<TreeShape>]>;

static SHARED: Mutex<TreeEnumerator> = Mutex::new(TreeEnumerator::new());

/// Bottom-up enumerator of full binary tree shapes.
///
/// Entry `k` of the table holds every shape with `k` internal nodes. The
/// table only grows: an entry is written once and never touched again.
#[derive(Debug, Default)]
pub struct TreeEnumerator {
    table: Vec<ShapeList>,
}

impl TreeEnumerator {
    pub const fn new() -> Self {
        Self { table: Vec::new() }
    }

    /// Largest node count already memoized, if any
    pub fn memoized_up_to(&self) -> Option<usize> {
        self.table.len().checked_sub(1)
    }

    /// Every distinct shape with `n` internal nodes and `n + 1` leaves.
    ///
    /// For each split `i` (ascending) the left shapes of size `i` are
    /// combined with the right shapes of size `n - 1 - i`, left in the outer
    /// loop, so the order is reproducible.
    pub fn enumerate(&mut self, n: usize) -> ShapeList {
        if self.table.is_empty() {
            self.table.push(Arc::from(vec![Arc::new(TreeShape::Leaf)]));
        }

        for k in self.table.len()..=n {
            let mut shapes = Vec::new();
            for i in 0..k {
                if let (Some(lefts), Some(rights)) = (self.table.get(i), self.table.get(k - 1 - i))
                {
                    for left in lefts.iter() {
                        for right in rights.iter() {
                            shapes.push(Arc::new(TreeShape::internal(
                                Arc::clone(left),
                                Arc::clone(right),
                            )));
                        }
                    }
                }
            }
            debug!("Memoized {} shapes with {} internal nodes", shapes.len(), k);
            self.table.push(Arc::from(shapes));
        }

        self.table
            .get(n)
            .map(Arc::clone)
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    /// Same as [`TreeEnumerator::enumerate`] for a signed count.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeNodeCount`] when `n < 0`.
    pub fn enumerate_signed(&mut self, n: i64) -> Result<ShapeList, ShapeError> {
        let n = node_count(n)?;
        Ok(self.enumerate(n))
    }
}

/// Shapes with `n` internal nodes from the process-wide memo table.
pub fn shapes(n: usize) -> ShapeList {
    let mut enumerator = SHARED.lock().unwrap_or_else(PoisonError::into_inner);
    if enumerator.memoized_up_to().is_none_or(|top| top < n) {
        info!("Extending shared shape table up to {} internal nodes", n);
    }
    enumerator.enumerate(n)
}

/// # Errors
///
/// Returns an error if `n` is negative.
pub fn node_count(n: i64) -> Result<usize, ShapeError> {
    usize::try_from(n).map_err(|_| ShapeError::NegativeNodeCount(n))
}
