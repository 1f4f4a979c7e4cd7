use itertools::Itertools;
use log::debug;
use std::hash::Hash;

/// All orderings of `items`, with orderings that only swap equal values
/// reported once. Order is the lexicographic order of positions, first
/// occurrence kept.
pub fn distinct_permutations<T: Clone + Eq + Hash>(items: &[T]) -> Vec<Vec<T>> {
    let permutations: Vec<Vec<T>> = items
        .iter()
        .cloned()
        .permutations(items.len())
        .unique()
        .collect();
    debug!(
        "Generated {} distinct permutations of {} items",
        permutations.len(),
        items.len()
    );
    permutations
}

/// Every ordered tuple of `len` operators drawn with repetition, the last
/// position varying fastest. `len == 0` yields the single empty tuple.
pub fn operator_tuples<T: Clone>(operators: &[T], len: usize) -> Vec<Vec<T>> {
    if len == 0 {
        return vec![Vec::new()];
    }
    itertools::repeat_n(operators.iter().cloned(), len)
        .multi_cartesian_product()
        .collect()
}
