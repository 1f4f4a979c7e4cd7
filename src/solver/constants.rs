/// Fixed index, taken modulo the number of solutions, of the solution the
/// driver reports for a target.
pub const SELECTION_CONSTANT: usize = 1729;
