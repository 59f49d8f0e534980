//! Binary search helpers over sorted slices.

use std::cmp::Ordering;

/// Index of the first element of `sorted` that is not less than `value`.
///
/// Returns `sorted.len()` when every element is less than `value`, which makes the result a
/// valid insertion point.
pub fn lower_bound_index<T: Ord>(sorted: &[T], value: &T) -> usize {
    lower_bound_index_by(sorted, |probe| probe.cmp(value))
}

/// Like [`lower_bound_index`], with `cmp` ordering each element against the target.
pub fn lower_bound_index_by<T, F>(sorted: &[T], mut cmp: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    sorted.partition_point(|probe| cmp(probe) == Ordering::Less)
}
