//! Endpoint orderings consumed by tree construction.

use crate::interval::Interval;

/// Indices of `intervals` ordered ascending by left endpoint.
pub(crate) fn indices_by_left<V>(intervals: &[Interval<V>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_unstable_by_key(|&i| intervals[i].left());
    order
}

/// Indices of `intervals` ordered ascending by right endpoint.
pub(crate) fn indices_by_right<V>(intervals: &[Interval<V>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_unstable_by_key(|&i| intervals[i].right());
    order
}

/// Every value occurring as a left or right endpoint across `intervals`,
/// sorted ascending and deduplicated.
pub(crate) fn distinct_endpoints<V>(intervals: &[Interval<V>]) -> Vec<i32> {
    let mut points: Vec<i32> = intervals
        .iter()
        .flat_map(|iv| [iv.left(), iv.right()])
        .collect();
    points.sort_unstable();
    points.dedup();
    points
}
