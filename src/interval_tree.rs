use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interval::Interval;
use crate::node::Node;
use crate::sort;

/// Error returned when tree construction cannot produce a root.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The input interval set was empty, so there are no endpoints to
    /// derive a split tree from.
    #[error("cannot build an interval tree from an empty interval set")]
    Empty,
}

/// Which mapping pass an interval is being routed for.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// A static interval tree answering overlap queries over a fixed set of
/// closed integer intervals.
///
/// The distinct endpoints of the input become the leaves of a balanced
/// binary split tree. Each stored interval lives at exactly one node: the
/// first node on its root path whose split value it straddles. A node
/// keeps its assigned intervals in two orders, ascending by left endpoint
/// and ascending by right endpoint, so a query falling entirely to one
/// side of a split can stop scanning at the first non-overlapping
/// interval and prune the far subtree altogether.
///
/// Construction is one-shot and the finished tree is immutable, so shared
/// references may be queried concurrently from any number of threads.
///
/// # Examples
///
/// ```
/// use split_interval_tree::interval::Interval;
/// use split_interval_tree::interval_tree::IntervalTree;
///
/// let tree = IntervalTree::new(vec![
///     Interval::new(1, 5, "a")?,
///     Interval::new(10, 15, "b")?,
///     Interval::new(3, 8, "c")?,
/// ])?;
///
/// let query = Interval::new(4, 6, ())?;
/// let mut found: Vec<&str> = tree
///     .find_overlaps(&query)
///     .into_iter()
///     .map(|iv| *iv.value())
///     .collect();
/// found.sort_unstable();
/// assert_eq!(found, ["a", "c"]);
///
/// assert!(tree.find_point(9).is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalTree<V> {
    intervals: Vec<Interval<V>>,
    root: Box<Node>,
}

impl<V> IntervalTree<V> {
    /// Builds the tree over `intervals`.
    ///
    /// Derives the distinct-endpoint split skeleton, then maps every
    /// interval to the unique node whose split value it straddles, once in
    /// left-endpoint order and once in right-endpoint order, which leaves
    /// each node's two lists sorted by the respective endpoint with no
    /// extra sort step.
    ///
    /// Fails with [`BuildError::Empty`] on an empty input set; a
    /// constructed tree always has a root.
    pub fn new(intervals: Vec<Interval<V>>) -> Result<Self, BuildError> {
        let endpoints = sort::distinct_endpoints(&intervals);
        let mut root = Node::build(&endpoints).ok_or(BuildError::Empty)?;

        for index in sort::indices_by_left(&intervals) {
            place(&mut root, &intervals[index], index, Side::Left);
        }
        for index in sort::indices_by_right(&intervals) {
            place(&mut root, &intervals[index], index, Side::Right);
        }

        Ok(IntervalTree { intervals, root })
    }

    /// All stored intervals overlapping `query`, each exactly once, in no
    /// particular order. Touching endpoints count as overlap. Returns an
    /// empty vector when nothing overlaps.
    ///
    /// The query's payload is ignored; pass `()` when there is none.
    pub fn find_overlaps<Q>(&self, query: &Interval<Q>) -> Vec<&Interval<V>> {
        let mut found = Vec::new();
        self.collect_overlaps(&self.root, query, &mut found);
        found
    }

    /// All stored intervals containing the point `p`.
    pub fn find_point(&self, p: i32) -> Vec<&Interval<V>> {
        self.find_overlaps(&Interval::point(p, ()))
    }

    /// The number of stored intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// The stored intervals, in their original input order.
    pub fn intervals(&self) -> impl Iterator<Item = &Interval<V>> {
        self.intervals.iter()
    }

    /// The root of the split tree, for diagnostics and tests.
    pub fn root(&self) -> &Node {
        &self.root
    }

    fn collect_overlaps<'a, Q>(
        &'a self,
        node: &'a Node,
        query: &Interval<Q>,
        found: &mut Vec<&'a Interval<V>>,
    ) {
        if query.contains_split(node.split_value()) {
            // Everything assigned here straddles the split value and so
            // does the query, so all of it overlaps; either side of the
            // split may still hold more matches.
            found.extend(node.left_intervals().iter().map(|&i| &self.intervals[i]));
            if let Some(left) = node.left_child() {
                self.collect_overlaps(left, query, found);
            }
            if let Some(right) = node.right_child() {
                self.collect_overlaps(right, query, found);
            }
        } else if node.split_value() < f64::from(query.left()) {
            // The query lies entirely right of the split. Assigned
            // intervals all start at or before the split, so only those
            // reaching far enough right overlap, and they sit at the tail
            // of the right-sorted list.
            for &i in node.right_intervals().iter().rev() {
                let interval = &self.intervals[i];
                if !interval.intersects(query) {
                    break;
                }
                found.push(interval);
            }
            if let Some(right) = node.right_child() {
                self.collect_overlaps(right, query, found);
            }
        } else {
            // Mirror image: the query lies entirely left of the split.
            for &i in node.left_intervals() {
                let interval = &self.intervals[i];
                if !interval.intersects(query) {
                    break;
                }
                found.push(interval);
            }
            if let Some(left) = node.left_child() {
                self.collect_overlaps(left, query, found);
            }
        }
    }
}

/// Routes `interval` down from `node` to the first node whose split value
/// it straddles and records `index` in that node's list for `side`.
///
/// Interval endpoints are themselves leaves of the split tree, so the walk
/// always reaches a node it can record into before running out of
/// children.
fn place<V>(mut node: &mut Node, interval: &Interval<V>, index: usize, side: Side) {
    loop {
        if interval.contains_split(node.split) {
            match side {
                Side::Left => node.by_left.push(index),
                Side::Right => node.by_right.push(index),
            }
            return;
        }

        let next = if node.split < f64::from(interval.left()) {
            node.right.as_deref_mut()
        } else {
            node.left.as_deref_mut()
        };
        node = next.expect("interval routing reaches a straddled split before a leaf's children");
    }
}

impl<V> fmt::Display for IntervalTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IntervalTree({} intervals){}", self.intervals.len(), self.root)
    }
}
