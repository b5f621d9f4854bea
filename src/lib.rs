//! Implementation of a statically built interval tree
//! ([`interval_tree::IntervalTree`]) answering overlap queries over a fixed
//! collection of closed integer intervals. It is based on the classic
//! endpoint split-tree: the distinct endpoints of the input become the
//! leaves of a balanced binary tree combined bottom-up, every stored
//! interval is attached to the unique node whose split value it straddles,
//! and queries descend the tree pruning whole subtrees while scanning
//! per-node endpoint-sorted lists with an early exit. Construction is
//! one-shot; the finished tree is immutable and answers any number of
//! queries ("which stored intervals overlap interval `q`?", "which contain
//! point `p`?") in time proportional to the output size plus the tree
//! height.

/// The closed interval value type stored in and queried against the tree.
pub mod interval;
/// An interval tree built statically over endpoint split values.
pub mod interval_tree;
/// Nodes of the split tree, exposed read-only for introspection.
pub mod node;
mod sort;
