use std::collections::VecDeque;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of the split tree.
///
/// A leaf stands for one distinct endpoint (`split == min == max`); an
/// internal node's split value is the mean of the gap between its two
/// children's endpoint ranges, and it owns both children exclusively.
/// `by_left` and `by_right` index into the owning tree's interval storage
/// and hold the same membership in two sort orders: ascending left
/// endpoint and ascending right endpoint.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub(crate) split: f64,
    pub(crate) min: f64,
    pub(crate) max: f64,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
    pub(crate) by_left: Vec<usize>,
    pub(crate) by_right: Vec<usize>,
}

impl Node {
    fn leaf(p: i32) -> Node {
        let p = f64::from(p);

        Node {
            split: p,
            min: p,
            max: p,
            left: None,
            right: None,
            by_left: Vec::new(),
            by_right: Vec::new(),
        }
    }

    fn parent(first: Box<Node>, second: Box<Node>) -> Node {
        Node {
            split: (first.max + second.min) / 2.0,
            min: first.min,
            max: second.max,
            left: Some(first),
            right: Some(second),
            by_left: Vec::new(),
            by_right: Vec::new(),
        }
    }

    /// Builds the split-tree skeleton over an ascending sequence of
    /// distinct endpoints, returning `None` for an empty sequence.
    ///
    /// Levels are combined bottom-up through a FIFO queue, pairing
    /// adjacent nodes in arrival order; an odd node left over at the end
    /// of a level is requeued unchanged and joins the next level.
    pub(crate) fn build(endpoints: &[i32]) -> Option<Box<Node>> {
        let mut queue: VecDeque<Box<Node>> = endpoints
            .iter()
            .map(|&p| Box::new(Node::leaf(p)))
            .collect();

        while queue.len() > 1 {
            let mut remaining = queue.len();
            while remaining > 1 {
                let first = queue.pop_front().expect("level holds two more nodes");
                let second = queue.pop_front().expect("level holds two more nodes");
                queue.push_back(Box::new(Node::parent(first, second)));
                remaining -= 2;
            }
            if remaining == 1 {
                let carried = queue.pop_front().expect("level holds one more node");
                queue.push_back(carried);
            }
        }

        queue.pop_front()
    }

    /// The value used to route queries left or right at this node.
    pub fn split_value(&self) -> f64 {
        self.split
    }

    /// The smallest endpoint covered by this node's subtree.
    pub fn min_split_value(&self) -> f64 {
        self.min
    }

    /// The largest endpoint covered by this node's subtree.
    pub fn max_split_value(&self) -> f64 {
        self.max
    }

    /// The left child, or `None` for a leaf.
    pub fn left_child(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The right child, or `None` for a leaf.
    pub fn right_child(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Whether this node is a leaf for a single endpoint. Internal nodes
    /// always have both children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Indices of the intervals assigned to this node, ascending by left
    /// endpoint.
    pub fn left_intervals(&self) -> &[usize] {
        &self.by_left
    }

    /// Indices of the intervals assigned to this node, ascending by right
    /// endpoint.
    pub fn right_intervals(&self) -> &[usize] {
        &self.by_right
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_leaf() {
            write!(f, " {{ {} |{}| }} ", self.split, self.by_left.len())
        } else {
            write!(
                f,
                " {{ {} [{}..{}] |{}| ",
                self.split,
                self.min,
                self.max,
                self.by_left.len()
            )?;
            if let Some(ref left) = self.left {
                write!(f, "left:{left}")?;
            }
            if let Some(ref right) = self.right {
                write!(f, "right:{right}")?;
            }
            write!(f, "}} ")
        }
    }
}
