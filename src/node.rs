use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
#[cfg(feature="serde")]
use serde::{Serialize, Deserialize};

use crate::center::Center;
use crate::interval::{Interval, Relation};

/// One partition level of the tree.
///
/// Every interval in `s_center` spans the center (`begin <= center <= end`).
/// Everything under `left` ends before the center and everything under
/// `right` begins after it.
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature="serde", serde(bound(
    serialize = "I: Serialize, I::Bound: Serialize",
    deserialize = "I: Deserialize<'de>, I::Bound: Deserialize<'de>"
)))]
#[derive(Clone, Debug, PartialEq)]
pub struct Node<I: Interval> {
    x_center: Center<I::Bound>,
    // Ascending by begin.
    s_center: Vec<I>,
    // Indices into `s_center`, descending by end.
    end_order: Vec<usize>,
    left: Option<Box<Node<I>>>,
    right: Option<Box<Node<I>>>,
}

impl<I> fmt::Display for Node<I>
where
    I: Interval,
    I::Bound: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, " {{ {}", self.x_center)?;
        for interval in &self.s_center {
            write!(f, " [{},{})", interval.begin(), interval.end())?;
        }
        if let Some(left) = &self.left {
            write!(f, " left:{}", left)?;
        }
        if let Some(right) = &self.right {
            write!(f, " right:{}", right)?;
        }
        write!(f, " }} ")
    }
}

impl<I: Interval> Node<I> {
    pub(crate) fn new(
        x_center: Center<I::Bound>,
        mut s_center: Vec<I>,
        left: Option<Box<Node<I>>>,
        right: Option<Box<Node<I>>>,
    ) -> Node<I> {
        s_center.sort_by(|a, b| a.begin().cmp(b.begin()));
        let mut end_order: Vec<usize> = (0..s_center.len()).collect();
        end_order.sort_by(|&a, &b| s_center[b].end().cmp(s_center[a].end()));

        Node {
            x_center,
            s_center,
            end_order,
            left,
            right,
        }
    }

    /// The pivot this node partitions around.
    pub fn x_center(&self) -> &Center<I::Bound> {
        &self.x_center
    }

    /// Intervals spanning the center, ascending by begin.
    pub fn s_center(&self) -> &[I] {
        &self.s_center
    }

    /// Intervals spanning the center, descending by end.
    pub fn end_sorted(&self) -> impl Iterator<Item = &I> + '_ {
        self.end_order.iter().map(move |&ix| &self.s_center[ix])
    }

    pub fn left(&self) -> Option<&Node<I>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<I>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of intervals stored in this subtree.
    pub fn len(&self) -> usize {
        self.s_center.len()
            + self.left.as_ref().map_or(0, |l| l.len())
            + self.right.as_ref().map_or(0, |r| r.len())
    }

    /// Number of nodes on the longest path from here to a leaf, inclusive.
    pub fn depth(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |l| l.depth());
        let right = self.right.as_ref().map_or(0, |r| r.depth());
        1 + left.max(right)
    }

    /// Number of nodes in this subtree.
    pub(crate) fn node_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |l| l.node_count())
            + self.right.as_ref().map_or(0, |r| r.node_count())
    }

    /// Intervals of this subtree standing in `relation` to `query`, in no
    /// particular order.
    pub fn search(&self, query: &Range<I::Bound>, relation: Relation) -> Vec<&I> {
        let mut result = match relation {
            Relation::Overlaps => self.overlapping_center(query),
            _ => self
                .s_center
                .iter()
                .filter(|interval| relation.matches_interval(query, *interval))
                .collect(),
        };

        // Left intervals end before the center, so none can match a query
        // starting at or after it; symmetrically for the right.
        if let Some(left) = &self.left {
            if self.x_center.cmp_value(&query.start) == Ordering::Less {
                result.extend(left.search(query, relation));
            }
        }
        if let Some(right) = &self.right {
            if self.x_center.cmp_value(&query.end) == Ordering::Greater {
                result.extend(right.search(query, relation));
            }
        }
        result
    }

    /// Intervals of this subtree containing `point`.
    pub fn search_point(&self, point: &I::Bound) -> Vec<&I> {
        let mut result: Vec<&I> = self
            .s_center
            .iter()
            .filter(|interval| interval.contains_point(point))
            .collect();

        let child = if self.x_center.cmp_value(point) == Ordering::Less {
            &self.left
        } else {
            &self.right
        };
        if let Some(child) = child {
            result.extend(child.search_point(point));
        }
        result
    }

    /// Center intervals overlapping `query`.
    ///
    /// A non-empty query that ends at or before the center can only overlap
    /// intervals beginning before its end, which form a prefix of the
    /// begin-ascending list. One starting at or after the center can only
    /// overlap intervals ending after its start, a prefix of the
    /// end-descending list. A query straddling the center overlaps them all.
    fn overlapping_center(&self, query: &Range<I::Bound>) -> Vec<&I> {
        if query.start >= query.end {
            return self
                .s_center
                .iter()
                .filter(|interval| Relation::Overlaps.matches_interval(query, *interval))
                .collect();
        }

        if self.x_center.cmp_value(&query.end) != Ordering::Greater {
            let n = self
                .s_center
                .partition_point(|interval| interval.begin() < &query.end);
            self.s_center[..n].iter().collect()
        } else if self.x_center.cmp_value(&query.start) != Ordering::Less {
            let n = self
                .end_order
                .partition_point(|&ix| self.s_center[ix].end() > &query.start);
            self.end_order[..n]
                .iter()
                .map(|&ix| &self.s_center[ix])
                .collect()
        } else {
            self.s_center.iter().collect()
        }
    }
}
