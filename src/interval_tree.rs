use std::cmp::Ordering;
use std::fmt;
use std::ops::Bound::*;
use std::ops::{Range, RangeBounds, RangeInclusive};

use log::{debug, trace};
#[cfg(feature="serde")]
use serde::{Serialize, Deserialize};

use crate::center::{Center, Midpoint};
use crate::error::{Error, Result};
use crate::interval::{Discrete, Interval, Relation};
use crate::node::Node;

/// What to look for: the intervals containing a point, or the intervals
/// standing in some [`Relation`] to a range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query<K> {
    Point(K),
    Range(Range<K>),
}

impl<K> From<Range<K>> for Query<K> {
    fn from(range: Range<K>) -> Self {
        Query::Range(range)
    }
}

/// Knobs for [`IntervalTree::query`].
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    /// Drop repeated results (by value equality). Defaults to `true`.
    pub unique: bool,
    /// Relation used by range queries; point queries ignore it. Defaults to
    /// [`Relation::Overlaps`].
    pub relation: Relation,
}

impl Default for QueryOptions {
    fn default() -> Self {
        QueryOptions {
            unique: true,
            relation: Relation::Overlaps,
        }
    }
}

impl QueryOptions {
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn relation(mut self, relation: Relation) -> Self {
        self.relation = relation;
        self
    }
}

/// A static centered interval tree.
///
/// The tree is built once from a fixed collection of half-open intervals and
/// never changes afterwards. Each node pivots around the exact midpoint of
/// the smallest begin and the largest end of the intervals it was built
/// from: intervals spanning that center stay at the node, those ending
/// before it go left and those beginning after it go right.
///
/// ```
/// use centered_interval_tree::IntervalTree;
///
/// let tree = IntervalTree::new(vec![0..5, 3..9, 12..20]).unwrap();
/// assert_eq!(tree.point(4), Some(vec![&(0..5), &(3..9)]));
/// assert_eq!(tree.overlaps(8..13), Some(vec![&(3..9), &(12..20)]));
/// ```
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature="serde", serde(bound(
    serialize = "I: Serialize, I::Bound: Serialize",
    deserialize = "I: Deserialize<'de>, I::Bound: Deserialize<'de>"
)))]
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalTree<I: Interval> {
    top_node: Option<Box<Node<I>>>,
}

impl<I: Interval> Default for IntervalTree<I> {
    fn default() -> Self {
        IntervalTree { top_node: None }
    }
}

impl<I> fmt::Display for IntervalTree<I>
where
    I: Interval,
    I::Bound: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.top_node {
            Some(node) => write!(f, "{}", node),
            None => write!(f, "{{}}"),
        }
    }
}

impl<I: Interval> IntervalTree<I> {
    /// Builds a tree from intervals that are already half-open.
    ///
    /// Fails on the first interval whose begin is not strictly less than its
    /// end.
    pub fn new<T>(intervals: T) -> Result<IntervalTree<I>>
    where
        T: IntoIterator<Item = I>,
    {
        let intervals: Vec<I> = intervals.into_iter().collect();
        for (index, interval) in intervals.iter().enumerate() {
            if interval.begin() >= interval.end() {
                return Err(Error::EmptyInterval { index });
            }
        }

        let count = intervals.len();
        let top_node = construct_tree(intervals);
        match &top_node {
            Some(node) => debug!(
                "built interval tree: {} intervals in {} nodes, depth {}",
                count,
                node.node_count(),
                node.depth()
            ),
            None => debug!("built empty interval tree"),
        }

        Ok(IntervalTree { top_node })
    }

    /// Builds a tree from arbitrary ranges, converting inclusive ends with
    /// `factory`.
    ///
    /// Ranges with an exclusive end are already half-open and go through
    /// `I::from`. For a range with an inclusive end `[begin, end]`, the
    /// factory is called with `(begin, end)` and must return the equivalent
    /// half-open interval, carrying whatever payload it likes.
    pub fn from_ranges_with<K, R, T, F>(ranges: T, mut factory: F) -> Result<IntervalTree<I>>
    where
        I: Interval<Bound = K> + From<Range<K>>,
        K: Midpoint,
        R: RangeBounds<K>,
        T: IntoIterator<Item = R>,
        F: FnMut(K, K) -> I,
    {
        let intervals = normalize(ranges, <I as From<Range<K>>>::from, |_, begin, end| {
            Ok(factory(begin, end))
        })?;
        IntervalTree::new(intervals)
    }

    /// The root, or `None` if the tree was built from no intervals.
    pub fn top_node(&self) -> Option<&Node<I>> {
        self.top_node.as_deref()
    }

    /// Number of stored intervals.
    pub fn len(&self) -> usize {
        self.top_node.as_ref().map_or(0, |node| node.len())
    }

    pub fn is_empty(&self) -> bool {
        self.top_node.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.top_node.as_ref().map_or(0, |node| node.depth())
    }

    /// Every stored interval, node by node in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &I> + '_ {
        let mut stack: Vec<&Node<I>> = self.top_node.as_deref().into_iter().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.right());
            stack.extend(node.left());
            Some(node)
        })
        .flat_map(|node| node.s_center().iter())
    }
}

impl<K> IntervalTree<Range<K>>
where
    K: Midpoint + Discrete,
{
    /// Builds a tree of plain ranges. Inclusive ends `e` become exclusive
    /// ends `e + 1`.
    ///
    /// ```
    /// use centered_interval_tree::IntervalTree;
    ///
    /// let tree = IntervalTree::from_ranges(vec![1..=4]).unwrap();
    /// assert_eq!(tree.point(4), Some(vec![&(1..5)]));
    /// assert_eq!(tree.point(5), Some(vec![]));
    /// ```
    pub fn from_ranges<R, T>(ranges: T) -> Result<IntervalTree<Range<K>>>
    where
        R: RangeBounds<K>,
        T: IntoIterator<Item = R>,
    {
        let intervals = normalize(ranges, |range| range, |index, begin, end: K| {
            let end = end.successor().ok_or(Error::EndOverflow { index })?;
            Ok(begin..end)
        })?;
        IntervalTree::new(intervals)
    }
}

impl<K: Midpoint> TryFrom<Range<K>> for IntervalTree<Range<K>> {
    type Error = Error;

    fn try_from(range: Range<K>) -> Result<Self> {
        IntervalTree::new([range])
    }
}

impl<K> TryFrom<RangeInclusive<K>> for IntervalTree<Range<K>>
where
    K: Midpoint + Discrete,
{
    type Error = Error;

    fn try_from(range: RangeInclusive<K>) -> Result<Self> {
        IntervalTree::from_ranges([range])
    }
}

impl<I> IntervalTree<I>
where
    I: Interval + PartialEq,
{
    /// Runs `query` against the tree.
    ///
    /// Returns `None` if the tree holds no intervals at all, and otherwise the
    /// matches sorted by `(begin, end)`. A range query whose begin lies after
    /// its end matches nothing.
    ///
    /// With `unique` set, results are deduplicated by value equality among
    /// matches sharing the same bounds; that step is quadratic in the size of
    /// such a group.
    pub fn query<Q>(&self, query: Q, options: QueryOptions) -> Option<Vec<&I>>
    where
        Q: Into<Query<I::Bound>>,
    {
        let top_node = self.top_node.as_ref()?;

        let mut result = match query.into() {
            Query::Point(point) => top_node.search_point(&point),
            Query::Range(range) if range.start > range.end => {
                debug!("inverted {} query matches nothing", options.relation);
                Vec::new()
            }
            Query::Range(range) => top_node.search(&range, options.relation),
        };

        result.sort_by(|a, b| cmp_bounds(*a, *b));
        if options.unique {
            dedup_sorted(&mut result);
        }
        Some(result)
    }

    /// Intervals containing `point`.
    pub fn point(&self, point: I::Bound) -> Option<Vec<&I>> {
        self.query(Query::Point(point), QueryOptions::default())
    }

    /// Intervals sharing at least one point with `range`.
    pub fn overlaps(&self, range: Range<I::Bound>) -> Option<Vec<&I>> {
        self.query(range, QueryOptions::default().relation(Relation::Overlaps))
    }

    /// Intervals containing all of `range`.
    pub fn covers(&self, range: Range<I::Bound>) -> Option<Vec<&I>> {
        self.query(range, QueryOptions::default().relation(Relation::Covers))
    }

    /// Intervals lying entirely within `range`.
    pub fn covered_by(&self, range: Range<I::Bound>) -> Option<Vec<&I>> {
        self.query(range, QueryOptions::default().relation(Relation::CoveredBy))
    }
}

/// Converts caller ranges into half-open intervals. `exclusive` handles
/// ranges whose end is already excluded, `inclusive` gets the position,
/// begin and included end of the others.
fn normalize<K, R, T, I, E, C>(ranges: T, mut exclusive: E, mut inclusive: C) -> Result<Vec<I>>
where
    K: Clone,
    R: RangeBounds<K>,
    T: IntoIterator<Item = R>,
    E: FnMut(Range<K>) -> I,
    C: FnMut(usize, K, K) -> Result<I>,
{
    ranges
        .into_iter()
        .enumerate()
        .map(|(index, range)| {
            let begin = match range.start_bound() {
                Included(begin) => begin.clone(),
                Excluded(_) => return Err(Error::ExcludedStart { index }),
                Unbounded => return Err(Error::UnboundedStart { index }),
            };
            match range.end_bound() {
                Excluded(end) => Ok(exclusive(begin..end.clone())),
                Included(end) => inclusive(index, begin, end.clone()),
                Unbounded => Err(Error::UnboundedEnd { index }),
            }
        })
        .collect()
}

fn construct_tree<I: Interval>(intervals: Vec<I>) -> Option<Box<Node<I>>> {
    let lo = intervals.iter().map(|i| i.begin()).min()?.clone();
    let hi = intervals.iter().map(|i| i.end()).max()?.clone();
    let x_center = Center::new(lo, hi);

    let mut s_center = Vec::new();
    let mut s_left = Vec::new();
    let mut s_right = Vec::new();
    for interval in intervals {
        if x_center.cmp_value(interval.end()) == Ordering::Less {
            s_left.push(interval);
        } else if x_center.cmp_value(interval.begin()) == Ordering::Greater {
            s_right.push(interval);
        } else {
            s_center.push(interval);
        }
    }
    trace!(
        "partitioned: {} at center, {} left, {} right",
        s_center.len(),
        s_left.len(),
        s_right.len()
    );

    Some(Box::new(Node::new(
        x_center,
        s_center,
        construct_tree(s_left),
        construct_tree(s_right),
    )))
}

fn cmp_bounds<I: Interval>(a: &I, b: &I) -> Ordering {
    a.begin().cmp(b.begin()).then_with(|| a.end().cmp(b.end()))
}

/// Removes repeated values from a list sorted by `(begin, end)`. Equal
/// values share their bounds, so each is only compared within its run.
///
/// Only `PartialEq` is available, so a run of `n` results with identical
/// bounds costs `O(n²)` comparisons. Runs are short unless many stored
/// intervals share both bounds while carrying distinct payloads; callers
/// expecting that can query with `unique(false)` and dedupe by key.
fn dedup_sorted<I: Interval + PartialEq>(result: &mut Vec<&I>) {
    let mut kept: Vec<&I> = Vec::with_capacity(result.len());
    let mut run_start = 0;
    for interval in result.drain(..) {
        if let Some(last) = kept.last() {
            if cmp_bounds(*last, interval) != Ordering::Equal {
                run_start = kept.len();
            }
        }
        if !kept[run_start..].contains(&interval) {
            kept.push(interval);
        }
    }
    *result = kept;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Valued;
    use num_rational::Ratio;
    use ordered_float::OrderedFloat;
    use std::time::{Duration, SystemTime};

    fn example_intervals() -> Vec<Range<i32>> {
        vec![
            10..14,
            2..20,
            0..5,
            0..8,
            3..6,
            15..20,
            16..21,
            17..25,
            21..24,
        ]
    }

    fn leaf(lo: i32, hi: i32, s_center: Vec<Range<i32>>) -> Option<Box<Node<Range<i32>>>> {
        Some(Box::new(Node::new(Center::new(lo, hi), s_center, None, None)))
    }

    #[test]
    fn divides_intervals() {
        let tree = IntervalTree::new(example_intervals()).unwrap();

        // 22.5
        let right_of_right = leaf(21, 24, vec![21..24]);
        // 20; 15..20 ends exactly at the center and stays there.
        let right = Node::new(
            Center::new(15, 25),
            vec![15..20, 16..21, 17..25],
            None,
            right_of_right,
        );
        // 4
        let left = leaf(0, 8, vec![0..5, 0..8, 3..6]);
        // 12.5
        let top = Node::new(
            Center::new(0, 25),
            vec![10..14, 2..20],
            left.clone(),
            Some(Box::new(right.clone())),
        );

        assert_eq!(tree.top_node(), Some(&top));
        assert_eq!(tree.top_node().unwrap().left(), left.as_deref());
        assert_eq!(tree.top_node().unwrap().right(), Some(&right));
        assert_eq!(tree.len(), 9);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn construction_is_deterministic() {
        let a = IntervalTree::new(example_intervals()).unwrap();
        let b = IntervalTree::new(example_intervals()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn center_uses_min_begin_and_max_end() {
        let tree = IntervalTree::new(vec![1..5, 2..6, 3..7]).unwrap();
        let center = tree.top_node().unwrap().x_center();
        assert_eq!(center.cmp_value(&4), Ordering::Equal);

        let tree = IntervalTree::from_ranges(vec![1..=5, 2..=6, 3..=7]).unwrap();
        let center = tree.top_node().unwrap().x_center();
        // 4.5
        assert_eq!(center.cmp_value(&4), Ordering::Less);
        assert_eq!(center.cmp_value(&5), Ordering::Greater);
    }

    #[test]
    fn overlap_query_on_example() {
        let tree = IntervalTree::new(example_intervals()).unwrap();
        assert_eq!(
            tree.overlaps(-5..3),
            Some(vec![&(0..5), &(0..8), &(2..20)])
        );
    }

    #[test]
    fn point_query_is_half_open() {
        let tree = IntervalTree::new(vec![1..5]).unwrap();
        assert_eq!(tree.point(3), Some(vec![&(1..5)]));
        assert_eq!(tree.point(5), Some(vec![]));
        assert_eq!(tree.point(1), Some(vec![&(1..5)]));
    }

    #[test]
    fn bare_inclusive_range() {
        let tree: IntervalTree<Range<i32>> = IntervalTree::try_from(1..=4).unwrap();
        assert_eq!(tree.point(4), Some(vec![&(1..5)]));
        assert_eq!(tree.point(5), Some(vec![]));
        assert_eq!(tree.point(1), Some(vec![&(1..5)]));

        let tree: IntervalTree<Range<i32>> = IntervalTree::try_from(1..4).unwrap();
        assert_eq!(tree.point(4), Some(vec![]));
    }

    #[test]
    fn point_query_returns_all_containing() {
        let tree = IntervalTree::new(vec![1..5, 2..6]).unwrap();
        assert_eq!(tree.point(3), Some(vec![&(1..5), &(2..6)]));

        let tree = IntervalTree::new(vec![0..8, 1..5, 2..6]).unwrap();
        assert_eq!(tree.point(3), Some(vec![&(0..8), &(1..5), &(2..6)]));
        assert_eq!(tree.overlaps(1..4), Some(vec![&(0..8), &(1..5), &(2..6)]));
    }

    #[test]
    fn overlap_query_excludes_touching_intervals() {
        let tree = IntervalTree::new(vec![1..3, 3..5]).unwrap();
        assert_eq!(tree.overlaps(3..9), Some(vec![&(3..5)]));

        let tree = IntervalTree::new(vec![1..3, 3..5, 4..8]).unwrap();
        assert_eq!(tree.overlaps(3..5), Some(vec![&(3..5), &(4..8)]));

        let tree = IntervalTree::new(vec![1..3, 3..5, 3..9, 4..8]).unwrap();
        assert_eq!(tree.overlaps(3..5), Some(vec![&(3..5), &(3..9), &(4..8)]));
    }

    #[test]
    fn covers_and_covered_by() {
        let tree = IntervalTree::new(example_intervals()).unwrap();
        assert_eq!(
            tree.covers(16..18),
            Some(vec![&(2..20), &(15..20), &(16..21)])
        );
        assert_eq!(tree.covers(0..25), Some(vec![]));
        assert_eq!(
            tree.covered_by(0..8),
            Some(vec![&(0..5), &(0..8), &(3..6)])
        );
        assert_eq!(
            tree.covered_by(15..25),
            Some(vec![&(15..20), &(16..21), &(17..25), &(21..24)])
        );
    }

    #[test]
    fn unique_drops_duplicates() {
        let tree = IntervalTree::new(vec![0..3, 1..4, 3..5, 0..3]).unwrap();
        assert_eq!(tree.point(2), Some(vec![&(0..3), &(1..4)]));
        assert_eq!(
            tree.query(Query::Point(2), QueryOptions::default().unique(false)),
            Some(vec![&(0..3), &(0..3), &(1..4)])
        );
    }

    #[test]
    fn unique_false_keeps_every_copy() {
        let tree = IntervalTree::new(vec![1..3, 1..3, 2..4, 1..3]).unwrap();
        let options = QueryOptions::default().unique(false);
        assert_eq!(
            tree.query(Query::Point(1), options),
            Some(vec![&(1..3), &(1..3), &(1..3)])
        );
        assert_eq!(tree.query(Query::Point(3), options), Some(vec![&(2..4)]));
        assert_eq!(
            tree.query(1..2, options.relation(Relation::Overlaps)),
            Some(vec![&(1..3), &(1..3), &(1..3)])
        );
    }

    #[test]
    fn unique_compares_payloads() {
        let tree = IntervalTree::new(vec![
            Valued::new(0, 3, 'a'),
            Valued::new(0, 3, 'b'),
            Valued::new(0, 3, 'a'),
        ])
        .unwrap();
        let values: Vec<char> = tree.point(1).unwrap().iter().map(|v| v.value).collect();
        assert_eq!(values, vec!['a', 'b']);
    }

    #[test]
    fn unique_keeps_distinct_payloads_with_shared_bounds() {
        let stored: Vec<Valued<i32, usize>> = (0..200).map(|v| Valued::new(0, 3, v % 50)).collect();
        let tree = IntervalTree::new(stored).unwrap();

        let values: Vec<usize> = tree.point(1).unwrap().iter().map(|v| v.value).collect();
        assert_eq!(values, (0..50).collect::<Vec<_>>());

        let all = tree.query(Query::Point(1), QueryOptions::default().unique(false)).unwrap();
        assert_eq!(all.len(), 200);
    }

    #[test]
    fn rational_bounds() {
        let r = |n: i64, d: i64| Ratio::new(n, d);
        let tree = IntervalTree::new(vec![r(1, 3)..r(1, 2), r(0, 1)..r(1, 4), r(3, 4)..r(1, 1)]).unwrap();

        // Center 1/2: the interval ending there stays at the root.
        let top = tree.top_node().unwrap();
        assert_eq!(top.x_center().cmp_value(&r(1, 2)), Ordering::Equal);
        assert_eq!(top.s_center(), &[r(1, 3)..r(1, 2)]);

        assert_eq!(tree.point(r(2, 5)), Some(vec![&(r(1, 3)..r(1, 2))]));
        assert_eq!(tree.point(r(1, 2)), Some(vec![]));
        assert_eq!(
            tree.overlaps(r(1, 5)..r(4, 5)),
            Some(vec![&(r(0, 1)..r(1, 4)), &(r(1, 3)..r(1, 2)), &(r(3, 4)..r(1, 1))])
        );
        assert_eq!(
            tree.covered_by(r(1, 4)..r(1, 1)),
            Some(vec![&(r(1, 3)..r(1, 2)), &(r(3, 4)..r(1, 1))])
        );
    }

    #[test]
    fn float_bounds() {
        let f = OrderedFloat;
        let tree = IntervalTree::new(vec![f(0.5f64)..f(1.5), f(0.0)..f(0.25), f(2.0)..f(3.0)]).unwrap();
        assert_eq!(tree.point(f(1.0)), Some(vec![&(f(0.5)..f(1.5))]));
        assert_eq!(tree.point(f(0.25)), Some(vec![]));
        assert_eq!(tree.covers(f(0.6)..f(1.4)), Some(vec![&(f(0.5)..f(1.5))]));
        assert_eq!(
            tree.overlaps(f(0.2)..f(2.1)),
            Some(vec![&(f(0.0)..f(0.25)), &(f(0.5)..f(1.5)), &(f(2.0)..f(3.0))])
        );
    }

    #[test]
    fn empty_tree_returns_none() {
        let tree: IntervalTree<Range<i32>> = IntervalTree::new(vec![]).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.point(5), None);
        assert_eq!(tree.overlaps(1..2), None);
        assert_eq!(tree.covers(1..2), None);
        assert_eq!(tree.covered_by(1..2), None);

        let tree: IntervalTree<Range<i32>> =
            IntervalTree::from_ranges(Vec::<RangeInclusive<i32>>::new()).unwrap();
        assert_eq!(tree.query(1..2, QueryOptions::default()), None);
        assert_eq!(tree, IntervalTree::default());
    }

    #[test]
    fn custom_factory_attaches_payload() {
        let tree = IntervalTree::from_ranges_with(vec![1..=5], |begin: i32, end: i32| {
            Valued::new(begin, end + 1, 15)
        })
        .unwrap();
        let hits = tree.point(2).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].value, 15);
        assert_eq!(hits[0].range, 1..6);
    }

    #[test]
    fn custom_factory_is_skipped_for_exclusive_ends() {
        let mut calls = 0;
        let tree: IntervalTree<Valued<i32, u32>> = IntervalTree::from_ranges_with(
            vec![(Included(1), Excluded(5)), (Included(2), Included(6))],
            |begin: i32, end: i32| {
                calls += 1;
                Valued::new(begin, end + 1, 7)
            },
        )
        .unwrap();
        assert_eq!(calls, 1);
        let values: Vec<u32> = tree.point(3).unwrap().iter().map(|v| v.value).collect();
        assert_eq!(values, vec![0, 7]);
    }

    #[test]
    fn rejects_invalid_ranges() {
        assert_eq!(
            IntervalTree::new(vec![0..3, 5..5]),
            Err(Error::EmptyInterval { index: 1 })
        );
        assert_eq!(
            IntervalTree::new(vec![4..1]),
            Err(Error::EmptyInterval { index: 0 })
        );
        assert_eq!(
            IntervalTree::from_ranges(vec![(Included(0), Unbounded)]),
            Err(Error::UnboundedEnd { index: 0 })
        );
        assert_eq!(
            IntervalTree::from_ranges(vec![(Unbounded, Excluded(3))]),
            Err(Error::UnboundedStart { index: 0 })
        );
        assert_eq!(
            IntervalTree::from_ranges(vec![(Included(0u8), Included(1)), (Excluded(0), Included(1))]),
            Err(Error::ExcludedStart { index: 1 })
        );
        assert_eq!(
            IntervalTree::from_ranges(vec![0u8..=255]),
            Err(Error::EndOverflow { index: 0 })
        );
        assert_eq!(
            IntervalTree::<Range<i32>>::try_from(3..=2),
            Err(Error::EmptyInterval { index: 0 })
        );
    }

    #[test]
    fn inverted_query_matches_nothing() {
        let tree = IntervalTree::new(example_intervals()).unwrap();
        let inverted = Range { start: 20, end: 3 };
        assert_eq!(tree.overlaps(inverted.clone()), Some(vec![]));
        assert_eq!(tree.covers(inverted), Some(vec![]));
    }

    #[test]
    fn wide_intervals_are_cheap() {
        let tree = IntervalTree::new(vec![1..10_000_000]).unwrap();
        assert_eq!(
            tree.overlaps(5_000_001..15_000_000),
            Some(vec![&(1..10_000_000)])
        );
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        let tree = IntervalTree::new(vec![i64::MIN..0, -1..i64::MAX, i64::MAX - 1..i64::MAX]).unwrap();
        assert_eq!(tree.point(-1), Some(vec![&(i64::MIN..0), &(-1..i64::MAX)]));
        assert_eq!(
            tree.point(i64::MAX - 1),
            Some(vec![&(-1..i64::MAX), &(i64::MAX - 1..i64::MAX)])
        );
    }

    #[test]
    fn time_ranges() {
        let day = Duration::from_secs(86_400);
        let nov_1 = SystemTime::UNIX_EPOCH + day * 18_567;
        let stored = nov_1..nov_1 + day * 19;
        let tree = IntervalTree::new(vec![stored.clone()]).unwrap();
        let needle = nov_1 + day * 4..nov_1 + day * 5;
        assert_eq!(tree.overlaps(needle.clone()), Some(vec![&stored]));
        assert_eq!(tree.covers(needle), Some(vec![&stored]));
    }

    #[test]
    fn iter_visits_every_interval_once() {
        let tree = IntervalTree::new(example_intervals()).unwrap();
        let mut all: Vec<Range<i32>> = tree.iter().cloned().collect();
        all.sort_by_key(|r| (r.start, r.end));
        let mut expected = example_intervals();
        expected.sort_by_key(|r| (r.start, r.end));
        assert_eq!(all, expected);
    }

    #[test]
    fn display() {
        let tree = IntervalTree::new(vec![0..4, 5..6]).unwrap();
        assert_eq!(tree.to_string(), " { (0+6)/2 [0,4) right: { (5+6)/2 [5,6) }  } ");
        let empty: IntervalTree<Range<i32>> = IntervalTree::default();
        assert_eq!(empty.to_string(), "{}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let tree = IntervalTree::new(example_intervals()).unwrap();
        let json = serde_json::to_string(&tree).unwrap();
        let back: IntervalTree<Range<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(tree, back);
    }
}
