use std::fmt;
use std::ops::Range;
#[cfg(feature="serde")]
use serde::{Serialize, Deserialize};

use crate::center::Midpoint;

/// A half-open interval `[begin, end)` as seen by the tree.
///
/// The tree only ever looks at the two projections; anything else an
/// implementor carries is opaque payload that is handed back by queries.
pub trait Interval {
    type Bound: Midpoint;

    fn begin(&self) -> &Self::Bound;
    fn end(&self) -> &Self::Bound;

    /// `begin <= point < end`
    fn contains_point(&self, point: &Self::Bound) -> bool {
        self.begin() <= point && point < self.end()
    }
}

impl<K: Midpoint> Interval for Range<K> {
    type Bound = K;

    fn begin(&self) -> &K {
        &self.start
    }

    fn end(&self) -> &K {
        &self.end
    }
}

/// An interval carrying an arbitrary value.
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Valued<K, V> {
    pub range: Range<K>,
    pub value: V,
}

impl<K, V> Valued<K, V> {
    pub fn new(begin: K, end: K, value: V) -> Self {
        Valued {
            range: begin..end,
            value,
        }
    }
}

impl<K: Midpoint, V> Interval for Valued<K, V> {
    type Bound = K;

    fn begin(&self) -> &K {
        &self.range.start
    }

    fn end(&self) -> &K {
        &self.range.end
    }
}

/// Exclusive ranges carry no value of their own; they get the default one.
impl<K, V: Default> From<Range<K>> for Valued<K, V> {
    fn from(range: Range<K>) -> Self {
        Valued {
            range,
            value: V::default(),
        }
    }
}

impl<K, V> fmt::Display for Valued<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{},{}): {}", self.range.start, self.range.end, self.value)
    }
}

/// Discrete bounds with a well-defined successor, used to turn an inclusive
/// end `e` into the exclusive end `e + 1`.
pub trait Discrete: Sized {
    /// The next value, or `None` on overflow.
    fn successor(&self) -> Option<Self>;
}

macro_rules! impl_discrete_int {
    ($($t:ty),* $(,)?) => {$(
        impl Discrete for $t {
            fn successor(&self) -> Option<Self> {
                self.checked_add(1)
            }
        }
    )*};
}

impl_discrete_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// How a stored interval `[b, e)` must relate to a query `[qb, qe)` to be
/// returned by a range query.
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The two share at least one point: `qb < e && qe > b`.
    #[default]
    Overlaps,
    /// The stored interval contains the query: `b <= qb && e >= qe`.
    Covers,
    /// The stored interval lies within the query: `b >= qb && e <= qe`.
    CoveredBy,
}

impl Relation {
    /// Whether `[begin, end)` stands in this relation to `query`.
    pub fn matches<K: Ord>(self, query: &Range<K>, begin: &K, end: &K) -> bool {
        match self {
            Relation::Overlaps => query.start < *end && query.end > *begin,
            Relation::Covers => *begin <= query.start && *end >= query.end,
            Relation::CoveredBy => *begin >= query.start && *end <= query.end,
        }
    }

    /// Shorthand for [`Relation::matches`] on an [`Interval`].
    pub fn matches_interval<I: Interval>(self, query: &Range<I::Bound>, interval: &I) -> bool {
        self.matches(query, interval.begin(), interval.end())
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Relation::Overlaps => write!(f, "overlaps"),
            Relation::Covers => write!(f, "covers"),
            Relation::CoveredBy => write!(f, "covered by"),
        }
    }
}
