use std::cmp::Ordering;
use std::fmt;
use std::time::{Duration, Instant, SystemTime};

use num_integer::Integer;
use num_rational::Ratio;
use ordered_float::OrderedFloat;
#[cfg(feature="serde")]
use serde::{Serialize, Deserialize};

/// A bound type whose values can be compared against the midpoint of two
/// other values without ever materializing that midpoint.
///
/// Computing `(lo + hi) / 2` directly either overflows (integers near their
/// limits) or rounds (integer division, floating point), and a rounded center
/// can put an interval on the wrong side of the node it was computed for.
/// Implementors instead answer "is `self` below, at, or above the exact
/// midpoint?", which only needs distances.
pub trait Midpoint: Ord + Clone + fmt::Debug {
    /// Orders `self` against the exact value of `(lo + hi) / 2`.
    ///
    /// Callers guarantee `lo <= hi`.
    fn cmp_midpoint(&self, lo: &Self, hi: &Self) -> Ordering;
}

macro_rules! impl_midpoint_int {
    ($($t:ty),* $(,)?) => {$(
        impl Midpoint for $t {
            fn cmp_midpoint(&self, lo: &Self, hi: &Self) -> Ordering {
                if self < lo {
                    Ordering::Less
                } else if self > hi {
                    Ordering::Greater
                } else {
                    // Within `[lo, hi]`: compare `self - lo` with `hi - self`.
                    self.abs_diff(*lo).cmp(&hi.abs_diff(*self))
                }
            }
        }
    )*};
}

impl_midpoint_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Midpoint for Duration {
    fn cmp_midpoint(&self, lo: &Self, hi: &Self) -> Ordering {
        if self < lo {
            Ordering::Less
        } else if self > hi {
            Ordering::Greater
        } else {
            (*self - *lo).cmp(&(*hi - *self))
        }
    }
}

impl Midpoint for SystemTime {
    fn cmp_midpoint(&self, lo: &Self, hi: &Self) -> Ordering {
        match (self.duration_since(*lo), hi.duration_since(*self)) {
            (Err(_), _) => Ordering::Less,
            (_, Err(_)) => Ordering::Greater,
            (Ok(below), Ok(above)) => below.cmp(&above),
        }
    }
}

impl Midpoint for Instant {
    fn cmp_midpoint(&self, lo: &Self, hi: &Self) -> Ordering {
        if self < lo {
            Ordering::Less
        } else if self > hi {
            Ordering::Greater
        } else {
            self.duration_since(*lo).cmp(&hi.duration_since(*self))
        }
    }
}

impl<T> Midpoint for Ratio<T>
where
    T: Clone + Integer + fmt::Debug,
{
    fn cmp_midpoint(&self, lo: &Self, hi: &Self) -> Ordering {
        if self < lo {
            Ordering::Less
        } else if self > hi {
            Ordering::Greater
        } else {
            (self.clone() - lo.clone()).cmp(&(hi.clone() - self.clone()))
        }
    }
}

// Floats cannot hold every midpoint exactly, so this one rounds: values
// within half an ulp of the true center may land on either side of it. The
// rounded center still lies within `[lo, hi]`, which is all partitioning
// needs to make progress.
macro_rules! impl_midpoint_float {
    ($($t:ty),* $(,)?) => {$(
        impl Midpoint for OrderedFloat<$t> {
            fn cmp_midpoint(&self, lo: &Self, hi: &Self) -> Ordering {
                // Halve first so that `lo + hi` cannot overflow to infinity.
                let mid = lo.0 / 2.0 + hi.0 / 2.0;
                self.cmp(&OrderedFloat(mid))
            }
        }
    )*};
}

impl_midpoint_float!(f32, f64);

/// The pivot of a node: the exact midpoint of the smallest begin and the
/// largest end among the intervals the node was built from.
///
/// The midpoint itself is never computed; `lo` and `hi` are kept so that
/// every comparison against the center stays exact.
#[cfg_attr(feature="serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Center<K> {
    lo: K,
    hi: K,
}

impl<K> Center<K> {
    /// Creates the center of `lo` and `hi`. Requires `lo <= hi`.
    pub fn new(lo: K, hi: K) -> Self {
        Center { lo, hi }
    }

    /// Smallest begin the center was computed from.
    pub fn lo(&self) -> &K {
        &self.lo
    }

    /// Largest end the center was computed from.
    pub fn hi(&self) -> &K {
        &self.hi
    }
}

impl<K: Midpoint> Center<K> {
    /// Orders `value` against this center.
    pub fn cmp_value(&self, value: &K) -> Ordering {
        value.cmp_midpoint(&self.lo, &self.hi)
    }
}

impl<K> fmt::Display for Center<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}+{})/2", self.lo, self.hi)
    }
}
