//! Implementation of a static centered interval tree ([`IntervalTree`]) over
//! half-open intervals `[begin, end)`. It is based on the data structure
//! described in de Berg et al. (2008, Section 10.1: Interval Trees). The
//! tree is built once from a fixed collection of intervals and provides
//! "stabbing queries" (which stored intervals contain point `p`?) as well as
//! range queries under three relations: [`Relation::Overlaps`],
//! [`Relation::Covers`] and [`Relation::CoveredBy`].
//!
//! Centers are compared exactly (see [`Midpoint`]), so any bound type that
//! implements it can be stored: all primitive integers, [`std::time::Duration`],
//! [`std::time::SystemTime`] and [`std::time::Instant`]. Fractional bounds are
//! available as `num_rational::Ratio` (exact) and `ordered_float::OrderedFloat`
//! (the center may round). Intervals can carry a payload through [`Valued`]
//! or any custom [`Interval`] implementation.

mod center;
mod error;
mod interval;
/// A static interval tree built from recursive center partitions.
pub mod interval_tree;
mod node;

pub use center::{Center, Midpoint};
pub use error::{Error, Result};
pub use interval::{Discrete, Interval, Relation, Valued};
pub use interval_tree::{IntervalTree, Query, QueryOptions};
pub use node::Node;
