use thiserror::Error;

/// Reasons a set of ranges cannot be turned into a tree.
///
/// Every variant names the position of the offending range in the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("interval #{index} is empty: its begin is not less than its end")]
    EmptyInterval { index: usize },
    #[error("interval #{index} has no lower bound")]
    UnboundedStart { index: usize },
    #[error("interval #{index} has no upper bound")]
    UnboundedEnd { index: usize },
    #[error("interval #{index} excludes its begin; only included begins are supported")]
    ExcludedStart { index: usize },
    #[error("interval #{index} has an inclusive end with no successor")]
    EndOverflow { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
