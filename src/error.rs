//! Errors returned by the checked entry points.
//!
//! The sorts themselves never fail. Errors only come from parsing an [`Algorithm`](crate::Algorithm)
//! name and from the `try_` variants that validate their sorted-input precondition.

use std::fmt;

use thiserror::Error;

/// Which input of a checked operation violated the sorted precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortInput {
    /// The vector passed to [`try_insert_sorted`](crate::try_insert_sorted).
    Target,
    /// The first slice passed to [`try_merge_sorted_sets`](crate::try_merge_sorted_sets).
    Left,
    /// The second slice passed to [`try_merge_sorted_sets`](crate::try_merge_sorted_sets).
    Right,
}

impl fmt::Display for SortInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortInput::Target => "target",
            SortInput::Left => "left",
            SortInput::Right => "right",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("unknown sorting algorithm `{0}`")]
    UnknownAlgorithm(String),

    #[error("{input} input is not sorted: element {index} is less than its predecessor")]
    NotSorted { input: SortInput, index: usize },
}
