//! Sorting algorithms.
//!
//! Each algorithm lives in its own module:
//! - [`insertion`]: Insertion sort and [`insert_sorted`](insertion::insert_sorted).
//! - [`merge`]: Stable merge sort and [`merge_sorted_sets`](merge::merge_sorted_sets).
//! - [`quick`]: In-place quicksort with Hoare partitioning.
//! - [`radix`]: Byte radix sort for integers with a comparison fallback.
//!
//! [`Algorithm`] selects one of them at runtime.

pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::core::RadixSortable;
use crate::error::SortError;

/// One of the four sorting algorithms.
///
/// # Examples
///
/// ```
/// use sortkit::Algorithm;
///
/// let algorithm: Algorithm = "merge-sort".parse().unwrap();
/// let mut data = [3u32, 1, 2];
/// algorithm.sort(&mut data);
///
/// assert_eq!(algorithm, Algorithm::Merge);
/// assert_eq!(data, [1, 2, 3]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Insertion,
    Merge,
    Quick,
    Radix,
}

impl Algorithm {
    /// Every algorithm, in the order they are documented.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Radix,
    ];

    /// Short lowercase name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Radix => "radix",
        }
    }

    /// Whether equal elements are guaranteed to keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Insertion | Algorithm::Merge)
    }

    /// Sorts `v` with this algorithm.
    pub fn sort<T: RadixSortable + PartialOrd + Clone>(self, v: &mut [T]) {
        trace!("{} sort: {} elements", self, v.len());
        match self {
            Algorithm::Insertion => insertion::insertion_sort(v),
            Algorithm::Merge => merge::merge_sort(v),
            Algorithm::Quick => quick::quicksort(v),
            Algorithm::Radix => radix::radix_sort(v),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Parses `insertion`, `merge`, `quick` or `radix`, ignoring case and an optional `sort`
    /// suffix (`quicksort`, `Merge-Sort`, `radix_sort`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let base = lower
            .strip_suffix("sort")
            .unwrap_or(&lower)
            .trim_end_matches(['-', '_', ' ']);

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == base)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

/// Index of the first element that is less than its predecessor.
pub(crate) fn first_unsorted<T: PartialOrd>(v: &[T]) -> Option<usize> {
    v.windows(2).position(|w| w[1] < w[0]).map(|i| i + 1)
}
