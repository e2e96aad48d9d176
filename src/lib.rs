//! # Sortkit
//!
//! `sortkit` is a small generic sorting library with four interchangeable algorithms and two
//! building blocks for working with data that is already sorted.
//!
//! | Function              | Time (average / worst) | Extra space | Stable |
//! |-----------------------|------------------------|-------------|--------|
//! | [`insertion_sort`]    | `O(n^2)` / `O(n^2)`    | none        | yes    |
//! | [`merge_sort`]        | `O(n log n)`           | `O(n)`      | yes    |
//! | [`quicksort`]         | `O(n log n)` / `O(n^2)`| none        | no     |
//! | [`radix_sort`]        | `O(w n)`               | `O(n)`      | no     |
//!
//! The building blocks are [`insert_sorted`], which adds one element to a sorted vector, and
//! [`merge_sorted_sets`], which merges two sorted slices (e.g. the results of a distributed sort).
//!
//! The comparison sorts accept any `PartialOrd` element: integers, floats, strings, or your own
//! types. [`radix_sort`] accepts the fixed-width integers, which it sorts byte by byte, plus
//! floats and strings, which it hands to a comparison sort.
//!
//! ## Usage
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let mut data = vec![5i64, -3, 8, 1];
//! radix_sort(&mut data);
//! assert_eq!(data, vec![-3, 1, 5, 8]);
//!
//! let data = insert_sorted(data, 2);
//! assert_eq!(data, vec![-3, 1, 2, 5, 8]);
//!
//! let merged = merge_sorted_sets(&data, &[0, 9]);
//! assert_eq!(merged, vec![-3, 0, 1, 2, 5, 8, 9]);
//! ```
//!
//! ## Floats
//!
//! `NaN` has no place in a float's order. The comparison sorts leave it wherever the algorithm
//! happens to put it, [`radix_sort`] moves every `NaN` to the front. In both cases all other
//! values come out in order.
//!
//! ## Preconditions
//!
//! [`insert_sorted`] and [`merge_sorted_sets`] assume their inputs are sorted and do not check.
//! [`try_insert_sorted`] and [`try_merge_sorted_sets`] check first and return a [`SortError`].

pub mod algo;
pub mod core;
pub mod error;

pub use crate::algo::Algorithm;
pub use crate::algo::insertion::{insert_sorted, insertion_sort, try_insert_sorted};
pub use crate::algo::merge::{
    MergeSorted, merge_iter, merge_sort, merge_sorted_sets, try_merge_sorted_sets,
};
pub use crate::algo::quick::quicksort;
pub use crate::algo::radix::radix_sort;
pub use crate::core::{RadixKey, RadixSortable, UnsignedKey};
pub use crate::error::{SortError, SortInput};

pub mod prelude {
    pub use crate::algo::Algorithm;
    pub use crate::algo::insertion::{insert_sorted, insertion_sort};
    pub use crate::algo::merge::{merge_sort, merge_sorted_sets};
    pub use crate::algo::quick::quicksort;
    pub use crate::algo::radix::radix_sort;
    pub use crate::core::RadixSortable;
}
