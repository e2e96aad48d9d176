//! Insertion sort and single-element sorted insertion.

use crate::algo::first_unsorted;
use crate::error::{SortError, SortInput};

/// Sorts a slice in place with insertion sort.
///
/// Stable and adaptive: already sorted input takes `n - 1` comparisons, the worst case is
/// `O(n^2)`. Only worth it for small slices.
///
/// # Examples
///
/// ```
/// use sortkit::insertion_sort;
///
/// let mut data = [5, 3, 8, 1];
/// insertion_sort(&mut data);
///
/// assert_eq!(data, [1, 3, 5, 8]);
/// ```
pub fn insertion_sort<T: PartialOrd>(v: &mut [T]) {
    for i in 1..v.len() {
        shift_down(v, i);
    }
}

/// Appends `value` to a sorted vector and moves it to its sorted position.
///
/// The value is placed after any elements equal to it. Takes `O(n)` time.
///
/// `sorted` must already be sorted. This is not checked; on unsorted input the result is
/// generally not sorted either. See [`try_insert_sorted`] for a checked version.
///
/// # Examples
///
/// ```
/// use sortkit::insert_sorted;
///
/// let out = insert_sorted(vec![1, 2, 4, 5], 3);
/// assert_eq!(out, vec![1, 2, 3, 4, 5]);
/// ```
pub fn insert_sorted<T: PartialOrd>(mut sorted: Vec<T>, value: T) -> Vec<T> {
    sorted.push(value);
    let last = sorted.len() - 1;
    shift_down(&mut sorted, last);
    sorted
}

/// Like [`insert_sorted`], but rejects a target that is not sorted.
///
/// # Errors
///
/// Returns [`SortError::NotSorted`] with the index of the first element of `sorted` that is
/// less than its predecessor. `sorted` is dropped in that case.
pub fn try_insert_sorted<T: PartialOrd>(sorted: Vec<T>, value: T) -> Result<Vec<T>, SortError> {
    match first_unsorted(&sorted) {
        Some(index) => Err(SortError::NotSorted {
            input: SortInput::Target,
            index,
        }),
        None => Ok(insert_sorted(sorted, value)),
    }
}

/// Swaps `v[pos]` leftwards while its predecessor is strictly greater.
#[inline(always)]
fn shift_down<T: PartialOrd>(v: &mut [T], mut pos: usize) {
    while pos > 0 && v[pos - 1] > v[pos] {
        v.swap(pos - 1, pos);
        pos -= 1;
    }
}
