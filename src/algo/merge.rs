//! Stable top-down merge sort and sorted-merge primitives.

use std::iter::FusedIterator;

use crate::algo::first_unsorted;
use crate::error::{SortError, SortInput};

/// Sorts a slice with a stable merge sort.
///
/// Allocates one auxiliary buffer the size of the slice. The buffer and the slice swap roles
/// as source and destination at every recursion level, so the final merge writes straight into
/// `v` and no copy-back pass is needed.
///
/// Runs in `O(n log n)` time regardless of the input. Equal elements keep their input order.
///
/// # Examples
///
/// ```
/// use sortkit::merge_sort;
///
/// let mut data = vec![5, 3, 8, 1];
/// merge_sort(&mut data);
///
/// assert_eq!(data, vec![1, 3, 5, 8]);
/// ```
pub fn merge_sort<T: PartialOrd + Clone>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }

    let mut buffer = v.to_vec();
    split_merge(&mut buffer, v);
}

/// Sorts the range into `dst`, using `src` as scratch.
///
/// Both slices must hold the same elements on entry.
fn split_merge<T: PartialOrd + Clone>(src: &mut [T], dst: &mut [T]) {
    let len = dst.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    split_merge(&mut dst[..mid], &mut src[..mid]);
    split_merge(&mut dst[mid..], &mut src[mid..]);

    let (left, right) = src.split_at(mid);
    for (slot, item) in dst.iter_mut().zip(merge_iter(left, right)) {
        slot.clone_from(item);
    }
}

/// Merges two sorted slices into a new sorted vector of length `a.len() + b.len()`.
///
/// On ties the element from `a` comes first, so merging preserves the relative order of equal
/// elements. If either input is empty the result is a copy of the other.
///
/// Both inputs must already be sorted. This is not checked; unsorted input gives an unsorted
/// result. See [`try_merge_sorted_sets`] for a checked version.
///
/// # Examples
///
/// ```
/// use sortkit::merge_sorted_sets;
///
/// let merged = merge_sorted_sets(&[1, 3, 5], &[2, 4, 6]);
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn merge_sorted_sets<T: PartialOrd + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    merge_iter(a, b).cloned().collect()
}

/// Like [`merge_sorted_sets`], but rejects inputs that are not sorted.
///
/// # Errors
///
/// Returns [`SortError::NotSorted`] naming the first input found out of order and the index of
/// the first element that is less than its predecessor.
pub fn try_merge_sorted_sets<T: PartialOrd + Clone>(
    a: &[T],
    b: &[T],
) -> Result<Vec<T>, SortError> {
    if let Some(index) = first_unsorted(a) {
        return Err(SortError::NotSorted {
            input: SortInput::Left,
            index,
        });
    }
    if let Some(index) = first_unsorted(b) {
        return Err(SortError::NotSorted {
            input: SortInput::Right,
            index,
        });
    }
    Ok(merge_sorted_sets(a, b))
}

/// Returns a lazy iterator over the merge of two sorted slices.
///
/// Nothing is allocated; elements are yielded by reference. Ties favour `left`.
///
/// # Examples
///
/// ```
/// use sortkit::merge_iter;
///
/// let merged: Vec<u32> = merge_iter(&[1, 4], &[2, 3]).copied().collect();
/// assert_eq!(merged, vec![1, 2, 3, 4]);
/// ```
pub fn merge_iter<'a, T: PartialOrd>(left: &'a [T], right: &'a [T]) -> MergeSorted<'a, T> {
    MergeSorted { left, right }
}

/// Iterator returned by [`merge_iter`].
#[derive(Clone, Debug)]
pub struct MergeSorted<'a, T> {
    left: &'a [T],
    right: &'a [T],
}

impl<'a, T: PartialOrd> Iterator for MergeSorted<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match (self.left.split_first(), self.right.split_first()) {
            (Some((l, left_rest)), Some((r, right_rest))) => {
                if l <= r {
                    self.left = left_rest;
                    Some(l)
                } else {
                    self.right = right_rest;
                    Some(r)
                }
            }
            (Some((l, rest)), None) => {
                self.left = rest;
                Some(l)
            }
            (None, Some((r, rest))) => {
                self.right = rest;
                Some(r)
            }
            (None, None) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.left.len() + self.right.len();
        (len, Some(len))
    }
}

impl<T: PartialOrd> ExactSizeIterator for MergeSorted<'_, T> {}

impl<T: PartialOrd> FusedIterator for MergeSorted<'_, T> {}
