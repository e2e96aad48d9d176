//! In-place quicksort with Hoare partitioning.

/// Sorts a slice in place with quicksort.
///
/// The pivot is always the first element of the range and the range is split with Hoare's
/// partition scheme. The sort is not stable and allocates nothing.
///
/// Average time is `O(n log n)`. Already sorted and reverse sorted inputs hit the `O(n^2)`
/// worst case, and recursion then goes `O(n)` deep. The first-element pivot is kept as is; use
/// [`merge_sort`](crate::merge_sort) or [`radix_sort`](crate::radix_sort) when a worst-case
/// bound matters.
///
/// # Examples
///
/// ```
/// use sortkit::quicksort;
///
/// let mut data = vec!["banana", "apple", "cherry"];
/// quicksort(&mut data);
///
/// assert_eq!(data, vec!["apple", "banana", "cherry"]);
/// ```
pub fn quicksort<T: PartialOrd>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }

    let boundary = partition(v);
    let (left, right) = v.split_at_mut(boundary + 1);
    quicksort(left);
    quicksort(right);
}

/// Hoare partition around `v[0]`.
///
/// Returns `j` such that every element of `v[..=j]` is not greater than the pivot and every
/// element of `v[j + 1..]` is not less than it. `j < v.len() - 1`, so both sides are non-empty.
///
/// The pivot is tracked by index while swaps move it, so `T` needs no `Clone`.
fn partition<T: PartialOrd>(v: &mut [T]) -> usize {
    let mut pivot = 0;
    let mut i = 0;
    let mut j = v.len() - 1;

    loop {
        while v[i] < v[pivot] {
            i += 1;
        }
        while v[j] > v[pivot] {
            j -= 1;
        }
        if i >= j {
            return j;
        }

        v.swap(i, j);
        if pivot == i {
            pivot = j;
        } else if pivot == j {
            pivot = i;
        }

        // Step past the swapped pair, otherwise two elements equal to the pivot would be
        // swapped forever.
        i += 1;
        j -= 1;
    }
}
