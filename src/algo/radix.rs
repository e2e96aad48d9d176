//! LSD byte radix sort and counting sort.
//!
//! Integers are sorted through their [`RadixKey`], one byte per pass, least significant byte
//! first. Types without a fixed-width key fall back to a comparison sort.

use crate::core::{RadixKey, RadixSortable, UnsignedKey};
use cuneiform::cuneiform;
use log::trace;
use std::cmp::Ordering;

/// Number of buckets for radix sort (256 for byte-wise).
pub const RADIX_BUCKETS: usize = 256;

// Cache-aligned counts struct.
#[cuneiform]
struct RadixCounts {
    data: [usize; RADIX_BUCKETS],
}

impl RadixCounts {
    fn new() -> Self {
        RadixCounts {
            data: [0; RADIX_BUCKETS],
        }
    }
}

/// Sorts a slice of integers, floats or strings in ascending order.
///
/// Fixed-width integers are sorted by bytes in `O(w n)` time, where `w` is the width of the
/// integer in bytes. 8-bit integers take a single counting pass; wider integers allocate one
/// auxiliary buffer the size of the slice. Signed integers are ordered by flipping their sign
/// bit (see [`RadixKey`]).
///
/// `f32`, `f64`, `String` and `&str` have no fixed-width key and are sorted with an
/// `O(n log n)` comparison sort instead. `NaN` values are placed before every other float;
/// their order among themselves is unspecified.
///
/// Slices shorter than two elements are left untouched.
///
/// # Examples
///
/// ```
/// use sortkit::radix_sort;
///
/// let mut data = [-1i8, -2, 3, 0];
/// radix_sort(&mut data);
///
/// assert_eq!(data, [-2, -1, 0, 3]);
/// ```
pub fn radix_sort<T: RadixSortable>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }
    T::sort_radix(v);
}

/// Counting sort for 8-bit keys.
///
/// Tallies every key value, then rewrites the slice from the table using the inverse key
/// transform. No auxiliary buffer is needed since the bucket table describes the whole slice.
pub(crate) fn counting_sort<T: RadixKey<Key = u8>>(v: &mut [T]) {
    trace!("counting sort: {} elements", v.len());

    let mut counts = RadixCounts::new();
    let counts = &mut counts.data;

    for x in v.iter() {
        counts[x.to_radix_key().digit(0)] += 1;
    }

    let mut start = 0;
    for (key, &count) in counts.iter().enumerate() {
        let end = start + count;
        v[start..end].fill(T::from_radix_key(key as u8));
        start = end;
    }
}

/// Least-significant-digit radix sort, one pass per key byte.
///
/// Each pass:
/// 1. Counts the elements per byte value.
/// 2. Turns the counts into inclusive prefix sums (bucket end offsets).
/// 3. Scans the source backwards and places every element at its decremented bucket offset
///    in the destination, which keeps equal bytes in their previous order.
/// 4. Swaps source and destination.
///
/// After an even number of passes the result is back in `v`; otherwise it is copied back.
pub(crate) fn lsd_radix_sort<T: RadixKey>(v: &mut [T]) {
    let passes = <T::Key as UnsignedKey>::BYTES;
    trace!("radix sort: {} elements, {} byte passes", v.len(), passes);

    let mut buffer = v.to_vec();
    {
        let mut src: &mut [T] = &mut *v;
        let mut dst: &mut [T] = &mut buffer;

        for pass in 0..passes {
            let mut counts = RadixCounts::new();
            let counts = &mut counts.data;

            for x in src.iter() {
                counts[x.to_radix_key().digit(pass)] += 1;
            }

            for i in 1..RADIX_BUCKETS {
                counts[i] += counts[i - 1];
            }

            for x in src.iter().rev() {
                let offset = &mut counts[x.to_radix_key().digit(pass)];
                *offset -= 1;
                dst[*offset] = *x;
            }

            std::mem::swap(&mut src, &mut dst);
        }
    }

    if passes % 2 == 1 {
        v.copy_from_slice(&buffer);
    }
}

/// Comparison fallback for floats.
///
/// Orders every unordered value (`NaN`) before all ordered ones, which keeps the comparator a
/// total order for the underlying sort.
pub(crate) fn float_fallback_sort<T: PartialOrd>(v: &mut [T]) {
    trace!("radix sort: {} floats, comparison fallback", v.len());
    v.sort_unstable_by(nan_first);
}

/// Comparison fallback for types with a total order but no fixed-width key.
pub(crate) fn comparison_fallback_sort<T: Ord>(v: &mut [T]) {
    trace!("radix sort: {} elements, comparison fallback", v.len());
    v.sort_unstable();
}

#[inline(always)]
fn nan_first<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => is_unordered(b).cmp(&is_unordered(a)),
    }
}

#[inline(always)]
fn is_unordered<T: PartialOrd>(x: &T) -> bool {
    x.partial_cmp(x).is_none()
}
