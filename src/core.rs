//! Core traits for radix sorting.
//!
//! This module defines:
//! - [`UnsignedKey`]: A fixed-width unsigned key that can be split into byte digits.
//! - [`RadixKey`]: The order-preserving transform from an element to its unsigned key.
//! - [`RadixSortable`]: The statically dispatched entry point used by [`radix_sort`](crate::radix_sort).
//!
//! All three traits are sealed. The set of radix-capable types is closed: fixed-width
//! integers sort by bytes, floats and strings fall back to a comparison sort.

use crate::algo::radix;

/// Number of bits in one radix digit.
pub const DIGIT_BITS: usize = 8;

/// A fixed-width unsigned integer key.
///
/// The key is consumed one byte at a time, least significant byte first.
pub trait UnsignedKey: Copy + private::Sealed {
    /// Width of the key in bytes, which is also the number of radix passes.
    const BYTES: usize;

    /// Returns the byte of the key at `pass`, where pass `0` is the least significant byte.
    fn digit(self, pass: usize) -> usize;
}

/// An element that maps onto an [`UnsignedKey`] of the same width without changing its order.
///
/// For unsigned integers the transform is the identity. For signed integers the sign bit is
/// flipped, which sends the most negative value to `0` and the most positive value to the
/// unsigned maximum while keeping every other bit in place.
///
/// # Examples
///
/// ```
/// use sortkit::core::RadixKey;
///
/// assert_eq!((-128i8).to_radix_key(), 0u8);
/// assert_eq!(127i8.to_radix_key(), 255u8);
/// assert_eq!(i8::from_radix_key(0x80), 0);
/// ```
pub trait RadixKey: Copy + private::Sealed {
    /// The unsigned key type with the same width as `Self`.
    type Key: UnsignedKey;

    /// Maps the element onto its unsigned key.
    fn to_radix_key(self) -> Self::Key;

    /// Inverse of [`to_radix_key`](RadixKey::to_radix_key).
    fn from_radix_key(key: Self::Key) -> Self;
}

/// Types that [`radix_sort`](crate::radix_sort) accepts.
///
/// Dispatch is resolved at compile time per element type:
/// - 8-bit integers run a single counting pass.
/// - Wider integers run one byte radix pass per key byte.
/// - `f32`, `f64`, `String` and `&str` fall back to a comparison sort.
pub trait RadixSortable: Sized + private::Sealed {
    /// Sorts `v` in ascending order.
    ///
    /// Callers go through [`radix_sort`](crate::radix_sort), which handles short slices.
    fn sort_radix(v: &mut [Self]);
}

macro_rules! impl_unsigned_key { ($($t:ty)*) => ($(
    impl UnsignedKey for $t {
        const BYTES: usize = std::mem::size_of::<$t>();

        #[inline(always)]
        fn digit(self, pass: usize) -> usize {
            ((self >> (pass * DIGIT_BITS)) & 0xFF) as usize
        }
    }

    impl RadixKey for $t {
        type Key = $t;

        #[inline(always)]
        fn to_radix_key(self) -> $t {
            self
        }

        #[inline(always)]
        fn from_radix_key(key: $t) -> $t {
            key
        }
    }
)*) }

impl_unsigned_key! { u8 u16 u32 u64 usize }

macro_rules! impl_signed_key { ($($t:ty => $u:ty),*) => ($(
    impl RadixKey for $t {
        type Key = $u;

        #[inline(always)]
        fn to_radix_key(self) -> $u {
            let sign: $u = 1 << (<$u>::BITS - 1);
            (self as $u) ^ sign
        }

        #[inline(always)]
        fn from_radix_key(key: $u) -> $t {
            let sign: $u = 1 << (<$u>::BITS - 1);
            (key ^ sign) as $t
        }
    }
)*) }

impl_signed_key! { i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize }

macro_rules! impl_counting { ($($t:ty)*) => ($(
    impl RadixSortable for $t {
        fn sort_radix(v: &mut [Self]) {
            radix::counting_sort(v);
        }
    }
)*) }

impl_counting! { u8 i8 }

macro_rules! impl_byte_radix { ($($t:ty)*) => ($(
    impl RadixSortable for $t {
        fn sort_radix(v: &mut [Self]) {
            radix::lsd_radix_sort(v);
        }
    }
)*) }

impl_byte_radix! { u16 u32 u64 usize i16 i32 i64 isize }

macro_rules! impl_float_fallback { ($($t:ty)*) => ($(
    impl RadixSortable for $t {
        fn sort_radix(v: &mut [Self]) {
            radix::float_fallback_sort(v);
        }
    }
)*) }

impl_float_fallback! { f32 f64 }

impl RadixSortable for String {
    fn sort_radix(v: &mut [Self]) {
        radix::comparison_fallback_sort(v);
    }
}

impl RadixSortable for &str {
    fn sort_radix(v: &mut [Self]) {
        radix::comparison_fallback_sort(v);
    }
}

mod private {
    /// Seal for the radix traits; the set of supported element types is fixed.
    pub trait Sealed {}
    macro_rules! sealed_impl { ($($t:ty)*) => ($(
        impl Sealed for $t {}
    )*) }
    sealed_impl! {
        u8 u16 u32 u64 usize
        i8 i16 i32 i64 isize
        f32 f64
        String
    }
    impl Sealed for &str {}
}
