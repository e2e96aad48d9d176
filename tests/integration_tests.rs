use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortkit::prelude::*;
use std::fmt::Debug;

/// Runs every algorithm on a copy of `input` and compares against `expected`.
fn check<T: RadixSortable + PartialOrd + Clone + Debug>(input: &[T], expected: &[T]) {
    for algorithm in Algorithm::ALL {
        let mut data = input.to_vec();
        algorithm.sort(&mut data);
        assert_eq!(data, expected, "{algorithm} sort of {input:?}");
    }
}

macro_rules! integer_tests { ($($name:ident: $t:ty),*) => ($(
    mod $name {
        use super::*;

        #[test]
        fn test_fixed_cases() {
            check::<$t>(&[], &[]);
            check::<$t>(&[1], &[1]);
            check::<$t>(&[2, 1], &[1, 2]);
            check::<$t>(&[1, 2], &[1, 2]);
            check::<$t>(&[2, 3, 1], &[1, 2, 3]);
            check::<$t>(&[3, 2, 1], &[1, 2, 3]);
            check::<$t>(&[5, 3, 8, 1], &[1, 3, 5, 8]);
            check::<$t>(&[7, 5, 9, 3, 0, 1, 4, 6, 2, 8], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
            check::<$t>(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
            check::<$t>(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
            check::<$t>(&[2, 2, 8, 8, 4, 4, 6, 6, 0, 0], &[0, 0, 2, 2, 4, 4, 6, 6, 8, 8]);
            check::<$t>(&[7; 12], &[7; 12]);
        }

        #[test]
        fn test_extreme_values() {
            let (min, max) = (<$t>::MIN, <$t>::MAX);
            check::<$t>(&[1, min, 3, min], &[min, min, 1, 3]);
            check::<$t>(&[100, 1, max, 10], &[1, 10, 100, max]);
            check::<$t>(&[1, max, 100, min], &[min, 1, 100, max]);
        }

        #[test]
        fn test_random_matches_std_sort() {
            let mut rng = StdRng::seed_from_u64(0x5EED);
            let input: Vec<$t> = (0..1000).map(|_| rng.random::<u64>() as $t).collect();

            let mut expected = input.clone();
            expected.sort_unstable();

            check(&input, &expected);
        }
    }
)*) }

integer_tests! {
    sort_u8: u8, sort_u16: u16, sort_u32: u32, sort_u64: u64, sort_usize: usize,
    sort_i8: i8, sort_i16: i16, sort_i32: i32, sort_i64: i64, sort_isize: isize
}

macro_rules! signed_tests { ($($name:ident: $t:ty),*) => ($(
    mod $name {
        use super::*;

        #[test]
        fn test_negative_values() {
            check::<$t>(&[-1, -2, -3, -4, -5], &[-5, -4, -3, -2, -1]);
            check::<$t>(&[-1, 0, 1, -2, 2, -3, 3], &[-3, -2, -1, 0, 1, 2, 3]);
            check::<$t>(&[-1, -2, 3, 0], &[-2, -1, 0, 3]);
        }
    }
)*) }

signed_tests! {
    signed_i8: i8, signed_i16: i16, signed_i32: i32, signed_i64: i64, signed_isize: isize
}

macro_rules! float_tests { ($($name:ident: $t:ty),*) => ($(
    mod $name {
        use super::*;

        #[test]
        fn test_fixed_cases() {
            check::<$t>(&[], &[]);
            check::<$t>(&[1.5], &[1.5]);
            check::<$t>(&[1.0, 0.1, 3.0, 0.01], &[0.01, 0.1, 1.0, 3.0]);
            check::<$t>(&[100.0, 1.0, 123456789.0, 10.0], &[1.0, 10.0, 100.0, 123456789.0]);
            check::<$t>(&[-1.0, -2.0, -3.0, -4.0, -5.0], &[-5.0, -4.0, -3.0, -2.0, -1.0]);
            check::<$t>(
                &[-1.0, 0.0, 1.2, 123456789.0, -2.0, 2.0, -3.5, 3.0],
                &[-3.5, -2.0, -1.0, 0.0, 1.2, 2.0, 3.0, 123456789.0],
            );
        }

        #[test]
        fn test_infinity() {
            let (inf, neg_inf) = (<$t>::INFINITY, <$t>::NEG_INFINITY);
            check::<$t>(&[2.0, inf, 1.0, neg_inf], &[neg_inf, 1.0, 2.0, inf]);
        }

        #[test]
        fn test_nan_keeps_elements() {
            let nan = <$t>::NAN;
            let input = [12345.0, nan, 100.0, nan, -5.5, nan, nan];

            for algorithm in Algorithm::ALL {
                let mut data = input.to_vec();
                algorithm.sort(&mut data);

                let mut ordered: Vec<$t> = data.iter().copied().filter(|x| !x.is_nan()).collect();
                ordered.sort_by(|a, b| a.partial_cmp(b).unwrap());
                assert_eq!(ordered, vec![-5.5, 100.0, 12345.0], "{algorithm}");
                assert_eq!(data.iter().filter(|x| x.is_nan()).count(), 4, "{algorithm}");
            }
        }

        #[test]
        fn test_radix_places_nan_first() {
            let nan = <$t>::NAN;
            let mut data = vec![12345.0, nan, 100.0, nan, -5.5, nan, nan];
            radix_sort(&mut data);

            assert!(data[..4].iter().all(|x| x.is_nan()));
            assert_eq!(data[4..], [-5.5, 100.0, 12345.0]);
        }

        #[test]
        fn test_random_matches_std_sort() {
            let mut rng = StdRng::seed_from_u64(0xF10A7);
            let input: Vec<$t> = (0..1000).map(|_| rng.random_range(-1.0e6..1.0e6)).collect();

            let mut expected = input.clone();
            expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

            check(&input, &expected);
        }
    }
)*) }

float_tests! { sort_f32: f32, sort_f64: f64 }

#[test]
fn test_strings() {
    let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<String>>();

    check(&owned(&["banana", "apple", "cherry"]), &owned(&["apple", "banana", "cherry"]));
    check(&owned(&["b", "", "a"]), &owned(&["", "a", "b"]));
    check(&owned(&["aab", "aaa", "aac"]), &owned(&["aaa", "aab", "aac"]));
    check(
        &owned(&["c", "aaa", "bcdefghijklmnopqrstuvwxyz"]),
        &owned(&["aaa", "bcdefghijklmnopqrstuvwxyz", "c"]),
    );
}

#[test]
fn test_str_slices() {
    check(&["banana", "apple", "cherry"], &["apple", "banana", "cherry"]);
    check::<&str>(&[], &[]);
}

#[test]
fn test_random_strings_match_std_sort() {
    let mut rng = StdRng::seed_from_u64(42);
    let input: Vec<String> = (0..1000)
        .map(|_| {
            let len = rng.random_range(0..100);
            (0..len).map(|_| rng.random::<char>()).collect()
        })
        .collect();

    let mut expected = input.clone();
    expected.sort();

    check(&input, &expected);
}

#[test]
fn test_insert_sorted() {
    assert_eq!(insert_sorted(vec![], 5), vec![5]);
    assert_eq!(insert_sorted(vec![2, 3, 4, 5], 1), vec![1, 2, 3, 4, 5]);
    assert_eq!(insert_sorted(vec![1, 2, 3, 4], 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(insert_sorted(vec![1, 2, 4, 5], 3), vec![1, 2, 3, 4, 5]);
    assert_eq!(insert_sorted(vec![1, 2, 3, 3, 5], 3), vec![1, 2, 3, 3, 3, 5]);

    assert_eq!(insert_sorted(vec!["b", "c", "d"], "a"), vec!["a", "b", "c", "d"]);
    assert_eq!(insert_sorted(vec!["a", "b", "d", "e"], "c"), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_merge_sorted_sets() {
    let empty: [i32; 0] = [];
    assert_eq!(merge_sorted_sets(&empty, &empty), Vec::<i32>::new());
    assert_eq!(merge_sorted_sets(&empty, &[1, 2, 3]), vec![1, 2, 3]);
    assert_eq!(merge_sorted_sets(&[1, 2, 3], &empty), vec![1, 2, 3]);
    assert_eq!(merge_sorted_sets(&[1, 2, 3], &[4, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(merge_sorted_sets(&[1, 3, 5], &[2, 4, 6]), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(
        merge_sorted_sets(&[1, 2, 3, 7, 9], &[2, 4, 6, 8]),
        vec![1, 2, 2, 3, 4, 6, 7, 8, 9]
    );
    assert_eq!(merge_sorted_sets(&[1, 3, 3, 5], &[2, 3, 4]), vec![1, 2, 3, 3, 3, 4, 5]);
    assert_eq!(merge_sorted_sets(&[1, 3, 5, 7, 9], &[2, 4]), vec![1, 2, 3, 4, 5, 7, 9]);

    assert_eq!(
        merge_sorted_sets(&["a", "c", "e"], &["b", "d", "f"]),
        vec!["a", "b", "c", "d", "e", "f"]
    );
    assert_eq!(
        merge_sorted_sets(&["a", "c", "c"], &["b", "c", "d"]),
        vec!["a", "b", "c", "c", "c", "d"]
    );
}

#[test]
fn test_insert_sorted_leaves_original_order_for_unsorted_input() {
    // Unsorted targets are the caller's problem; the value only moves past larger neighbours.
    assert_eq!(insert_sorted(vec![5, 1, 9], 7), vec![5, 1, 7, 9]);
}
