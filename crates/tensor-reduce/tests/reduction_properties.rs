//! Reductions agree with their sequential definitions
//!
//! Lengths straddle the lane widths (4 for f64/i64, 8 for f32/i32) so the
//! bulk phase, the remainder phase and their combination are all covered.

mod common;

use common::{
    close, generate_alternating_data, generate_test_data, generate_test_data_complement,
    sequential_dot, sequential_sum,
};
use proptest::prelude::*;
use tensor_core::{Shape1, Shape2, Tensor, TensorExpr};
use tensor_reduce::{inner, norm, product, sum, trace};

const TOLERANCE: f64 = 1e-12;

fn check_f64_length<const N: usize>() {
    for data in [generate_test_data(N), generate_alternating_data(N)] {
        let a = Tensor::<f64, Shape1<N>>::from_vec(data.clone()).unwrap();
        let b = Tensor::<f64, Shape1<N>>::from_vec(generate_test_data_complement(N)).unwrap();

        let expected_sum = sequential_sum(&data);
        assert!(
            close(sum(&a), expected_sum, TOLERANCE),
            "sum at length {N}: {} vs {expected_sum}",
            sum(&a)
        );

        let expected_norm = data.iter().map(|x| x * x).sum::<f64>().sqrt();
        let actual_norm = norm(&a);
        assert!(actual_norm >= 0.0);
        assert!(close(actual_norm, expected_norm, TOLERANCE), "norm at length {N}");

        let expected_dot = sequential_dot(&data, b.as_slice());
        assert!(close(inner(&a, &b), expected_dot, TOLERANCE), "inner at length {N}");
        assert!(
            close(inner(&a, &a), actual_norm * actual_norm, 1e-10),
            "inner(a, a) vs norm^2 at length {N}"
        );
    }
}

fn check_f64_product_length<const N: usize>() {
    // Factors near one keep the product finite at every length
    let a = Tensor::<f64, Shape1<N>>::from_fn(|idx| 1.0 + (idx[0] % 5) as f64 * 0.01);
    let expected: f64 = a.as_slice().iter().fold(1.0, |acc, &x| acc * x);
    assert!(
        close(product(&a), expected, TOLERANCE),
        "product at length {N}: {} vs {expected}",
        product(&a)
    );
}

fn check_f32_length<const N: usize>() {
    // Small integers and powers of two, so every partial result is exact in f32
    let a = Tensor::<f32, Shape1<N>>::from_fn(|idx| (idx[0] % 7) as f32 - 3.0);
    let b = Tensor::<f32, Shape1<N>>::from_fn(|idx| [1.0, 2.0, 0.5][idx[0] % 3]);

    let expected_sum: f32 = a.as_slice().iter().sum();
    assert_eq!(sum(&a), expected_sum, "f32 sum at length {N}");

    let expected_product: f32 = b.as_slice().iter().product();
    assert_eq!(product(&b), expected_product, "f32 product at length {N}");

    let expected_dot: f32 = a.as_slice().iter().zip(b.as_slice()).map(|(x, y)| x * y).sum();
    assert_eq!(inner(&a, &b), expected_dot, "f32 inner at length {N}");

    let expected_norm = a
        .as_slice()
        .iter()
        .map(|&x| (x as f64) * (x as f64))
        .sum::<f64>()
        .sqrt();
    let actual_norm = norm(&a);
    assert!(actual_norm >= 0.0);
    assert!(
        close(actual_norm as f64, expected_norm, 1e-6),
        "f32 norm at length {N}: {actual_norm} vs {expected_norm}"
    );
}

fn check_integer_length<const N: usize>() {
    let a = Tensor::<i32, Shape1<N>>::from_fn(|idx| (idx[0] % 5) as i32 - 2);
    let expected_sum: i32 = a.as_slice().iter().sum();
    assert_eq!(sum(&a), expected_sum, "i32 sum at length {N}");

    let b = Tensor::<i64, Shape1<N>>::from_fn(|idx| if idx[0] % 3 == 0 { 2 } else { 1 });
    let expected_product: i64 = b.as_slice().iter().product();
    assert_eq!(product(&b), expected_product, "i64 product at length {N}");
}

#[test]
fn test_edge_case_lengths() {
    check_f64_length::<0>();
    check_f64_length::<1>();
    check_f64_length::<2>();
    check_f64_length::<3>();
    check_f64_length::<4>();
    check_f64_length::<5>();
    check_f64_length::<7>();
    check_f64_length::<8>();
    check_f64_length::<9>();
    check_f64_length::<15>();
    check_f64_length::<16>();
    check_f64_length::<17>();
    check_f64_length::<31>();
    check_f64_length::<32>();
    check_f64_length::<63>();
    check_f64_length::<64>();
    check_f64_length::<100>();
    check_f64_length::<127>();
    check_f64_length::<128>();
}

#[test]
fn test_f64_product_edge_case_lengths() {
    check_f64_product_length::<0>();
    check_f64_product_length::<1>();
    check_f64_product_length::<3>();
    check_f64_product_length::<4>();
    check_f64_product_length::<5>();
    check_f64_product_length::<7>();
    check_f64_product_length::<8>();
    check_f64_product_length::<9>();
    check_f64_product_length::<17>();
    check_f64_product_length::<64>();
    check_f64_product_length::<127>();
}

#[test]
fn test_f32_edge_case_lengths() {
    check_f32_length::<0>();
    check_f32_length::<1>();
    check_f32_length::<3>();
    check_f32_length::<4>();
    check_f32_length::<7>();
    check_f32_length::<8>();
    check_f32_length::<9>();
    check_f32_length::<15>();
    check_f32_length::<16>();
    check_f32_length::<17>();
    check_f32_length::<31>();
    check_f32_length::<32>();
    check_f32_length::<33>();
    check_f32_length::<100>();
}

#[test]
fn test_integer_edge_case_lengths() {
    check_integer_length::<0>();
    check_integer_length::<1>();
    check_integer_length::<7>();
    check_integer_length::<8>();
    check_integer_length::<9>();
    check_integer_length::<17>();
    check_integer_length::<33>();
}

fn check_trace<const M: usize>() {
    let m = Tensor::<f64, Shape2<M, M>>::from_fn(|idx| (idx[0] * 7 + idx[1] * 3) as f64 - 4.0);
    let expected = (0..M).map(|i| m.eval_scalar(i * (M + 1))).sum::<f64>();
    assert_eq!(trace(&m), expected, "trace of {M}x{M}");
}

#[test]
fn test_trace_matches_diagonal_stride() {
    check_trace::<0>();
    check_trace::<1>();
    check_trace::<2>();
    check_trace::<3>();
    check_trace::<5>();
    check_trace::<16>();
}

proptest! {
    #[test]
    fn prop_sum_matches_sequential(values in prop::collection::vec(-100.0f64..100.0, 37)) {
        let a = Tensor::<f64, Shape1<37>>::from_vec(values.clone()).unwrap();
        prop_assert!(close(sum(&a), sequential_sum(&values), 1e-10));
    }

    #[test]
    fn prop_norm_is_nonnegative_and_exact(values in prop::collection::vec(-100.0f64..100.0, 29)) {
        let a = Tensor::<f64, Shape1<29>>::from_vec(values.clone()).unwrap();
        let n = norm(&a);
        prop_assert!(n >= 0.0);
        let expected = values.iter().map(|x| x * x).sum::<f64>().sqrt();
        prop_assert!(close(n, expected, 1e-10));
    }

    #[test]
    fn prop_inner_matches_sequential(
        lhs in prop::collection::vec(-10.0f64..10.0, 21),
        rhs in prop::collection::vec(-10.0f64..10.0, 21),
    ) {
        let a = Tensor::<f64, Shape1<21>>::from_vec(lhs.clone()).unwrap();
        let b = Tensor::<f64, Shape1<21>>::from_vec(rhs.clone()).unwrap();
        prop_assert!(close(inner(&a, &b), sequential_dot(&lhs, &rhs), 1e-9));
        prop_assert!(close(inner(&a, &a), norm(&a).powi(2), 1e-9));
    }

    #[test]
    fn prop_f32_sum_within_reordering_tolerance(
        values in prop::collection::vec(-100.0f32..100.0, 45),
    ) {
        let a = Tensor::<f32, Shape1<45>>::from_vec(values.clone()).unwrap();
        let expected: f64 = values.iter().map(|&x| x as f64).sum();
        prop_assert!((sum(&a) as f64 - expected).abs() <= 5e-2);
    }

    #[test]
    fn prop_trace_matches_diagonal(values in prop::collection::vec(-50i64..50, 36)) {
        let m = Tensor::<i64, Shape2<6, 6>>::from_vec(values.clone()).unwrap();
        let expected: i64 = (0..6).map(|i| values[i * 7]).sum();
        prop_assert_eq!(trace(&m), expected);
    }
}
