//! Shared utilities for integration tests

#![allow(dead_code, unused_imports)]

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-10;

/// Generate test data with specific patterns
pub fn generate_test_data(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 + 0.1).collect()
}

/// Generate complementary test data for binary operations
pub fn generate_test_data_complement(len: usize) -> Vec<f64> {
    (0..len).map(|i| (len - i) as f64 + 0.2).collect()
}

/// Generate alternating-sign data so sums exercise cancellation
pub fn generate_alternating_data(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| if i % 2 == 0 { 1.5 * i as f64 } else { -(i as f64) })
        .collect()
}

/// Left-to-right sum, the reference the lane-parallel sum is compared to
pub fn sequential_sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, &x| acc + x)
}

/// Left-to-right dot product
pub fn sequential_dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).fold(0.0, |acc, (&x, &y)| acc + x * y)
}

/// Whether `actual` is within `tolerance` of `expected`, scaled by magnitude
pub fn close(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance * expected.abs().max(1.0)
}
