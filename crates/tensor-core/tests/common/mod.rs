//! Shared utilities for integration tests

#![allow(dead_code, unused_imports)]

use tensor_core::{lane_width, SimdBatch, TensorExpr};

/// Generate test data with specific patterns
pub fn generate_test_data(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 + 0.1).collect()
}

/// Generate complementary test data for binary operations
pub fn generate_test_data_complement(len: usize) -> Vec<f64> {
    (0..len).map(|i| (len - i) as f64 + 0.2).collect()
}

/// Assert that every full batch equals the matching run of scalar evaluations
pub fn assert_batch_sound<E: TensorExpr>(expr: &E, context: &str) {
    let lanes = lane_width::<E::Scalar>();
    let mut i = 0;
    while i + lanes <= expr.size() {
        let batch = expr.eval_batch(i);
        for k in 0..lanes {
            assert_eq!(
                batch.lane(k),
                expr.eval_scalar(i + k),
                "{context}: lane {k} of batch at {i}"
            );
        }
        i += lanes;
    }
}
