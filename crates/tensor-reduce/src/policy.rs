//! Reduction policies
//!
//! A policy names the algebra of a reduction: its identity element, how two
//! partial results combine, and how a batch accumulator collapses to a
//! scalar. Both accumulators of the two-phase loop are seeded from
//! [`ReductionPolicy::identity`], so a multiplicative reduction starts at one
//! and an additive one at zero.

use tensor_core::{Batch, Element, SimdBatch};

/// Identity, combine and horizontal-combine for one reduction
pub trait ReductionPolicy<T: Element>: Copy {
    /// Name of this policy for debugging/logging
    fn name(&self) -> &'static str;

    /// Identity element of `combine`
    fn identity(&self) -> T;

    /// Combine two scalar partial results
    fn combine(&self, acc: T, value: T) -> T;

    /// Combine two batch partial results lane by lane
    fn combine_batch(&self, acc: Batch<T>, value: Batch<T>) -> Batch<T>;

    /// Collapse a batch accumulator into a scalar
    fn horizontal(&self, acc: Batch<T>) -> T;
}

/// Summation: identity 0, combine `+`
#[derive(Clone, Copy, Debug, Default)]
pub struct Additive;

/// Multiplication: identity 1, combine `*`
#[derive(Clone, Copy, Debug, Default)]
pub struct Multiplicative;

impl<T: Element> ReductionPolicy<T> for Additive {
    fn name(&self) -> &'static str {
        "additive"
    }

    #[inline]
    fn identity(&self) -> T {
        T::zero()
    }

    #[inline]
    fn combine(&self, acc: T, value: T) -> T {
        acc + value
    }

    #[inline]
    fn combine_batch(&self, acc: Batch<T>, value: Batch<T>) -> Batch<T> {
        acc + value
    }

    #[inline]
    fn horizontal(&self, acc: Batch<T>) -> T {
        acc.horizontal_sum()
    }
}

impl<T: Element> ReductionPolicy<T> for Multiplicative {
    fn name(&self) -> &'static str {
        "multiplicative"
    }

    #[inline]
    fn identity(&self) -> T {
        T::one()
    }

    #[inline]
    fn combine(&self, acc: T, value: T) -> T {
        acc * value
    }

    #[inline]
    fn combine_batch(&self, acc: Batch<T>, value: Batch<T>) -> Batch<T> {
        acc * value
    }

    #[inline]
    fn horizontal(&self, acc: Batch<T>) -> T {
        acc.horizontal_product()
    }
}
