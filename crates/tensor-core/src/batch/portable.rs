//! Portable batch implementation
//!
//! This batch stores its lanes in a plain array and works for all numeric
//! types without using any SIMD intrinsics. The compiler is free to
//! auto-vectorize the lane loops.

use super::SimdBatch;
use crate::numeric::Numeric;
use std::ops::{Add, Mul, Sub};

/// Array-backed batch of `W` lanes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortableBatch<T, const W: usize>(pub [T; W]);

impl<T: Numeric, const W: usize> PortableBatch<T, W> {
    #[inline]
    fn zip_with(self, rhs: Self, op: impl Fn(T, T) -> T) -> Self {
        let mut lanes = self.0;
        for (lane, &r) in lanes.iter_mut().zip(rhs.0.iter()) {
            *lane = op(*lane, r);
        }
        Self(lanes)
    }
}

impl<T: Numeric, const W: usize> Add for PortableBatch<T, W> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Numeric, const W: usize> Sub for PortableBatch<T, W> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Numeric, const W: usize> Mul for PortableBatch<T, W> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl<T: Numeric, const W: usize> SimdBatch for PortableBatch<T, W> {
    type Scalar = T;
    const LANES: usize = W;

    #[inline]
    fn splat(value: T) -> Self {
        Self([value; W])
    }

    #[inline]
    fn from_slice(values: &[T]) -> Self {
        let mut lanes = [T::zero(); W];
        lanes.copy_from_slice(&values[..W]);
        Self(lanes)
    }

    #[inline]
    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self(std::array::from_fn(f))
    }

    #[inline]
    fn write_to_slice(self, out: &mut [T]) {
        out[..W].copy_from_slice(&self.0);
    }

    #[inline]
    fn lane(self, index: usize) -> T {
        self.0[index]
    }

    #[inline]
    fn horizontal_sum(self) -> T {
        self.0.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    #[inline]
    fn horizontal_product(self) -> T {
        self.0.iter().fold(T::one(), |acc, &x| acc * x)
    }
}
