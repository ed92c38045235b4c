//! Hardware batches backed by the `wide` crate
//!
//! `wide` selects SSE/AVX/NEON instructions at compile time and falls back to
//! scalar lanes otherwise, so these impls carry no `unsafe` and no runtime
//! feature detection.

use super::SimdBatch;
use wide::{f32x8, f64x4};

macro_rules! impl_wide_batch {
    ($batch:ty, $scalar:ty, $lanes:expr) => {
        impl SimdBatch for $batch {
            type Scalar = $scalar;
            const LANES: usize = $lanes;

            #[inline]
            fn splat(value: $scalar) -> Self {
                <$batch>::splat(value)
            }

            #[inline]
            fn from_slice(values: &[$scalar]) -> Self {
                let mut lanes = [0.0 as $scalar; $lanes];
                lanes.copy_from_slice(&values[..$lanes]);
                <$batch>::from(lanes)
            }

            #[inline]
            fn from_fn<F: FnMut(usize) -> $scalar>(f: F) -> Self {
                <$batch>::from(std::array::from_fn::<$scalar, $lanes, F>(f))
            }

            #[inline]
            fn write_to_slice(self, out: &mut [$scalar]) {
                out[..$lanes].copy_from_slice(&self.to_array());
            }

            #[inline]
            fn lane(self, index: usize) -> $scalar {
                self.to_array()[index]
            }

            #[inline]
            fn mul_add(self, m: Self, a: Self) -> Self {
                // Fused on targets with FMA, multiply-then-add elsewhere
                <$batch>::mul_add(self, m, a)
            }

            #[inline]
            fn horizontal_sum(self) -> $scalar {
                self.to_array().iter().sum()
            }

            #[inline]
            fn horizontal_product(self) -> $scalar {
                self.to_array().iter().product()
            }
        }
    };
}

impl_wide_batch!(f64x4, f64, 4);
impl_wide_batch!(f32x8, f32, 8);
