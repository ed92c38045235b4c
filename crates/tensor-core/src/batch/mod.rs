//! Fixed-width batch arithmetic with compile-time type dispatch
//!
//! A batch is a value holding `LANES` scalars that is operated on as a unit.
//! Reductions accumulate into batches during their bulk phase and collapse
//! them with a horizontal operation at the end.
//!
//! # Architecture
//!
//! - Single [`SimdBatch`] trait for per-lane arithmetic and horizontal reductions
//! - Concrete batch types: `wide::f64x4` and `wide::f32x8` (feature `simd`),
//!   [`PortableBatch`] everywhere else
//! - [`Element`] maps each scalar type to its batch type at compile time
//! - Zero-cost abstractions - no heap allocation or dynamic dispatch
//!
//! # Usage
//!
//! ```rust
//! use tensor_core::batch::{Batch, SimdBatch};
//!
//! let ones = <Batch<f64> as SimdBatch>::splat(1.0);
//! let twos = ones + ones;
//! assert_eq!(twos.horizontal_sum(), 2.0 * <Batch<f64> as SimdBatch>::LANES as f64);
//! ```

mod portable;
#[cfg(feature = "simd")]
mod simd;

pub use portable::PortableBatch;

use crate::numeric::Numeric;
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Per-lane arithmetic over a fixed number of scalars
///
/// Implementations must be lane-independent: lane `k` of `a + b` depends only
/// on lane `k` of `a` and `b`.
pub trait SimdBatch:
    Copy
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// Scalar type held in each lane
    type Scalar: Numeric;

    /// Number of lanes
    const LANES: usize;

    /// Broadcast one scalar into every lane
    fn splat(value: Self::Scalar) -> Self;

    /// Load the first `LANES` values of a slice
    ///
    /// # Panics
    /// Panics if `values` holds fewer than `LANES` elements
    fn from_slice(values: &[Self::Scalar]) -> Self;

    /// Build a batch lane by lane
    fn from_fn<F: FnMut(usize) -> Self::Scalar>(f: F) -> Self;

    /// Store all lanes into the first `LANES` slots of `out`
    ///
    /// # Panics
    /// Panics if `out` holds fewer than `LANES` elements
    fn write_to_slice(self, out: &mut [Self::Scalar]);

    /// Read a single lane
    fn lane(self, index: usize) -> Self::Scalar;

    /// Compute `self * m + a` per lane
    ///
    /// Uses a fused multiply-add when the target supports one; otherwise an
    /// explicit multiply followed by an add.
    fn mul_add(self, m: Self, a: Self) -> Self {
        self * m + a
    }

    /// Sum of all lanes
    fn horizontal_sum(self) -> Self::Scalar;

    /// Product of all lanes
    fn horizontal_product(self) -> Self::Scalar;
}

/// Scalar types that can appear in a tensor expression
///
/// Binds every scalar type to the batch type used for its bulk evaluation.
pub trait Element: Numeric {
    /// The batch type to use for this scalar type
    type Batch: SimdBatch<Scalar = Self>;

    /// Name of the batch implementation for diagnostics
    fn batch_backend_name() -> &'static str;
}

/// Shorthand for the batch type of a scalar
pub type Batch<T> = <T as Element>::Batch;

// f64 and f32 use `wide` when the simd feature is on
#[cfg(feature = "simd")]
impl Element for f64 {
    type Batch = wide::f64x4;

    fn batch_backend_name() -> &'static str {
        "wide"
    }
}

#[cfg(not(feature = "simd"))]
impl Element for f64 {
    type Batch = PortableBatch<f64, 4>;

    fn batch_backend_name() -> &'static str {
        "portable"
    }
}

#[cfg(feature = "simd")]
impl Element for f32 {
    type Batch = wide::f32x8;

    fn batch_backend_name() -> &'static str {
        "wide"
    }
}

#[cfg(not(feature = "simd"))]
impl Element for f32 {
    type Batch = PortableBatch<f32, 8>;

    fn batch_backend_name() -> &'static str {
        "portable"
    }
}

// Integer types use portable lanes sized to a 256-bit register
macro_rules! impl_portable_element {
    ($type:ty, $lanes:expr) => {
        impl Element for $type {
            type Batch = PortableBatch<$type, $lanes>;

            fn batch_backend_name() -> &'static str {
                "portable"
            }
        }
    };
}

impl_portable_element!(i32, 8);
impl_portable_element!(u32, 8);
impl_portable_element!(i64, 4);
impl_portable_element!(u64, 4);

/// Lane width used for scalar type `T`
pub fn lane_width<T: Element>() -> usize {
    <Batch<T> as SimdBatch>::LANES
}

/// Whether batch `mul_add` compiles to a fused multiply-add on this target
pub fn fma_enabled() -> bool {
    cfg!(all(feature = "simd", target_feature = "fma"))
}
