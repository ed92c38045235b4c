//! Generic numeric trait hierarchy for tensor element types
//!
//! This module provides the type foundation for expressions over different
//! scalar types (f64, f32, i32, ...) without imposing any computational
//! infrastructure.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: Defines what an element type must support
//! - **No computational layer**: All vectorized computation happens through
//!   the batch types in [`crate::batch`]
//! - **Type safety**: Can't accidentally mix numeric types between operands

use bytemuck::Pod;
use num_traits::Num;
use std::fmt::Debug;

/// Base trait for numeric types that can be stored in a tensor
///
/// `zero()` and `one()` come from [`num_traits::Num`]; they are the additive
/// and multiplicative identities used to seed reductions.
pub trait Numeric: Pod + Num + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Convert from f64 (for creating constants)
    fn from_f64(val: f64) -> Self;

    /// Convert to f64 (for diagnostics and tolerance checks)
    fn as_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($type:ty),*) => {
        $(
            impl Numeric for $type {
                fn from_f64(val: f64) -> Self {
                    val as $type
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(f64, f32, i32, u32, i64, u64);
