//! Compile-time tensor shapes
//!
//! Shapes are zero-sized marker types whose extents are const generic
//! parameters. Every expression names its shape as an associated type, so
//! shape agreement between operands is checked by the compiler and rank or
//! extent constraints (such as squareness for a trace) are trait bounds.
//!
//! Flattening is row-major: the last dimension varies fastest.

use std::fmt::Debug;

/// A static tensor shape
pub trait Shape: Copy + Default + Debug + Send + Sync + 'static {
    /// Number of dimensions
    const RANK: usize;

    /// Total number of elements (product of the extents)
    const SIZE: usize;

    /// Extent of every dimension, outermost first
    const DIMS: &'static [usize];

    /// Flatten a multi-index into a row-major offset
    ///
    /// Returns `None` when the index has the wrong rank or any component is
    /// outside its extent.
    fn flatten(index: &[usize]) -> Option<usize> {
        if index.len() != Self::RANK {
            return None;
        }
        let mut offset = 0;
        for (&i, &extent) in index.iter().zip(Self::DIMS.iter()) {
            if i >= extent {
                return None;
            }
            offset = offset * extent + i;
        }
        Some(offset)
    }

    /// Expand a row-major offset back into a multi-index
    fn unflatten(mut offset: usize) -> Vec<usize> {
        let mut index = vec![0; Self::RANK];
        for (slot, &extent) in index.iter_mut().zip(Self::DIMS.iter()).rev() {
            *slot = offset % extent;
            offset /= extent;
        }
        index
    }
}

/// Shapes that are two-dimensional with equal extents
///
/// Only `Shape2<N, N>` implements this trait, so asking for a trace of any
/// other shape is a type error.
pub trait SquareShape: Shape {
    /// The common extent of both dimensions
    const EXTENT: usize;
}

/// Rank-1 shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shape1<const N: usize>;

/// Rank-2 shape (rows, columns)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shape2<const M: usize, const N: usize>;

/// Rank-3 shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shape3<const A: usize, const B: usize, const C: usize>;

/// Rank-4 shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shape4<const A: usize, const B: usize, const C: usize, const D: usize>;

impl<const N: usize> Shape for Shape1<N> {
    const RANK: usize = 1;
    const SIZE: usize = N;
    const DIMS: &'static [usize] = &[N];
}

impl<const M: usize, const N: usize> Shape for Shape2<M, N> {
    const RANK: usize = 2;
    const SIZE: usize = M * N;
    const DIMS: &'static [usize] = &[M, N];
}

impl<const A: usize, const B: usize, const C: usize> Shape for Shape3<A, B, C> {
    const RANK: usize = 3;
    const SIZE: usize = A * B * C;
    const DIMS: &'static [usize] = &[A, B, C];
}

impl<const A: usize, const B: usize, const C: usize, const D: usize> Shape
    for Shape4<A, B, C, D>
{
    const RANK: usize = 4;
    const SIZE: usize = A * B * C * D;
    const DIMS: &'static [usize] = &[A, B, C, D];
}

impl<const N: usize> SquareShape for Shape2<N, N> {
    const EXTENT: usize = N;
}
