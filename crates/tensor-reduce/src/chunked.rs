//! The two-phase chunked reduction loop
//!
//! Every vectorized reduction walks the flattened index range the same way:
//! a bulk phase over whole batches followed by a scalar phase over the
//! remainder. The two phases use separate accumulators that are merged with
//! the policy at the end.

use crate::policy::ReductionPolicy;
use tensor_core::{lane_width, Batch, Element, SimdBatch};

/// Largest multiple of `width` that is `<= len`
#[inline]
pub const fn round_down(len: usize, width: usize) -> usize {
    len - len % width
}

/// Reduce `size` elements in two phases
///
/// - `batch_step(acc, i)` folds the batch starting at `i` into the batch
///   accumulator; it is called for `i = 0, W, 2W, ...` while `i + W <= size`.
/// - `scalar_step(acc, i)` folds element `i` into the scalar accumulator for
///   every remaining index.
///
/// Both accumulators start at `policy.identity()`; the result is
/// `policy.combine(policy.horizontal(batch_acc), scalar_acc)`. Each index in
/// `0..size` is visited exactly once.
#[inline]
pub fn chunked_reduce<T, P, FB, FS>(
    policy: P,
    size: usize,
    mut batch_step: FB,
    mut scalar_step: FS,
) -> T
where
    T: Element,
    P: ReductionPolicy<T>,
    FB: FnMut(Batch<T>, usize) -> Batch<T>,
    FS: FnMut(T, usize) -> T,
{
    let lanes = lane_width::<T>();
    let bulk = round_down(size, lanes);

    let mut vector = <Batch<T> as SimdBatch>::splat(policy.identity());
    let mut index = 0;
    while index < bulk {
        vector = batch_step(vector, index);
        index += lanes;
    }

    let mut scalar = policy.identity();
    while index < size {
        scalar = scalar_step(scalar, index);
        index += 1;
    }

    policy.combine(policy.horizontal(vector), scalar)
}
