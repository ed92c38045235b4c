//! Scalar reductions over tensor expressions
//!
//! All vectorized reductions run through [`chunked_reduce`]; results combine
//! lane-parallel partial sums before the remainder, so floating-point results
//! may differ in the last bits from a strict left-to-right fold.

use crate::chunked::chunked_reduce;
use crate::policy::{Additive, Multiplicative, ReductionPolicy};
use num_traits::Float;
use tensor_core::{Error, Result, SimdBatch, SquareShape, TensorExpr};

/// Sum of all elements
///
/// Returns zero for an empty expression.
pub fn sum<E: TensorExpr>(expr: &E) -> E::Scalar {
    reduce_with(Additive, expr)
}

/// Product of all elements
///
/// Both accumulators start at one, so an empty expression yields one.
pub fn product<E: TensorExpr>(expr: &E) -> E::Scalar {
    reduce_with(Multiplicative, expr)
}

// The policy is generic over every element type, so it is pinned to the
// expression's scalar here; a batch argument alone does not determine it.
fn reduce_with<E, P>(policy: P, expr: &E) -> E::Scalar
where
    E: TensorExpr,
    P: ReductionPolicy<E::Scalar>,
{
    chunked_reduce(
        policy,
        expr.size(),
        |acc, i| policy.combine_batch(acc, expr.eval_batch(i)),
        |acc, i| policy.combine(acc, expr.eval_scalar(i)),
    )
}

/// Euclidean (L2) norm: `sqrt(sum x^2)`
///
/// Squares are accumulated with a multiply-add, fused where the target
/// supports it.
pub fn norm<E>(expr: &E) -> E::Scalar
where
    E: TensorExpr,
    E::Scalar: Float,
{
    let squares: E::Scalar = chunked_reduce(
        Additive,
        expr.size(),
        |acc, i| {
            let v = expr.eval_batch(i);
            v.mul_add(v, acc)
        },
        |acc, i| {
            let v = expr.eval_scalar(i);
            v * v + acc
        },
    );
    squares.sqrt()
}

/// Inner (dot) product of two expressions with the same scalar type
///
/// # Panics
/// Panics if the operands have different element counts. Use
/// [`checked_inner`] to get an error instead.
pub fn inner<A, B>(a: &A, b: &B) -> A::Scalar
where
    A: TensorExpr,
    B: TensorExpr<Scalar = A::Scalar>,
{
    if a.size() != b.size() {
        log::error!(
            "inner product of mismatched expressions: {} vs {} elements",
            a.size(),
            b.size()
        );
        panic!(
            "expression size mismatch: left has {} elements, right has {}",
            a.size(),
            b.size()
        );
    }
    inner_unchecked(a, b)
}

/// Inner product that reports a size mismatch as an error
pub fn checked_inner<A, B>(a: &A, b: &B) -> Result<A::Scalar>
where
    A: TensorExpr,
    B: TensorExpr<Scalar = A::Scalar>,
{
    if a.size() != b.size() {
        return Err(Error::size_mismatch(a.size(), b.size(), "inner"));
    }
    Ok(inner_unchecked(a, b))
}

fn inner_unchecked<A, B>(a: &A, b: &B) -> A::Scalar
where
    A: TensorExpr,
    B: TensorExpr<Scalar = A::Scalar>,
{
    chunked_reduce(
        Additive,
        a.size(),
        |acc, i| a.eval_batch(i).mul_add(b.eval_batch(i), acc),
        |acc, i| a.eval_scalar(i) * b.eval_scalar(i) + acc,
    )
}

/// Sum of the diagonal of a square matrix expression
///
/// Only expressions whose shape is `Shape2<N, N>` are accepted; anything else
/// is rejected at compile time:
///
/// ```compile_fail
/// use tensor_core::{Shape2, Tensor};
///
/// let m = Tensor::<f64, Shape2<2, 3>>::zeros();
/// let _ = tensor_reduce::trace(&m);
/// ```
///
/// Diagonal elements are `N + 1` apart in row-major order, so this is a
/// scalar loop rather than a batched one.
pub fn trace<E>(expr: &E) -> E::Scalar
where
    E: TensorExpr,
    E::Shape: SquareShape,
{
    let n = <E::Shape as SquareShape>::EXTENT;
    let policy = Additive;
    let zero: E::Scalar = policy.identity();
    (0..n).fold(zero, |acc, i| {
        policy.combine(acc, expr.eval_scalar(i * (n + 1)))
    })
}
