//! The capability contract every tensor-like expression satisfies
//!
//! An expression is anything that can report its element count and produce
//! elements at flattened row-major indices, either one at a time or one batch
//! at a time. Reductions and materialization consume this trait generically,
//! so composite expression trees are monomorphized and inlined end to end.

use crate::batch::{Batch, Element};
use crate::shape::Shape;
use crate::tensor::Tensor;

/// A lazily evaluated tensor
///
/// # Contract
///
/// - `size()` is pure: repeated calls return the same value.
/// - `size()` equals `Self::Shape::SIZE`. Overriding it with any other count is
///   a contract violation; materialization rejects such expressions.
/// - `eval_batch(i)` is only called with `i + LANES <= size()` and must equal
///   the `LANES` consecutive values `eval_scalar(i)`, ..., `eval_scalar(i + LANES - 1)`.
///   Reductions silently produce wrong results if this does not hold.
/// - `eval_scalar(i)` is valid for every `i < size()`.
pub trait TensorExpr {
    /// Element type
    type Scalar: Element;

    /// Static shape of the expression
    type Shape: Shape;

    /// Total number of scalar elements
    fn size(&self) -> usize {
        <Self::Shape as Shape>::SIZE
    }

    /// Evaluate `LANES` consecutive elements starting at flattened `index`
    fn eval_batch(&self, index: usize) -> Batch<Self::Scalar>;

    /// Evaluate the element at flattened `index`
    fn eval_scalar(&self, index: usize) -> Self::Scalar;
}

impl<E: TensorExpr + ?Sized> TensorExpr for &E {
    type Scalar = E::Scalar;
    type Shape = E::Shape;

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline]
    fn eval_batch(&self, index: usize) -> Batch<Self::Scalar> {
        (**self).eval_batch(index)
    }

    #[inline]
    fn eval_scalar(&self, index: usize) -> Self::Scalar {
        (**self).eval_scalar(index)
    }
}

/// Concrete storage type an expression materializes into
pub type Materialized<E> = Tensor<<E as TensorExpr>::Scalar, <E as TensorExpr>::Shape>;
