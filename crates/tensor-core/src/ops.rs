//! Elementwise composite expressions
//!
//! Nodes hold their operands by value; pass references (`&tensor`) or views
//! to build trees without copying storage. Binary nodes require both operands
//! to have the same scalar type and the same shape type, so a shape mismatch
//! is a compile error rather than a runtime check.
//!
//! ```rust
//! use tensor_core::{ExprExt, Shape1, Tensor, TensorExpr};
//!
//! let a = Tensor::<f64, Shape1<3>>::from_vec(vec![1.0, 2.0, 3.0]).unwrap();
//! let b = Tensor::<f64, Shape1<3>>::from_vec(vec![4.0, 5.0, 6.0]).unwrap();
//! let expr = (&a).plus(&b).scale(2.0);
//! assert_eq!(expr.eval_scalar(2), 18.0);
//! ```

use crate::batch::{Batch, SimdBatch};
use crate::expr::TensorExpr;

macro_rules! binary_expr {
    ($(#[$doc:meta])* $name:ident, $op:tt) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<L, R> {
            lhs: L,
            rhs: R,
        }

        impl<L, R> $name<L, R> {
            pub fn new(lhs: L, rhs: R) -> Self {
                Self { lhs, rhs }
            }
        }

        impl<L, R> TensorExpr for $name<L, R>
        where
            L: TensorExpr,
            R: TensorExpr<Scalar = L::Scalar, Shape = L::Shape>,
        {
            type Scalar = L::Scalar;
            type Shape = L::Shape;

            #[inline]
            fn size(&self) -> usize {
                self.lhs.size()
            }

            #[inline]
            fn eval_batch(&self, index: usize) -> Batch<Self::Scalar> {
                self.lhs.eval_batch(index) $op self.rhs.eval_batch(index)
            }

            #[inline]
            fn eval_scalar(&self, index: usize) -> Self::Scalar {
                self.lhs.eval_scalar(index) $op self.rhs.eval_scalar(index)
            }
        }
    };
}

binary_expr!(
    /// Elementwise sum of two expressions
    AddExpr, +
);
binary_expr!(
    /// Elementwise difference of two expressions
    SubExpr, -
);
binary_expr!(
    /// Elementwise (Hadamard) product of two expressions
    MulExpr, *
);

/// Expression multiplied by a broadcast scalar
#[derive(Clone, Copy, Debug)]
pub struct ScaleExpr<E: TensorExpr> {
    expr: E,
    factor: E::Scalar,
}

impl<E: TensorExpr> ScaleExpr<E> {
    pub fn new(expr: E, factor: E::Scalar) -> Self {
        Self { expr, factor }
    }
}

impl<E: TensorExpr> TensorExpr for ScaleExpr<E> {
    type Scalar = E::Scalar;
    type Shape = E::Shape;

    #[inline]
    fn size(&self) -> usize {
        self.expr.size()
    }

    #[inline]
    fn eval_batch(&self, index: usize) -> Batch<Self::Scalar> {
        self.expr.eval_batch(index) * <Batch<Self::Scalar> as SimdBatch>::splat(self.factor)
    }

    #[inline]
    fn eval_scalar(&self, index: usize) -> Self::Scalar {
        self.expr.eval_scalar(index) * self.factor
    }
}

/// Builder methods for composing expressions
pub trait ExprExt: TensorExpr + Sized {
    /// Elementwise `self + rhs`
    fn plus<R>(self, rhs: R) -> AddExpr<Self, R>
    where
        R: TensorExpr<Scalar = Self::Scalar, Shape = Self::Shape>,
    {
        AddExpr::new(self, rhs)
    }

    /// Elementwise `self - rhs`
    fn minus<R>(self, rhs: R) -> SubExpr<Self, R>
    where
        R: TensorExpr<Scalar = Self::Scalar, Shape = Self::Shape>,
    {
        SubExpr::new(self, rhs)
    }

    /// Elementwise `self * rhs`
    fn times<R>(self, rhs: R) -> MulExpr<Self, R>
    where
        R: TensorExpr<Scalar = Self::Scalar, Shape = Self::Shape>,
    {
        MulExpr::new(self, rhs)
    }

    /// `self * factor` for every element
    fn scale(self, factor: Self::Scalar) -> ScaleExpr<Self> {
        ScaleExpr::new(self, factor)
    }
}

impl<E: TensorExpr> ExprExt for E {}
