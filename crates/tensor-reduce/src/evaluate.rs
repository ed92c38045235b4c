//! Forced evaluation of lazy expressions

use tensor_core::{Materialized, Shape, Tensor, TensorExpr};

/// Materialize an expression into its concrete storage type
///
/// The storage type is determined by the expression's scalar and shape
/// types. This is the only engine operation that allocates.
///
/// # Panics
/// Panics if `expr.size()` disagrees with the element count of its shape.
pub fn evaluate<E: TensorExpr>(expr: &E) -> Materialized<E> {
    log::trace!(
        "materializing {} elements with shape {:?}",
        expr.size(),
        <E::Shape as Shape>::DIMS
    );
    Tensor::from_expr(expr)
}
