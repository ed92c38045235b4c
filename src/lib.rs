//! Vectorized scalar reductions over lazy tensor expressions
//!
//! This facade re-exports the workspace crates:
//!
//! - [`tensor_core`] - numeric types, batches, shapes, the `TensorExpr`
//!   contract, storage and composite expressions
//! - [`tensor_reduce`] - `evaluate`, `sum`, `product`, `norm`, `inner` and
//!   `trace`
//!
//! # Example
//!
//! ```rust
//! use tensor_kernels::prelude::*;
//!
//! let m = Tensor::<f64, Shape2<2, 2>>::from_vec(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let lazy = (&m).plus(&m);
//!
//! assert_eq!(sum(&lazy), 20.0);
//! assert_eq!(trace(&lazy), 10.0);
//! assert_eq!(evaluate(&lazy).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
//! ```

pub use tensor_core;
pub use tensor_reduce;

pub use tensor_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use tensor_core::{
        fma_enabled, lane_width, Element, Error, ExprExt, Result, Shape, Shape1, Shape2, Shape3,
        Shape4, SimdBatch, SquareShape, Tensor, TensorExpr, TensorView,
    };
    pub use tensor_reduce::{checked_inner, evaluate, inner, norm, product, sum, trace};
}
