//! Vectorized reductions over lazy tensor expressions
//!
//! Every operation takes expressions satisfying
//! [`TensorExpr`](tensor_core::TensorExpr) and produces a scalar, except
//! [`evaluate`] which produces concrete storage.
//!
//! # Algorithm
//!
//! Reductions iterate the flattened index range in two phases:
//!
//! 1. **Bulk phase** - whole batches of `LANES` elements are folded into a
//!    batch accumulator
//! 2. **Remainder phase** - the trailing `size % LANES` elements are folded
//!    into a scalar accumulator
//!
//! The batch accumulator is then collapsed horizontally and merged with the
//! scalar one. Both accumulators start at the identity of the reduction's
//! [`ReductionPolicy`], so products start at one.
//!
//! # Example
//!
//! ```rust
//! use tensor_core::{Shape1, Tensor};
//! use tensor_reduce::{norm, product, sum};
//!
//! let v = Tensor::<f64, Shape1<4>>::from_vec(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(sum(&v), 10.0);
//! assert_eq!(product(&v), 24.0);
//! assert!((norm(&v) - 30.0f64.sqrt()).abs() < 1e-12);
//! ```

pub mod chunked;
pub mod evaluate;
pub mod policy;
pub mod reduce;

pub use chunked::{chunked_reduce, round_down};
pub use evaluate::evaluate;
pub use policy::{Additive, Multiplicative, ReductionPolicy};
pub use reduce::{checked_inner, inner, norm, product, sum, trace};
