//! Core traits and types for lazy tensor expressions
//!
//! This crate provides the foundation the reduction engine builds on:
//!
//! 1. **Numeric types** - scalar element types and their identities
//! 2. **Batches** - fixed-width per-lane arithmetic with compile-time selection
//! 3. **Shapes** - const generic shapes checked by the type system
//! 4. **Expressions** - the `TensorExpr` capability contract, concrete storage
//!    and elementwise composite nodes
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Abstractions**: expression trees are resolved at compile time
//! - **Static Shapes**: operand shape agreement is a type equality
//! - **No Hidden Allocations**: only materialization allocates
//!
//! # Example
//!
//! ```rust
//! use tensor_core::{ExprExt, Shape2, Tensor, TensorExpr};
//!
//! let a = Tensor::<f64, Shape2<2, 2>>::from_vec(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let doubled = Tensor::from_expr(&(&a).plus(&a));
//! assert_eq!(doubled.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
//! assert_eq!(doubled.size(), 4);
//! ```

pub mod batch;
pub mod error;
pub mod expr;
pub mod numeric;
pub mod ops;
pub mod shape;
pub mod tensor;

// Re-export core types
pub use error::{Error, Result};

pub use batch::{fma_enabled, lane_width, Batch, Element, PortableBatch, SimdBatch};
pub use expr::{Materialized, TensorExpr};
pub use numeric::Numeric;
pub use ops::{AddExpr, ExprExt, MulExpr, ScaleExpr, SubExpr};
pub use shape::{Shape, Shape1, Shape2, Shape3, Shape4, SquareShape};
pub use tensor::{Tensor, TensorView};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
