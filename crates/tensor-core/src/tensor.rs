//! Concrete tensor storage
//!
//! [`Tensor`] owns a row-major buffer whose length is fixed by its shape type;
//! [`TensorView`] borrows an existing slice under a shape. Both are leaf
//! expressions: their batched evaluation is a contiguous load.

use crate::batch::{lane_width, Batch, Element, SimdBatch};
use crate::error::{Error, Result};
use crate::expr::TensorExpr;
use crate::shape::Shape;
use std::marker::PhantomData;

/// Owned row-major tensor with a static shape
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T, S> {
    data: Vec<T>,
    shape: PhantomData<S>,
}

impl<T: Element, S: Shape> Tensor<T, S> {
    /// Tensor with every element set to zero
    pub fn zeros() -> Self {
        Self::filled(T::zero())
    }

    /// Tensor with every element set to `value`
    pub fn filled(value: T) -> Self {
        Self {
            data: vec![value; S::SIZE],
            shape: PhantomData,
        }
    }

    /// Wrap a row-major buffer
    ///
    /// Fails if the buffer length differs from the number of elements of `S`.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if data.len() != S::SIZE {
            log::debug!(
                "rejecting buffer of {} elements for shape {:?}",
                data.len(),
                S::DIMS
            );
            return Err(Error::size_mismatch(S::SIZE, data.len(), "Tensor::from_vec"));
        }
        Ok(Self {
            data,
            shape: PhantomData,
        })
    }

    /// Build a tensor from a function of the multi-index
    pub fn from_fn<F: FnMut(&[usize]) -> T>(mut f: F) -> Self {
        let data = (0..S::SIZE).map(|offset| f(&S::unflatten(offset))).collect();
        Self {
            data,
            shape: PhantomData,
        }
    }

    /// Materialize an expression of the same scalar type and shape
    ///
    /// Full batches are stored with one batched evaluation each; the tail that
    /// does not fill a batch is evaluated element by element.
    ///
    /// # Panics
    /// Panics if `expr.size()` differs from the element count of `S`. Use
    /// [`Tensor::try_from_expr`] to get an error instead.
    pub fn from_expr<E>(expr: &E) -> Self
    where
        E: TensorExpr<Scalar = T, Shape = S> + ?Sized,
    {
        if expr.size() != S::SIZE {
            log::error!(
                "cannot materialize expression of {} elements as shape {:?}",
                expr.size(),
                S::DIMS
            );
            panic!(
                "expression size mismatch: expression has {} elements, shape has {}",
                expr.size(),
                S::SIZE
            );
        }
        Self::materialize(expr)
    }

    /// Materialize an expression, reporting a size/shape disagreement as an error
    pub fn try_from_expr<E>(expr: &E) -> Result<Self>
    where
        E: TensorExpr<Scalar = T, Shape = S> + ?Sized,
    {
        if expr.size() != S::SIZE {
            return Err(Error::size_mismatch(
                S::SIZE,
                expr.size(),
                "Tensor::try_from_expr",
            ));
        }
        Ok(Self::materialize(expr))
    }

    fn materialize<E>(expr: &E) -> Self
    where
        E: TensorExpr<Scalar = T, Shape = S> + ?Sized,
    {
        let lanes = lane_width::<T>();
        let bulk = S::SIZE - S::SIZE % lanes;
        let mut data = vec![T::zero(); S::SIZE];

        for (chunk_index, chunk) in data[..bulk].chunks_exact_mut(lanes).enumerate() {
            expr.eval_batch(chunk_index * lanes).write_to_slice(chunk);
        }
        for (offset, slot) in data.iter_mut().enumerate().skip(bulk) {
            *slot = expr.eval_scalar(offset);
        }

        Self {
            data,
            shape: PhantomData,
        }
    }

    /// Extents of the tensor's shape
    pub fn dims(&self) -> &'static [usize] {
        S::DIMS
    }

    /// Row-major element buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major element buffer
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the tensor, returning its buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Element at a multi-index
    pub fn get(&self, index: &[usize]) -> Result<T> {
        let offset = checked_offset::<S>(index)?;
        Ok(self.data[offset])
    }

    /// Mutable element at a multi-index
    pub fn get_mut(&mut self, index: &[usize]) -> Result<&mut T> {
        let offset = checked_offset::<S>(index)?;
        Ok(&mut self.data[offset])
    }

    /// Borrow the tensor as a copyable view
    pub fn view(&self) -> TensorView<'_, T, S> {
        TensorView {
            data: &self.data,
            shape: PhantomData,
        }
    }
}

impl<T: Element, S: Shape> Default for Tensor<T, S> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Element, S: Shape> TensorExpr for Tensor<T, S> {
    type Scalar = T;
    type Shape = S;

    #[inline]
    fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn eval_batch(&self, index: usize) -> Batch<T> {
        <Batch<T> as SimdBatch>::from_slice(&self.data[index..])
    }

    #[inline]
    fn eval_scalar(&self, index: usize) -> T {
        self.data[index]
    }
}

/// Borrowed row-major view with a static shape
#[derive(Clone, Copy, Debug)]
pub struct TensorView<'a, T, S> {
    data: &'a [T],
    shape: PhantomData<S>,
}

impl<'a, T: Element, S: Shape> TensorView<'a, T, S> {
    /// View `data` under shape `S`
    ///
    /// Fails if the slice length differs from the number of elements of `S`.
    pub fn new(data: &'a [T]) -> Result<Self> {
        if data.len() != S::SIZE {
            log::debug!(
                "rejecting slice of {} elements for shape {:?}",
                data.len(),
                S::DIMS
            );
            return Err(Error::size_mismatch(S::SIZE, data.len(), "TensorView::new"));
        }
        Ok(Self {
            data,
            shape: PhantomData,
        })
    }

    /// Underlying slice
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Element at a multi-index
    pub fn get(&self, index: &[usize]) -> Result<T> {
        let offset = checked_offset::<S>(index)?;
        Ok(self.data[offset])
    }

    /// Copy the viewed elements into owned storage
    pub fn to_tensor(&self) -> Tensor<T, S> {
        Tensor {
            data: self.data.to_vec(),
            shape: PhantomData,
        }
    }
}

impl<T: Element, S: Shape> TensorExpr for TensorView<'_, T, S> {
    type Scalar = T;
    type Shape = S;

    #[inline]
    fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn eval_batch(&self, index: usize) -> Batch<T> {
        <Batch<T> as SimdBatch>::from_slice(&self.data[index..])
    }

    #[inline]
    fn eval_scalar(&self, index: usize) -> T {
        self.data[index]
    }
}

fn checked_offset<S: Shape>(index: &[usize]) -> Result<usize> {
    if index.len() != S::RANK {
        return Err(Error::rank_mismatch(S::RANK, index.len()));
    }
    S::flatten(index).ok_or_else(|| Error::index_out_of_bounds(index, S::DIMS))
}
