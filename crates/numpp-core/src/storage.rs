// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The strided element container.
//!
//! A [`Storage`] pairs a [`SharedBuffer`] with a logical [`Shape`] and a
//! cell map that says which buffer slot backs each linear position:
//!
//! - **value cells**: linear position `i` is slot `i`. Storages built from
//!   literals, shapes or flat buffers, and every [`Storage::copy`], start
//!   out this way.
//! - **address cells**: linear position `i` is `slots[i]`. Views,
//!   transposes and diagonals select arbitrary elements of another
//!   storage's buffer this way.
//!
//! Both kinds share one read/write contract, so callers never need to know
//! which one they hold.

use std::fmt;
use std::rc::Rc;

use crate::buffer::SharedBuffer;
use crate::index::{flat_offset, resolve};
use crate::{ArrayError, Nested, Result, Scalar, Shape, Strides};

/// Maps linear positions of a storage onto slots of its buffer.
#[derive(Debug, Clone)]
pub(crate) enum Cells {
    /// Linear position `i` is buffer slot `i`.
    Values,
    /// Linear position `i` is buffer slot `slots[i]`.
    Addresses(Rc<[usize]>),
}

/// An N-dimensional container over a shared buffer.
///
/// Storages are either *owning* (constructed or copied) or *aliasing*
/// (produced by a view-family operation). Aliasing storages keep the
/// buffer alive through their own handle, and writes through any storage
/// are visible through every other storage sharing the same slot.
///
/// # Examples
/// ```
/// use numpp_core::{nested, Storage};
/// let s = Storage::from_nested(nested![[1, 2, 3], [4, 5, 6]]).unwrap();
/// assert_eq!(s.size(), 6);
/// assert_eq!(s.get_at(&[1, -1]).unwrap(), 6);
/// assert_eq!(s.get(-1).unwrap(), 6);
/// ```
pub struct Storage<T> {
    buffer: SharedBuffer<T>,
    cells: Cells,
    shape: Shape,
    strides: Strides,
    owning: bool,
}

impl<T: Scalar> Storage<T> {
    fn owning(buffer: SharedBuffer<T>, shape: Shape) -> Self {
        Self {
            buffer,
            cells: Cells::Values,
            strides: shape.strides(),
            shape,
            owning: true,
        }
    }

    /// Builds an aliasing storage over `buffer` (used by the view family).
    pub(crate) fn aliasing(buffer: SharedBuffer<T>, cells: Cells, shape: Shape) -> Self {
        Self {
            buffer,
            cells,
            strides: shape.strides(),
            shape,
            owning: false,
        }
    }

    /// Creates an owning storage of the given shape filled with `T::default()`.
    pub fn from_shape(shape: impl Into<Shape>) -> Self {
        Self::full(shape, T::default())
    }

    /// Creates an owning 1-D storage of `capacity` default elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_shape(Shape::vector(capacity))
    }

    /// Creates an owning storage of the given shape filled with `value`.
    pub fn full(shape: impl Into<Shape>, value: T) -> Self {
        let shape = shape.into();
        Self::owning(SharedBuffer::filled(shape.size(), value), shape)
    }

    /// Creates an owning storage from a flat row-major buffer.
    ///
    /// # Errors
    /// Returns [`ArrayError::BufferSizeMismatch`] if `values.len()` differs
    /// from the element count of `shape`.
    pub fn from_vec(values: Vec<T>, shape: impl Into<Shape>) -> Result<Self> {
        let shape = shape.into();
        if values.len() != shape.size() {
            return Err(ArrayError::BufferSizeMismatch {
                expected: shape.size(),
                actual: values.len(),
            });
        }
        Ok(Self::owning(SharedBuffer::from_vec(values), shape))
    }

    /// Builds an owning storage from values already known to fill `shape`.
    pub(crate) fn from_shaped(values: Vec<T>, shape: Shape) -> Self {
        debug_assert_eq!(values.len(), shape.size());
        Self::owning(SharedBuffer::from_vec(values), shape)
    }

    /// Creates an owning 1-D storage holding `values`.
    pub fn from_flat(values: Vec<T>) -> Self {
        let shape = Shape::vector(values.len());
        Self::owning(SharedBuffer::from_vec(values), shape)
    }

    /// Creates an owning storage from a nested literal.
    ///
    /// # Errors
    /// Irregular literals fail with [`ArrayError::ShapeDeduction`] or
    /// [`ArrayError::MixedNesting`]; a bare scalar fails with
    /// [`ArrayError::RankMismatch`] because a storage needs at least one axis.
    pub fn from_nested(literal: Nested<T>) -> Result<Self> {
        let shape = literal.shape()?;
        if shape.ndims() == 0 {
            return Err(ArrayError::RankMismatch {
                expected: 1,
                received: 0,
            });
        }
        Ok(Self::owning(
            SharedBuffer::from_vec(literal.into_flat()),
            shape,
        ))
    }

    /// Returns the logical shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the row-major strides of the logical shape.
    pub fn strides(&self) -> &Strides {
        &self.strides
    }

    /// Returns the number of axes.
    pub fn ndims(&self) -> usize {
        self.shape.ndims()
    }

    /// Returns the number of elements.
    pub fn size(&self) -> usize {
        self.shape.size()
    }

    /// Returns `true` for storages produced by a view-family operation.
    pub fn is_view(&self) -> bool {
        !self.owning
    }

    /// Returns `true` if this storage uses address cells.
    pub fn has_address_cells(&self) -> bool {
        matches!(self.cells, Cells::Addresses(_))
    }

    /// Returns `true` if both storages read and write the same buffer.
    pub fn shares_buffer_with(&self, other: &Storage<T>) -> bool {
        self.buffer.ptr_eq(&other.buffer)
    }

    /// Returns the number of storages currently holding this buffer.
    pub fn buffer_handles(&self) -> usize {
        self.buffer.handle_count()
    }

    pub(crate) fn buffer(&self) -> &SharedBuffer<T> {
        &self.buffer
    }

    /// Maps a canonical linear position onto its buffer slot.
    pub(crate) fn slot(&self, linear: usize) -> usize {
        match &self.cells {
            Cells::Values => linear,
            Cells::Addresses(slots) => slots[linear],
        }
    }

    pub(crate) fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Replaces shape and strides; callers have checked equivalence.
    pub(crate) fn set_shape(&mut self, shape: Shape) {
        self.strides = shape.strides();
        self.shape = shape;
    }

    fn linear(&self, index: isize) -> Result<usize> {
        resolve(index, self.size(), 0)
    }

    /// Reads the element at a linear position; negative positions count
    /// from the end.
    pub fn get(&self, index: isize) -> Result<T> {
        let linear = self.linear(index)?;
        Ok(self.buffer.get(self.slot(linear)))
    }

    /// Writes the element at a linear position.
    pub fn set(&self, index: isize, value: T) -> Result<()> {
        let linear = self.linear(index)?;
        self.buffer.set(self.slot(linear), value);
        Ok(())
    }

    /// Reads the element at a full multi-index.
    ///
    /// # Errors
    /// [`ArrayError::WrongIndexCount`] unless exactly one index per axis is
    /// given; [`ArrayError::IndexOutOfBounds`] for positions outside an axis.
    pub fn get_at(&self, indices: &[isize]) -> Result<T> {
        let linear = flat_offset(indices, &self.shape, &self.strides)?;
        Ok(self.buffer.get(self.slot(linear)))
    }

    /// Writes the element at a full multi-index.
    pub fn set_at(&self, indices: &[isize], value: T) -> Result<()> {
        let linear = flat_offset(indices, &self.shape, &self.strides)?;
        self.buffer.set(self.slot(linear), value);
        Ok(())
    }

    /// Iterates over the elements in linear order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.size()).map(move |linear| self.buffer.get(self.slot(linear)))
    }

    /// Collects the elements in linear order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Overwrites every element with `value`.
    pub fn fill(&self, value: T) {
        for linear in 0..self.size() {
            self.buffer.set(self.slot(linear), value);
        }
    }

    /// Returns an owning storage with the same shape and a private buffer.
    ///
    /// Later writes to either side never reach the other.
    pub fn copy(&self) -> Storage<T> {
        Self::owning(SharedBuffer::from_vec(self.to_vec()), self.shape.clone())
    }
}

impl<T: Scalar> TryFrom<Nested<T>> for Storage<T> {
    type Error = ArrayError;

    fn try_from(literal: Nested<T>) -> Result<Self> {
        Self::from_nested(literal)
    }
}

impl<T: Scalar> fmt::Debug for Storage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("dtype", &T::DTYPE)
            .field("shape", &self.shape)
            .field("owning", &self.owning)
            .field("address_cells", &self.has_address_cells())
            .field("buffer", &self.buffer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested;

    fn sample() -> Storage<i32> {
        Storage::from_nested(nested![[1, 2, 3], [4, 5, 6]]).unwrap()
    }

    #[test]
    fn test_from_nested() {
        let s = sample();
        assert_eq!(s.shape(), &Shape::matrix(2, 3));
        assert_eq!(s.size(), 6);
        assert_eq!(s.strides().as_slice(), &[3, 1]);
        assert!(!s.is_view());
        assert!(!s.has_address_cells());
        assert_eq!(s.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_nested_rejects_scalar_and_irregular() {
        assert_eq!(
            Storage::from_nested(Nested::Scalar(1)).unwrap_err(),
            ArrayError::RankMismatch {
                expected: 1,
                received: 0
            }
        );
        assert!(matches!(
            Storage::from_nested(nested![[1, 2], [3]]),
            Err(ArrayError::ShapeDeduction { first: 2, second: 1 })
        ));
    }

    #[test]
    fn test_linear_and_multi_index() {
        let s = sample();
        assert_eq!(s.get(0).unwrap(), 1);
        assert_eq!(s.get(-1).unwrap(), 6);
        assert_eq!(s.get(-6).unwrap(), 1);
        assert_eq!(s.get_at(&[1, -1]).unwrap(), 6);
        assert_eq!(s.get_at(&[-1, 0]).unwrap(), 4);
        assert_eq!(s.get_at(&[0, -1]).unwrap(), 3);
        assert_eq!(s.get_at(&[1, -2]).unwrap(), 5);
    }

    #[test]
    fn test_index_errors() {
        let s = sample();
        assert!(matches!(s.get(6), Err(ArrayError::IndexOutOfBounds { .. })));
        assert!(matches!(s.get(-7), Err(ArrayError::IndexOutOfBounds { .. })));
        assert_eq!(
            s.get_at(&[1]),
            Err(ArrayError::WrongIndexCount {
                expected: 2,
                received: 1
            })
        );
        assert!(matches!(
            s.get_at(&[2, 0]),
            Err(ArrayError::IndexOutOfBounds { axis: 0, .. })
        ));
        assert_eq!(
            s.get_at(&[0, 0, 0]),
            Err(ArrayError::WrongIndexCount {
                expected: 2,
                received: 3
            })
        );
        assert_eq!(
            s.set_at(&[0, 0, 0], 99),
            Err(ArrayError::WrongIndexCount {
                expected: 2,
                received: 3
            })
        );
        assert!(s.set_at(&[0, 3], 99).is_err());
        assert!(s.set(-7, 99).is_err());
        assert_eq!(s.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_set() {
        let s = sample();
        s.set(-1, 60).unwrap();
        s.set_at(&[0, 1], 20).unwrap();
        assert_eq!(s.to_vec(), vec![1, 20, 3, 4, 5, 60]);
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        let r = Storage::from_vec(vec![1.0f32; 5], [2, 3]);
        assert_eq!(
            r.unwrap_err(),
            ArrayError::BufferSizeMismatch {
                expected: 6,
                actual: 5
            }
        );
        assert!(Storage::from_vec(vec![0u8; 6], [3, 2]).is_ok());
    }

    #[test]
    fn test_empty_storage_with_huge_extents() {
        let s = Storage::<u8>::from_shape([0, 1 << 40, 1 << 40]);
        assert_eq!(s.size(), 0);
        assert!(s.to_vec().is_empty());
    }

    #[test]
    fn test_from_shape_and_capacity() {
        let s = Storage::<f64>::from_shape([2, 2]);
        assert_eq!(s.to_vec(), vec![0.0; 4]);
        let c = Storage::<i64>::with_capacity(3);
        assert_eq!(c.shape(), &Shape::vector(3));
        let f = Storage::full([4, 3, 2], 0.5f64);
        assert_eq!(f.size(), 24);
        assert!(f.iter().all(|x| x == 0.5));
    }

    #[test]
    fn test_copy_is_isolated() {
        let s = sample();
        let c = s.copy();
        assert!(!c.shares_buffer_with(&s));
        s.set_at(&[0, 1], 200).unwrap();
        c.set_at(&[1, 0], 400).unwrap();
        assert_eq!(s.get_at(&[0, 1]).unwrap(), 200);
        assert_eq!(c.get_at(&[0, 1]).unwrap(), 2);
        assert_eq!(s.get_at(&[1, 0]).unwrap(), 4);
        assert_eq!(c.get_at(&[1, 0]).unwrap(), 400);
        assert!(!c.is_view());
    }

    #[test]
    fn test_fill() {
        let s = Storage::<i32>::from_shape([3]);
        s.fill(7);
        assert_eq!(s.to_vec(), vec![7, 7, 7]);
    }

    #[test]
    fn test_debug_format() {
        let debug = format!("{:?}", sample());
        assert!(debug.contains("Storage"));
        assert!(debug.contains("I32"));
    }
}
