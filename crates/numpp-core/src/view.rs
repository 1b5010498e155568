// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The view family: selections, reshapes, transpose and diagonal.
//!
//! Every operation here returns (or mutates) a storage that shares its
//! source's buffer. Address cells are materialized eagerly, so building a
//! view costs `O(view size)` and reading through it is a single lookup.

use std::rc::Rc;

use itertools::Itertools;

use crate::index::{flat_offset_canonical, resolve};
use crate::storage::{Cells, Storage};
use crate::{ArrayError, AxisSpec, Result, Scalar, Shape};

/// Yields every combination of one position per axis, axis 0 slowest.
///
/// Rank 0 yields nothing; the empty product is not a valid element.
fn cartesian(axes: &[Vec<usize>]) -> Vec<Vec<usize>> {
    if axes.is_empty() {
        return Vec::new();
    }
    axes.iter()
        .map(|positions| positions.iter().copied())
        .multi_cartesian_product()
        .collect()
}

fn full_axes(shape: &Shape) -> Vec<Vec<usize>> {
    shape.dims().iter().map(|&extent| (0..extent).collect()).collect()
}

impl<T: Scalar> Storage<T> {
    /// Returns an aliasing storage over every element, in existing order.
    pub fn view_all(&self) -> Storage<T> {
        let slots: Rc<[usize]> = (0..self.size()).map(|linear| self.slot(linear)).collect();
        Storage::aliasing(
            self.buffer().clone(),
            Cells::Addresses(slots),
            self.shape().clone(),
        )
    }

    /// Returns an aliasing storage over the positions selected per axis.
    ///
    /// # Errors
    /// [`ArrayError::RankMismatch`] unless exactly one specifier per axis is
    /// given; range and bounds errors from expanding the specifiers.
    ///
    /// # Examples
    /// ```
    /// use numpp_core::{all, nested, range, Storage};
    /// let s = Storage::from_nested(nested![[1, 2, 3], [4, 5, 6]]).unwrap();
    /// let v = s.view(&[all(), range(0, 1)]).unwrap();
    /// assert_eq!(v.to_vec(), vec![1, 2, 4, 5]);
    /// ```
    pub fn view(&self, specs: &[AxisSpec]) -> Result<Storage<T>> {
        if specs.len() != self.ndims() {
            return Err(ArrayError::RankMismatch {
                expected: self.ndims(),
                received: specs.len(),
            });
        }

        let mut axes = Vec::with_capacity(specs.len());
        for (axis, spec) in specs.iter().enumerate() {
            let extent = self.shape()[axis];
            let positions = spec
                .positions(extent, axis)?
                .into_iter()
                .map(|position| resolve(position, extent, axis))
                .collect::<Result<Vec<usize>>>()?;
            axes.push(positions);
        }

        let shape = Shape::new(axes.iter().map(Vec::len).collect());
        let slots: Rc<[usize]> = cartesian(&axes)
            .iter()
            .map(|idx| self.slot(flat_offset_canonical(idx, self.strides())))
            .collect();
        tracing::debug!(source = %self.shape(), view = %shape, "materialized view");
        Ok(Storage::aliasing(
            self.buffer().clone(),
            Cells::Addresses(slots),
            shape,
        ))
    }

    fn check_equivalent(&self, op: &'static str, candidate: &Shape) -> Result<()> {
        if !self.shape().is_equivalent(candidate) {
            return Err(ArrayError::DimensionsMismatch {
                op,
                lhs: self.shape().clone(),
                rhs: candidate.clone(),
            });
        }
        Ok(())
    }

    /// Returns an aliasing storage with a new shape of the same size.
    ///
    /// # Errors
    /// [`ArrayError::DimensionsMismatch`] if the element counts differ.
    pub fn reshape(&self, dims: impl Into<Shape>) -> Result<Storage<T>> {
        let shape = dims.into();
        self.check_equivalent("reshape", &shape)?;
        tracing::debug!(from = %self.shape(), to = %shape, "reshape");
        Ok(Storage::aliasing(
            self.buffer().clone(),
            self.cells().clone(),
            shape,
        ))
    }

    /// Returns an aliasing rank-1 storage over every element.
    pub fn flatten(&self) -> Storage<T> {
        Storage::aliasing(
            self.buffer().clone(),
            self.cells().clone(),
            Shape::vector(self.size()),
        )
    }

    /// Changes the shape in place.
    ///
    /// The storage is left untouched when the check fails.
    pub fn resize(&mut self, dims: impl Into<Shape>) -> Result<()> {
        let shape = dims.into();
        self.check_equivalent("resize", &shape)?;
        tracing::debug!(from = %self.shape(), to = %shape, "resize");
        self.set_shape(shape);
        Ok(())
    }

    /// Changes the shape in place to a single axis.
    pub fn resize_flat(&mut self) {
        let shape = Shape::vector(self.size());
        self.set_shape(shape);
    }

    /// Returns an aliasing storage with the axis order reversed.
    ///
    /// The element at `(i, j, k)` of the source is at `(k, j, i)` of the
    /// result; transposing twice restores the original ordering.
    pub fn transpose(&self) -> Storage<T> {
        let shape = self.shape().reversed();
        let strides = shape.strides();
        let mut slots = vec![0usize; self.size()];
        for idx in cartesian(&full_axes(self.shape())) {
            let dest: usize = idx
                .iter()
                .rev()
                .zip(strides.iter())
                .map(|(position, stride)| position * stride)
                .sum();
            slots[dest] = self.slot(flat_offset_canonical(&idx, self.strides()));
        }
        tracing::debug!(from = %self.shape(), to = %shape, "transpose");
        Storage::aliasing(self.buffer().clone(), Cells::Addresses(slots.into()), shape)
    }

    /// Returns an aliasing rank-1 storage over `(i, i, ...)` for every `i`
    /// below the smallest extent.
    ///
    /// # Errors
    /// [`ArrayError::RankMismatch`] for storages with fewer than two axes.
    pub fn diagonal(&self) -> Result<Storage<T>> {
        if self.ndims() < 2 {
            return Err(ArrayError::RankMismatch {
                expected: 2,
                received: self.ndims(),
            });
        }
        let len = self.shape().dims().iter().copied().min().unwrap_or(0);
        let slots: Rc<[usize]> = (0..len)
            .map(|i| self.slot(flat_offset_canonical(&vec![i; self.ndims()], self.strides())))
            .collect();
        Ok(Storage::aliasing(
            self.buffer().clone(),
            Cells::Addresses(slots),
            Shape::vector(len),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::{all, nested, range, range_step, slice, ArrayError, AxisSpec, Shape, Storage};

    fn matrix() -> Storage<i32> {
        Storage::from_nested(nested![[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap()
    }

    #[test]
    fn test_view_all_aliases() {
        let s = matrix();
        let v = s.view_all();
        assert!(v.is_view());
        assert!(v.shares_buffer_with(&s));
        assert_eq!(v.shape(), s.shape());
        v.set_at(&[1, 1], 50).unwrap();
        assert_eq!(s.get_at(&[1, 1]).unwrap(), 50);
        s.set(0, 10).unwrap();
        assert_eq!(v.get(0).unwrap(), 10);
    }

    #[test]
    fn test_view_columns() {
        let s = matrix();
        let v = s.view(&[all(), range(0, 1)]).unwrap();
        assert_eq!(v.shape(), &Shape::matrix(3, 2));
        assert_eq!(v.to_vec(), vec![1, 2, 4, 5, 7, 8]);
    }

    #[test]
    fn test_view_index_keeps_axis() {
        let s = matrix();
        let row = s.view(&[AxisSpec::Index(-1), all()]).unwrap();
        assert_eq!(row.shape(), &Shape::matrix(1, 3));
        assert_eq!(row.to_vec(), vec![7, 8, 9]);
    }

    #[test]
    fn test_view_slice_corners() {
        let s = matrix();
        let v = s.view(&[slice([0, -1]), slice([0, -1])]).unwrap();
        assert_eq!(v.to_vec(), vec![1, 3, 7, 9]);
    }

    #[test]
    fn test_view_reversed_range() {
        let s = matrix();
        let v = s.view(&[range_step(-1, 0, -1), all()]).unwrap();
        assert_eq!(v.to_vec(), vec![7, 8, 9, 4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_view_of_view() {
        let s = matrix();
        let inner = s.view(&[range(1, 2), range(1, 2)]).unwrap();
        let corner = inner.view(&[AxisSpec::Index(1), AxisSpec::Index(1)]).unwrap();
        assert_eq!(corner.get(0).unwrap(), 9);
        corner.set(0, 90).unwrap();
        assert_eq!(s.get(-1).unwrap(), 90);
    }

    #[test]
    fn test_view_errors() {
        let s = matrix();
        assert_eq!(
            s.view(&[all()]).unwrap_err(),
            ArrayError::RankMismatch {
                expected: 2,
                received: 1
            }
        );
        assert!(matches!(
            s.view(&[slice([3]), all()]),
            Err(ArrayError::IndexOutOfBounds { index: 3, axis: 0, .. })
        ));
        assert!(matches!(
            s.view(&[all(), range_step(0, 2, 0)]),
            Err(ArrayError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_view_empty_slice() {
        let s = matrix();
        let v = s.view(&[slice([]), all()]).unwrap();
        assert_eq!(v.shape(), &Shape::matrix(0, 3));
        assert_eq!(v.size(), 0);
        assert!(v.to_vec().is_empty());
    }

    #[test]
    fn test_view_outlives_source() {
        let s = matrix();
        let v = s.view(&[all(), AxisSpec::Index(0)]).unwrap();
        assert_eq!(s.buffer_handles(), 2);
        drop(s);
        assert_eq!(v.buffer_handles(), 1);
        assert_eq!(v.to_vec(), vec![1, 4, 7]);
    }

    #[test]
    fn test_reshape_shares_buffer() {
        let s = Storage::from_flat((1..=6).collect::<Vec<i64>>());
        let r = s.reshape([2, 3]).unwrap();
        assert!(r.is_view());
        assert!(r.shares_buffer_with(&s));
        assert_eq!(r.get_at(&[1, 0]).unwrap(), 4);
        r.set_at(&[0, 2], 30).unwrap();
        assert_eq!(s.get(2).unwrap(), 30);
        assert_eq!(r.flatten().shape(), &Shape::vector(6));
    }

    #[test]
    fn test_reshape_mismatch() {
        let s = matrix();
        let err = s.reshape([2, 4]).unwrap_err();
        assert!(matches!(err, ArrayError::DimensionsMismatch { op: "reshape", .. }));
        assert_eq!(s.shape(), &Shape::matrix(3, 3));
    }

    #[test]
    fn test_reshape_of_view_keeps_selection() {
        let s = matrix();
        let v = s.view(&[all(), slice([2])]).unwrap();
        let r = v.reshape([3]).unwrap();
        assert_eq!(r.to_vec(), vec![3, 6, 9]);
    }

    #[test]
    fn test_resize_in_place() {
        let mut s = Storage::from_flat(vec![1u8, 2, 3, 4, 5, 6]);
        s.resize([3, 2]).unwrap();
        assert_eq!(s.shape(), &Shape::matrix(3, 2));
        assert_eq!(s.strides().as_slice(), &[2, 1]);
        assert_eq!(s.get_at(&[2, 1]).unwrap(), 6);

        assert!(s.resize([4]).is_err());
        assert_eq!(s.shape(), &Shape::matrix(3, 2));

        s.resize_flat();
        assert_eq!(s.shape(), &Shape::vector(6));
    }

    #[test]
    fn test_transpose() {
        let s = Storage::from_nested(nested![[1, 2, 3], [4, 5, 6]]).unwrap();
        let t = s.transpose();
        assert_eq!(t.shape(), &Shape::matrix(3, 2));
        assert_eq!(t.to_vec(), vec![1, 4, 2, 5, 3, 6]);
        t.set_at(&[2, 0], 30).unwrap();
        assert_eq!(s.get_at(&[0, 2]).unwrap(), 30);
    }

    #[test]
    fn test_transpose_3d_and_back() {
        let s = Storage::from_flat((0..24).collect::<Vec<i32>>())
            .reshape([2, 3, 4])
            .unwrap();
        let t = s.transpose();
        assert_eq!(t.shape(), &Shape::new(vec![4, 3, 2]));
        assert_eq!(t.get_at(&[3, 1, 0]).unwrap(), s.get_at(&[0, 1, 3]).unwrap());
        assert_eq!(t.transpose().to_vec(), s.to_vec());
    }

    #[test]
    fn test_diagonal() {
        let s = matrix();
        let d = s.diagonal().unwrap();
        assert_eq!(d.to_vec(), vec![1, 5, 9]);
        d.fill(0);
        assert_eq!(s.to_vec(), vec![0, 2, 3, 4, 0, 6, 7, 8, 0]);

        let wide = Storage::<f32>::from_shape([2, 5]);
        assert_eq!(wide.diagonal().unwrap().size(), 2);
    }

    #[test]
    fn test_diagonal_rank_one() {
        let s = Storage::from_flat(vec![1, 2, 3]);
        assert_eq!(
            s.diagonal().unwrap_err(),
            ArrayError::RankMismatch {
                expected: 2,
                received: 1
            }
        );
    }
}
