// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Shape descriptors and row-major stride derivation.

use std::fmt;
use std::ops::Index;

/// The logical extents of a [`crate::Storage`], one per axis.
///
/// Shapes are replaced wholesale when a storage is resized; they are never
/// patched extent by extent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Creates a new shape from the given extents.
    ///
    /// # Examples
    /// ```
    /// use numpp_core::Shape;
    /// let s = Shape::new(vec![2, 3, 4]);
    /// assert_eq!(s.ndims(), 3);
    /// assert_eq!(s.size(), 24);
    /// ```
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// Creates a 1-D shape.
    pub fn vector(len: usize) -> Self {
        Self { dims: vec![len] }
    }

    /// Creates a 2-D shape (matrix).
    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self {
            dims: vec![rows, cols],
        }
    }

    /// Returns the number of axes.
    pub fn ndims(&self) -> usize {
        self.dims.len()
    }

    /// Returns the total number of elements.
    ///
    /// A shape without axes holds no elements, so this returns 0 for rank 0.
    pub fn size(&self) -> usize {
        if self.dims.is_empty() || self.dims.contains(&0) {
            0
        } else {
            self.dims.iter().product()
        }
    }

    /// Returns the extents as a slice.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the extent of a specific axis, or `None` if out of bounds.
    pub fn dim(&self, axis: usize) -> Option<usize> {
        self.dims.get(axis).copied()
    }

    /// Returns `true` when both shapes hold the same number of elements,
    /// regardless of rank.
    pub fn is_equivalent(&self, other: &Shape) -> bool {
        self.size() == other.size()
    }

    /// Returns the shape with its axis order inverted.
    pub fn reversed(&self) -> Shape {
        Shape::new(self.dims.iter().rev().copied().collect())
    }

    /// Computes the row-major strides for this shape.
    pub fn strides(&self) -> Strides {
        Strides::from_shape(self)
    }
}

impl Index<usize> for Shape {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.dims[axis]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, ")")
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self::new(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self::new(dims.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self::new(dims.to_vec())
    }
}

/// Row-major element steps, one per axis.
///
/// The last axis always has stride 1 and
/// `strides[i] == strides[i + 1] * shape[i + 1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Strides {
    steps: Vec<usize>,
}

impl Strides {
    /// Derives strides from a shape with a single reverse pass.
    ///
    /// The running product saturates, so an empty shape with huge trailing
    /// extents still yields strides; no element is ever addressed through them.
    pub fn from_shape(shape: &Shape) -> Self {
        let mut steps = vec![0usize; shape.ndims()];
        let mut running = 1usize;
        for axis in (0..shape.ndims()).rev() {
            steps[axis] = running;
            running = running.saturating_mul(shape[axis]);
        }
        Self { steps }
    }

    /// Returns the number of axes.
    pub fn ndims(&self) -> usize {
        self.steps.len()
    }

    /// Returns the strides as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.steps
    }

    /// Returns an iterator over the per-axis steps.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.steps.iter()
    }
}

impl Index<usize> for Strides {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.steps[axis]
    }
}
