// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`Array`] facade over [`Storage`].

use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

use numpp_core::ops::{self, BinaryOp, CompareOp};
use numpp_core::{
    ArrayError, AxisSpec, DType, Element, Nested, Result, Scalar, Shape, Storage, Strides,
};

use crate::display::{Formatted, PrintOptions};

/// An N-dimensional array.
///
/// Views, reshapes and transposes share elements with the array they came
/// from; [`Array::copy`] is the only way to get an independent duplicate.
///
/// # Examples
/// ```
/// use numpp::{all, nested, Array, AxisSpec};
///
/// let arr = Array::from_nested(nested![[1, 2, 3], [4, 5, 6]]).unwrap();
/// let col = arr.view(&[all(), AxisSpec::Index(-1)]).unwrap();
/// col.set(0, 30).unwrap();
/// assert_eq!(arr.get_at(&[0, 2]).unwrap(), 30);
///
/// let sum = (&arr + 1).to_vec();
/// assert_eq!(sum, vec![2, 3, 31, 5, 6, 7]);
/// ```
pub struct Array<T> {
    storage: Storage<T>,
}

impl<T: Scalar> Array<T> {
    /// Wraps an existing storage.
    pub fn from_storage(storage: Storage<T>) -> Self {
        Self { storage }
    }

    /// Creates an array from a regular nested literal.
    pub fn from_nested(literal: Nested<T>) -> Result<Self> {
        Storage::from_nested(literal).map(Self::from_storage)
    }

    /// Creates an array from a flat row-major buffer and a shape.
    pub fn from_vec(values: Vec<T>, dims: impl Into<Shape>) -> Result<Self> {
        Storage::from_vec(values, dims).map(Self::from_storage)
    }

    /// Creates an array of default elements.
    pub fn from_shape(dims: impl Into<Shape>) -> Self {
        Self::from_storage(Storage::from_shape(dims))
    }

    /// Creates a rank-1 array of `capacity` default elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_storage(Storage::with_capacity(capacity))
    }

    /// Returns the underlying storage.
    pub fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    /// Consumes the array and returns its storage.
    pub fn into_storage(self) -> Storage<T> {
        self.storage
    }

    /// Returns the runtime element type tag.
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Returns the shape.
    pub fn shape(&self) -> &Shape {
        self.storage.shape()
    }

    /// Returns the row-major strides.
    pub fn strides(&self) -> &Strides {
        self.storage.strides()
    }

    /// Returns the number of axes.
    pub fn ndims(&self) -> usize {
        self.storage.ndims()
    }

    /// Returns the element count.
    pub fn size(&self) -> usize {
        self.storage.size()
    }

    /// Returns `true` if this array aliases another array's elements.
    pub fn is_view(&self) -> bool {
        self.storage.is_view()
    }

    /// Returns `true` if both arrays read the same buffer.
    pub fn shares_buffer_with(&self, other: &Array<T>) -> bool {
        self.storage.shares_buffer_with(&other.storage)
    }

    /// Reads by linear position; `-1` is the last element.
    pub fn get(&self, index: isize) -> Result<T> {
        self.storage.get(index)
    }

    /// Writes by linear position; visible through every alias.
    pub fn set(&self, index: isize, value: T) -> Result<()> {
        self.storage.set(index, value)
    }

    /// Reads by full multi-index; negatives count from the end of each axis.
    pub fn get_at(&self, indices: &[isize]) -> Result<T> {
        self.storage.get_at(indices)
    }

    /// Writes by full multi-index.
    pub fn set_at(&self, indices: &[isize], value: T) -> Result<()> {
        self.storage.set_at(indices, value)
    }

    /// Sets every selected element to `value`.
    pub fn fill(&self, value: T) {
        self.storage.fill(value)
    }

    /// Elements in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.storage.to_vec()
    }

    /// Iterates elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.storage.iter()
    }

    /// Returns a view aliasing every element.
    pub fn view_all(&self) -> Array<T> {
        Self::from_storage(self.storage.view_all())
    }

    /// Selects positions per axis; see [`AxisSpec`].
    pub fn view(&self, specs: &[AxisSpec]) -> Result<Array<T>> {
        self.storage.view(specs).map(Self::from_storage)
    }

    /// Returns an owning deep copy.
    pub fn copy(&self) -> Array<T> {
        Self::from_storage(self.storage.copy())
    }

    /// Returns a view with a new shape of equal size.
    pub fn reshape(&self, dims: impl Into<Shape>) -> Result<Array<T>> {
        self.storage.reshape(dims).map(Self::from_storage)
    }

    /// Returns a rank-1 view of all elements.
    pub fn flatten(&self) -> Array<T> {
        Self::from_storage(self.storage.flatten())
    }

    /// Changes this array's shape in place; the size must not change.
    pub fn resize(&mut self, dims: impl Into<Shape>) -> Result<()> {
        self.storage.resize(dims)
    }

    /// Makes this array rank 1 in place.
    pub fn resize_flat(&mut self) {
        self.storage.resize_flat()
    }

    /// Returns a view with the axes reversed.
    pub fn transpose(&self) -> Array<T> {
        Self::from_storage(self.storage.transpose())
    }

    /// Returns a rank-1 view of positions with all indices equal.
    pub fn diagonal(&self) -> Result<Array<T>> {
        self.storage.diagonal().map(Self::from_storage)
    }

    /// `true` if any element is nonzero (or `true`).
    pub fn any(&self) -> bool {
        ops::any(&self.storage)
    }

    /// `true` if every element is nonzero (or `true`).
    pub fn all(&self) -> bool {
        ops::all(&self.storage)
    }

    /// Renders the array with explicit print options.
    pub fn display_with<'a>(&'a self, options: &'a PrintOptions) -> Formatted<'a, T> {
        Formatted::new(&self.storage, options)
    }
}

impl<T: Element> Array<T> {
    /// Dot product for rank-1 and rank-2 operands.
    pub fn dot(&self, other: &Array<T>) -> Result<Array<T>> {
        ops::dot(&self.storage, &other.storage).map(Self::from_storage)
    }

    fn compare(&self, op: CompareOp, other: &Array<T>) -> Result<Array<bool>> {
        ops::compare(op, &self.storage, &other.storage).map(Array::from_storage)
    }

    fn compare_scalar(&self, op: CompareOp, value: T) -> Array<bool> {
        Array::from_storage(ops::compare_scalar(op, &self.storage, value))
    }

    /// Elementwise `==`; shapes must be equal.
    pub fn equal(&self, other: &Array<T>) -> Result<Array<bool>> {
        self.compare(CompareOp::Eq, other)
    }

    /// Elementwise `>`; shapes must be equal.
    pub fn greater(&self, other: &Array<T>) -> Result<Array<bool>> {
        self.compare(CompareOp::Gt, other)
    }

    /// Elementwise `>=`; shapes must be equal.
    pub fn greater_equal(&self, other: &Array<T>) -> Result<Array<bool>> {
        self.compare(CompareOp::Ge, other)
    }

    /// Elementwise `<`; shapes must be equal.
    pub fn less(&self, other: &Array<T>) -> Result<Array<bool>> {
        self.compare(CompareOp::Lt, other)
    }

    /// Elementwise `<=`; shapes must be equal.
    pub fn less_equal(&self, other: &Array<T>) -> Result<Array<bool>> {
        self.compare(CompareOp::Le, other)
    }

    /// Compares every element `== value`.
    pub fn equal_scalar(&self, value: T) -> Array<bool> {
        self.compare_scalar(CompareOp::Eq, value)
    }

    /// Compares every element `> value`.
    pub fn greater_scalar(&self, value: T) -> Array<bool> {
        self.compare_scalar(CompareOp::Gt, value)
    }

    /// Compares every element `>= value`.
    pub fn greater_equal_scalar(&self, value: T) -> Array<bool> {
        self.compare_scalar(CompareOp::Ge, value)
    }

    /// Compares every element `< value`.
    pub fn less_scalar(&self, value: T) -> Array<bool> {
        self.compare_scalar(CompareOp::Lt, value)
    }

    /// Compares every element `<= value`.
    pub fn less_equal_scalar(&self, value: T) -> Array<bool> {
        self.compare_scalar(CompareOp::Le, value)
    }
}

impl<T: Scalar> TryFrom<Nested<T>> for Array<T> {
    type Error = ArrayError;

    fn try_from(literal: Nested<T>) -> Result<Self> {
        Self::from_nested(literal)
    }
}

impl<T: Scalar> From<Storage<T>> for Array<T> {
    fn from(storage: Storage<T>) -> Self {
        Self::from_storage(storage)
    }
}

impl<T: Scalar> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Formatted::new(&self.storage, &PrintOptions::default()), f)
    }
}

impl<T: Scalar> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("dtype", &T::DTYPE)
            .field("shape", self.shape())
            .field("view", &self.is_view())
            .finish()
    }
}

/// Array-array operators return `Result` (shapes must be equal);
/// array-scalar operators cannot fail.
macro_rules! impl_binary_ops {
    ($($trait:ident, $method:ident, $op:expr);* $(;)?) => {
        $(
            impl<'b, T: Element> $trait<&'b Array<T>> for &Array<T> {
                type Output = Result<Array<T>>;

                fn $method(self, rhs: &'b Array<T>) -> Self::Output {
                    ops::binary($op, &self.storage, &rhs.storage).map(Array::from_storage)
                }
            }

            impl<T: Element> $trait<T> for &Array<T> {
                type Output = Array<T>;

                fn $method(self, rhs: T) -> Self::Output {
                    Array::from_storage(ops::binary_scalar($op, &self.storage, rhs))
                }
            }
        )*
    };
}

impl_binary_ops! {
    Add, add, BinaryOp::Add;
    Sub, sub, BinaryOp::Sub;
    Mul, mul, BinaryOp::Mul;
    Div, div, BinaryOp::Div;
    Rem, rem, BinaryOp::Rem;
}
