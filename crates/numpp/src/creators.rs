// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Factory functions for common arrays.

use numpp_core::{Element, Result, Scalar, Shape};

use crate::Array;

/// Creates an array of the given shape with every element set to `value`.
pub fn full<T: Scalar>(dims: impl Into<Shape>, value: T) -> Array<T> {
    Array::from_storage(numpp_core::Storage::full(dims, value))
}

/// Creates an array of the given shape filled with zeros.
pub fn zeros<T: Element>(dims: impl Into<Shape>) -> Array<T> {
    full(dims, T::zero())
}

/// Creates an `n x n` array with `value` on the diagonal and zeros elsewhere.
///
/// The diagonal is written through a [`Array::diagonal`] view.
pub fn eye<T: Element>(n: usize, value: T) -> Result<Array<T>> {
    let arr = zeros(Shape::matrix(n, n));
    arr.diagonal()?.fill(value);
    Ok(arr)
}

/// Creates an `n x n` identity matrix.
pub fn identity<T: Element>(n: usize) -> Result<Array<T>> {
    eye(n, T::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full() {
        let f = full([4, 3, 2], 0.5f64);
        assert_eq!(f.ndims(), 3);
        assert_eq!(f.shape(), &Shape::new(vec![4, 3, 2]));
        assert_eq!(f.get(0).unwrap(), 0.5);
        assert_eq!(f.get(-1).unwrap(), 0.5);
        assert!(!f.is_view());
    }

    #[test]
    fn test_zeros() {
        let z = zeros::<i16>([2, 2]);
        assert_eq!(z.to_vec(), vec![0; 4]);
        assert!(!z.any());
    }

    #[test]
    fn test_eye() {
        let e = eye(2, -1i32).unwrap();
        assert_eq!(e.shape(), &Shape::matrix(2, 2));
        assert_eq!(e.to_vec(), vec![-1, 0, 0, -1]);
        assert!(!e.is_view());
    }

    #[test]
    fn test_identity() {
        let e = identity::<u32>(3).unwrap();
        assert_eq!(e.get_at(&[0, 0]).unwrap(), 1);
        assert_eq!(e.get_at(&[1, 2]).unwrap(), 0);
        assert_eq!(e.diagonal().unwrap().to_vec(), vec![1, 1, 1]);
    }

    #[test]
    fn test_eye_empty() {
        let e = eye(0, 1.0f32).unwrap();
        assert_eq!(e.size(), 0);
    }
}
