// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Dot products of vectors and matrices.

use crate::{all, ArrayError, AxisSpec, Element, Result, Shape, Storage};

/// Computes the dot product of two rank-1 or rank-2 storages.
///
/// | lhs      | rhs      | requirement   | result    |
/// |----------|----------|---------------|-----------|
/// | `(n)`    | `(n)`    | lengths equal | `(1)`     |
/// | `(m, n)` | `(n)`    | `n == n`      | `(m)`     |
/// | `(m)`    | `(m, n)` | `m == m`      | `(n)`     |
/// | `(m, k)` | `(k, n)` | `k == k`      | `(m, n)`  |
///
/// Rows and columns are taken as views, so the inputs may themselves be
/// views, transposes or diagonals. The result is always owning.
///
/// # Errors
/// Returns [`ArrayError::DimensionsMismatch`] for ranks outside `1..=2` or
/// incompatible inner dimensions.
pub fn dot<T: Element>(lhs: &Storage<T>, rhs: &Storage<T>) -> Result<Storage<T>> {
    check_dot_dims(lhs.shape(), rhs.shape())?;
    tracing::debug!(lhs = %lhs.shape(), rhs = %rhs.shape(), "dot");

    match (lhs.ndims(), rhs.ndims()) {
        (1, 1) => Ok(Storage::from_flat(vec![inner(lhs, rhs)])),
        (2, 1) => {
            let rows = lhs.shape()[0];
            let values = (0..rows)
                .map(|r| Ok(inner(&lhs.view(&[AxisSpec::Index(r as isize), all()])?, rhs)))
                .collect::<Result<Vec<T>>>()?;
            Ok(Storage::from_flat(values))
        }
        (1, 2) => {
            let cols = rhs.shape()[1];
            let values = (0..cols)
                .map(|c| Ok(inner(lhs, &rhs.view(&[all(), AxisSpec::Index(c as isize)])?)))
                .collect::<Result<Vec<T>>>()?;
            Ok(Storage::from_flat(values))
        }
        _ => {
            let rows = lhs.shape()[0];
            let cols = rhs.shape()[1];
            let mut values = Vec::with_capacity(rows * cols);
            for r in 0..rows {
                let row = lhs.view(&[AxisSpec::Index(r as isize), all()])?;
                for c in 0..cols {
                    let col = rhs.view(&[all(), AxisSpec::Index(c as isize)])?;
                    values.push(inner(&row, &col));
                }
            }
            Ok(Storage::from_shaped(values, Shape::matrix(rows, cols)))
        }
    }
}

impl<T: Element> Storage<T> {
    /// Dot product with `other`; see [`dot`].
    pub fn dot(&self, other: &Storage<T>) -> Result<Storage<T>> {
        dot(self, other)
    }
}

fn check_dot_dims(lhs: &Shape, rhs: &Shape) -> Result<()> {
    let compatible = match (lhs.ndims(), rhs.ndims()) {
        (1, 1) => lhs[0] == rhs[0],
        (2, 1) => lhs[1] == rhs[0],
        (1, 2) => lhs[0] == rhs[0],
        (2, 2) => lhs[1] == rhs[0],
        _ => false,
    };
    if !compatible {
        return Err(ArrayError::DimensionsMismatch {
            op: "dot",
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        });
    }
    Ok(())
}

/// Sum of pairwise products over linear order. Callers have checked that
/// both sides hold the same number of elements.
fn inner<T: Element>(lhs: &Storage<T>, rhs: &Storage<T>) -> T {
    lhs.iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (a, b)| acc + a * b)
}
