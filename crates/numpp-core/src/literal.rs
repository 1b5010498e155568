// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Nested literals of arbitrary depth.
//!
//! A [`Nested`] value is either a scalar or a list of nested values. Its
//! shape is read off the first element at every depth and then validated:
//! every list at a given depth must have that length, and scalars may only
//! appear at the innermost depth.
//!
//! Literals deserialize from plain JSON arrays, so `[[1, 2], [3, 4]]` is a
//! valid `Nested<i64>`.

use crate::{ArrayError, Result, Shape};

/// A recursively nested list of scalars.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    /// A single element.
    Scalar(T),
    /// A list of sub-literals, one per position along the current axis.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Deduces the shape of the literal, rejecting irregular nesting.
    ///
    /// # Errors
    /// [`ArrayError::ShapeDeduction`] when two lists at the same depth have
    /// different lengths, [`ArrayError::MixedNesting`] when a scalar and a
    /// list appear at the same depth.
    pub fn shape(&self) -> Result<Shape> {
        let mut dims = Vec::new();
        let mut node = self;
        while let Nested::List(items) = node {
            dims.push(items.len());
            match items.first() {
                Some(first) => node = first,
                None => break,
            }
        }
        self.check_regular(&dims, 0)?;
        Ok(Shape::new(dims))
    }

    fn check_regular(&self, dims: &[usize], depth: usize) -> Result<()> {
        match self {
            Nested::Scalar(_) if depth == dims.len() => Ok(()),
            Nested::Scalar(_) => Err(ArrayError::MixedNesting { depth }),
            Nested::List(_) if depth >= dims.len() => Err(ArrayError::MixedNesting { depth }),
            Nested::List(items) => {
                if items.len() != dims[depth] {
                    return Err(ArrayError::ShapeDeduction {
                        first: dims[depth],
                        second: items.len(),
                    });
                }
                items
                    .iter()
                    .try_for_each(|item| item.check_regular(dims, depth + 1))
            }
        }
    }

    /// Consumes the literal, returning its scalars in row-major order.
    pub fn into_flat(self) -> Vec<T> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<T>) {
        match self {
            Nested::Scalar(value) => out.push(value),
            Nested::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl<T> From<Vec<T>> for Nested<T> {
    fn from(values: Vec<T>) -> Self {
        Nested::List(values.into_iter().map(Nested::Scalar).collect())
    }
}

/// Builds a [`Nested`] literal from bracketed rows.
///
/// ```
/// use numpp_core::{nested, Nested, Shape};
/// let lit: Nested<i32> = nested![[1, 2, 3], [4, 5, 6]];
/// assert_eq!(lit.shape().unwrap(), Shape::new(vec![2, 3]));
/// ```
#[macro_export]
macro_rules! nested {
    ($([$($inner:tt)*]),+ $(,)?) => {
        $crate::Nested::List(vec![$($crate::nested![$($inner)*]),+])
    };
    ($($value:expr),* $(,)?) => {
        $crate::Nested::List(vec![$($crate::Nested::Scalar($value)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested;

    #[test]
    fn test_shape_1d_to_3d() {
        let a: Nested<i32> = nested![1, 2, 3];
        assert_eq!(a.shape().unwrap(), Shape::vector(3));

        let b: Nested<i32> = nested![[1, 2, 3], [4, 5, 6]];
        assert_eq!(b.shape().unwrap(), Shape::matrix(2, 3));

        let c: Nested<i32> = nested![[[1, 2, 3], [4, 5, 6]], [[7, 8, 9], [10, 11, 12]]];
        assert_eq!(c.shape().unwrap(), Shape::new(vec![2, 2, 3]));
    }

    #[test]
    fn test_deep_literal() {
        let mut lit = Nested::Scalar(7u8);
        for _ in 0..9 {
            lit = Nested::List(vec![lit.clone(), lit]);
        }
        let shape = lit.shape().unwrap();
        assert_eq!(shape.ndims(), 9);
        assert_eq!(shape.size(), 512);
    }

    #[test]
    fn test_irregular_rejected() {
        let lit: Nested<i32> = nested![[1, 2, 3], [4, 5]];
        assert_eq!(
            lit.shape(),
            Err(ArrayError::ShapeDeduction { first: 3, second: 2 })
        );
    }

    #[test]
    fn test_mixed_nesting_rejected() {
        let lit = Nested::List(vec![Nested::Scalar(1), Nested::List(vec![Nested::Scalar(2)])]);
        assert_eq!(lit.shape(), Err(ArrayError::MixedNesting { depth: 1 }));

        let lit = Nested::List(vec![Nested::List(vec![Nested::Scalar(1)]), Nested::Scalar(2)]);
        assert_eq!(lit.shape(), Err(ArrayError::MixedNesting { depth: 1 }));
    }

    #[test]
    fn test_empty_inner_lists() {
        let lit: Nested<i32> = Nested::List(vec![Nested::List(vec![]), Nested::List(vec![])]);
        assert_eq!(lit.shape().unwrap(), Shape::new(vec![2, 0]));
        assert!(lit.into_flat().is_empty());
    }

    #[test]
    fn test_into_flat_row_major() {
        let lit: Nested<i32> = nested![[1, 2], [3, 4], [5, 6]];
        assert_eq!(lit.into_flat(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_json() {
        let lit: Nested<i64> = serde_json::from_str("[[1, 2, 3], [4, 5, 6]]").unwrap();
        assert_eq!(lit, nested![[1, 2, 3], [4, 5, 6]]);

        let lit: Nested<f64> = serde_json::from_str("[0.5, -1.5]").unwrap();
        assert_eq!(lit.into_flat(), vec![0.5, -1.5]);
    }

    #[test]
    fn test_from_vec() {
        let lit = Nested::from(vec![1, 2, 3]);
        assert_eq!(lit, nested![1, 2, 3]);
    }
}
