// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise arithmetic and comparison.
//!
//! Array-array forms require equal shapes (rank and every extent, not just
//! the element count) and walk both operands in linear order. Scalar forms
//! combine every element with one value. Results are always owning.

use std::fmt;

use crate::{ArrayError, Element, Result, Scalar, Storage};

/// Arithmetic operators applied position by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    /// Integer division by zero panics like the primitive operator.
    Div,
    Rem,
}

impl BinaryOp {
    fn apply<T: Element>(self, a: T, b: T) -> T {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Rem => a % b,
        }
    }

    fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
            BinaryOp::Rem => "rem",
        }
    }
}

/// Comparison operators producing boolean storages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CompareOp {
    fn apply<T: Element>(self, a: T, b: T) -> bool {
        match self {
            CompareOp::Eq => a == b,
            CompareOp::Gt => a > b,
            CompareOp::Ge => a >= b,
            CompareOp::Lt => a < b,
            CompareOp::Le => a <= b,
        }
    }

    fn name(self) -> &'static str {
        match self {
            CompareOp::Eq => "equal",
            CompareOp::Gt => "greater",
            CompareOp::Ge => "greater_equal",
            CompareOp::Lt => "less",
            CompareOp::Le => "less_equal",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn check_same_shape<A: Scalar, B: Scalar>(
    op: &'static str,
    lhs: &Storage<A>,
    rhs: &Storage<B>,
) -> Result<()> {
    if lhs.shape() != rhs.shape() {
        return Err(ArrayError::DimensionsMismatch {
            op,
            lhs: lhs.shape().clone(),
            rhs: rhs.shape().clone(),
        });
    }
    Ok(())
}

fn zip_with<T: Element, U: Scalar>(
    lhs: &Storage<T>,
    rhs: &Storage<T>,
    f: impl Fn(T, T) -> U,
) -> Storage<U> {
    let values = lhs.iter().zip(rhs.iter()).map(|(a, b)| f(a, b)).collect();
    Storage::from_shaped(values, lhs.shape().clone())
}

fn map_with<T: Element, U: Scalar>(lhs: &Storage<T>, f: impl Fn(T) -> U) -> Storage<U> {
    Storage::from_shaped(lhs.iter().map(f).collect(), lhs.shape().clone())
}

/// Combines two storages of equal shape with `op`.
///
/// # Errors
/// [`ArrayError::DimensionsMismatch`] when the shapes differ.
pub fn binary<T: Element>(op: BinaryOp, lhs: &Storage<T>, rhs: &Storage<T>) -> Result<Storage<T>> {
    check_same_shape(op.name(), lhs, rhs)?;
    Ok(zip_with(lhs, rhs, |a, b| op.apply(a, b)))
}

/// Combines every element of `lhs` with `rhs`.
pub fn binary_scalar<T: Element>(op: BinaryOp, lhs: &Storage<T>, rhs: T) -> Storage<T> {
    map_with(lhs, |a| op.apply(a, rhs))
}

/// Compares two storages of equal shape.
///
/// # Errors
/// [`ArrayError::DimensionsMismatch`] when the shapes differ.
pub fn compare<T: Element>(
    op: CompareOp,
    lhs: &Storage<T>,
    rhs: &Storage<T>,
) -> Result<Storage<bool>> {
    check_same_shape(op.name(), lhs, rhs)?;
    Ok(zip_with(lhs, rhs, |a, b| op.apply(a, b)))
}

/// Compares every element of `lhs` with `rhs`.
pub fn compare_scalar<T: Element>(op: CompareOp, lhs: &Storage<T>, rhs: T) -> Storage<bool> {
    map_with(lhs, |a| op.apply(a, rhs))
}
