// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for storage, view and arithmetic operations.

use crate::Shape;

/// Errors that can occur while building, indexing or combining storages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// A nested literal has sub-lists of different lengths at the same depth.
    #[error("cannot deduce shape: different dimensions {first} and {second}")]
    ShapeDeduction { first: usize, second: usize },

    /// A nested literal mixes scalars and lists at the same depth.
    #[error("cannot deduce shape: scalars and lists mixed at depth {depth}")]
    MixedNesting { depth: usize },

    /// A multi-index access supplied the wrong number of indices.
    #[error("wrong number of indices: passed {received}, expected {expected}")]
    WrongIndexCount { expected: usize, received: usize },

    /// An index falls outside its axis after negative wraparound.
    #[error("index {index} is out of bounds for axis {axis} with extent {extent}")]
    IndexOutOfBounds {
        index: isize,
        extent: usize,
        axis: usize,
    },

    /// Two shapes are incompatible for the requested operation.
    #[error("dimensions mismatch in {op}: {lhs} is not compatible with {rhs}")]
    DimensionsMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// An operation received a different number of axes than it needs.
    #[error("dimensions mismatch: {expected} dimensions vs {received} dimensions")]
    RankMismatch { expected: usize, received: usize },

    /// A range specifier has a zero step or a step pointing away from its end.
    #[error("range({start}, {end}, {step}) is invalid")]
    InvalidRange { start: isize, end: isize, step: isize },

    /// A flat buffer does not hold exactly as many elements as the shape needs.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// A textual axis specifier could not be parsed.
    #[error("invalid axis specifier '{0}'")]
    InvalidSpec(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArrayError>;
