// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Index resolution and flattening.
//!
//! User-facing indices are signed: `-1` names the last position of an axis.
//! [`normalize`] performs the wraparound only, [`resolve`] additionally
//! rejects positions that fall outside the axis. Multi-indices are
//! flattened into buffer offsets with the owner's [`Strides`].

use crate::{ArrayError, Result, Shape, Strides};

/// Wraps a negative index around `extent`; non-negative indices pass through.
///
/// No bounds check is performed, so the result may still be negative or
/// beyond the axis.
pub fn normalize(index: isize, extent: usize) -> isize {
    if index < 0 {
        extent as isize + index
    } else {
        index
    }
}

/// Normalizes `index` against `extent` and checks it lies in `0..extent`.
pub fn resolve(index: isize, extent: usize, axis: usize) -> Result<usize> {
    let position = normalize(index, extent);
    if position < 0 || position as usize >= extent {
        return Err(ArrayError::IndexOutOfBounds {
            index,
            extent,
            axis,
        });
    }
    Ok(position as usize)
}

/// Flattens a signed multi-index into a buffer offset.
///
/// Every index is resolved against its own axis extent before being
/// multiplied by the matching stride.
pub fn flat_offset(indices: &[isize], shape: &Shape, strides: &Strides) -> Result<usize> {
    if indices.len() != shape.ndims() {
        return Err(ArrayError::WrongIndexCount {
            expected: shape.ndims(),
            received: indices.len(),
        });
    }
    let mut offset = 0;
    for (axis, &index) in indices.iter().enumerate() {
        offset += strides[axis] * resolve(index, shape[axis], axis)?;
    }
    Ok(offset)
}

/// Flattens an already canonical multi-index into a buffer offset.
///
/// Callers guarantee one in-bounds position per axis.
pub fn flat_offset_canonical(positions: &[usize], strides: &Strides) -> usize {
    positions
        .iter()
        .zip(strides.iter())
        .map(|(position, stride)| position * stride)
        .sum()
}
