// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Text rendering of storages as nested brackets.
//!
//! ```text
//! [[[1, 2],
//!   [3, 4]],
//!
//!  [[5, 6],
//!   [7, 8]]]
//! ```
//!
//! Elements are right-aligned to a common width. Storages with more than
//! `threshold` elements are summarized: every axis longer than
//! `2 * edge_items` shows only its first and last `edge_items` positions.

use std::fmt;

use numpp_core::index::flat_offset_canonical;
use numpp_core::{Scalar, Storage};

/// Rendering options, usually loaded as the `[print]` table of a
/// [`crate::NumppConfig`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    /// Digits after the decimal point for floating point elements.
    /// `None` prints the shortest exact representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
    /// Element count above which output is summarized.
    pub threshold: usize,
    /// Positions kept at each end of a summarized axis.
    pub edge_items: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            precision: None,
            threshold: 1000,
            edge_items: 3,
        }
    }
}

/// A storage paired with the options used to print it.
pub struct Formatted<'a, T> {
    storage: &'a Storage<T>,
    options: &'a PrintOptions,
}

impl<'a, T: Scalar> Formatted<'a, T> {
    pub fn new(storage: &'a Storage<T>, options: &'a PrintOptions) -> Self {
        Self { storage, options }
    }

    fn summarize(&self) -> bool {
        self.storage.size() > self.options.threshold
    }

    /// Positions printed along an axis; `None` marks the elision.
    fn shown(&self, extent: usize) -> Vec<Option<usize>> {
        let edge = self.options.edge_items;
        if self.summarize() && extent > 2 * edge {
            (0..edge)
                .map(Some)
                .chain(std::iter::once(None))
                .chain((extent - edge..extent).map(Some))
                .collect()
        } else {
            (0..extent).map(Some).collect()
        }
    }

    fn element_at(&self, idx: &[usize]) -> Result<String, fmt::Error> {
        let linear = flat_offset_canonical(idx, self.storage.strides());
        let value = self.storage.get(linear as isize).map_err(|_| fmt::Error)?;
        Ok(match self.options.precision {
            Some(prec) if T::DTYPE.is_float() => format!("{value:.prec$}"),
            _ => value.to_string(),
        })
    }

    fn max_width(&self, axis: usize, idx: &mut Vec<usize>, width: &mut usize) -> fmt::Result {
        if axis == self.storage.ndims() {
            *width = (*width).max(self.element_at(idx)?.len());
            return Ok(());
        }
        for position in self.shown(self.storage.shape()[axis]).into_iter().flatten() {
            idx.push(position);
            self.max_width(axis + 1, idx, width)?;
            idx.pop();
        }
        Ok(())
    }

    fn write_axis(
        &self,
        f: &mut fmt::Formatter<'_>,
        axis: usize,
        idx: &mut Vec<usize>,
        width: usize,
    ) -> fmt::Result {
        if axis == self.storage.ndims() {
            return write!(f, "{:>width$}", self.element_at(idx)?);
        }
        f.write_str("[")?;
        for (k, position) in self.shown(self.storage.shape()[axis]).into_iter().enumerate() {
            if k > 0 {
                self.write_separator(f, axis)?;
            }
            match position {
                Some(position) => {
                    idx.push(position);
                    self.write_axis(f, axis + 1, idx, width)?;
                    idx.pop();
                }
                None => f.write_str("...")?,
            }
        }
        f.write_str("]")
    }

    fn write_separator(&self, f: &mut fmt::Formatter<'_>, axis: usize) -> fmt::Result {
        let ndims = self.storage.ndims();
        if axis + 1 == ndims {
            return f.write_str(", ");
        }
        f.write_str(",")?;
        for _ in 0..ndims - axis - 1 {
            f.write_str("\n")?;
        }
        write!(f, "{:indent$}", "", indent = axis + 1)
    }
}

impl<T: Scalar> fmt::Display for Formatted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.storage.ndims() == 0 {
            return f.write_str("[]");
        }
        let mut width = 0;
        self.max_width(0, &mut Vec::new(), &mut width)?;
        self.write_axis(f, 0, &mut Vec::new(), width)
    }
}
