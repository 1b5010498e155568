// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-axis selection specifiers.
//!
//! Each [`AxisSpec`] expands, for one axis of a storage, into the explicit
//! ordered list of positions a view keeps along that axis:
//!
//! | Specifier          | Positions                                   |
//! |--------------------|---------------------------------------------|
//! | `Index(i)`         | `[i]` (the axis keeps length 1)             |
//! | `All`              | `[0, 1, ..., extent - 1]`                   |
//! | `Slice(list)`      | `list`, negatives resolved when flattened   |
//! | `Range(s, e, st)`  | `s, s + st, ...` up to and including `e`    |
//!
//! Specifiers also parse from text: `:` is `All`, `-1` an index,
//! `[0,-1]` a slice and `a:b` or `a:b:step` an inclusive range.

use std::fmt;
use std::str::FromStr;

use crate::index::normalize;
use crate::{ArrayError, Result};

/// An inclusive, stepped range along one axis.
///
/// Both endpoints accept negative indices, which wrap around the axis
/// extent before the range is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: isize,
    pub end: isize,
    pub step: isize,
}

impl Range {
    /// Creates a range with step 1.
    pub fn new(start: isize, end: isize) -> Self {
        Self {
            start,
            end,
            step: 1,
        }
    }

    /// Creates a range with an explicit step.
    pub fn with_step(start: isize, end: isize, step: isize) -> Self {
        Self { start, end, step }
    }

    /// Expands the range into canonical positions along an axis.
    ///
    /// # Errors
    /// [`ArrayError::InvalidRange`] for a zero step or a step that points
    /// away from `end`; [`ArrayError::IndexOutOfBounds`] when a normalized
    /// endpoint falls outside the axis.
    pub fn positions(&self, extent: usize, axis: usize) -> Result<Vec<isize>> {
        let start = normalize(self.start, extent);
        let end = normalize(self.end, extent);
        let step = self.step;

        if step == 0 || (step > 0 && end < start) || (step < 0 && end > start) {
            return Err(ArrayError::InvalidRange {
                start: self.start,
                end: self.end,
                step,
            });
        }
        for (raw, position) in [(self.start, start), (self.end, end)] {
            if position < 0 || position as usize >= extent {
                return Err(ArrayError::IndexOutOfBounds {
                    index: raw,
                    extent,
                    axis,
                });
            }
        }

        let count = ((end - start) / step) as usize + 1;
        Ok((0..count).map(|k| start + k as isize * step).collect())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.step == 1 {
            write!(f, "{}:{}", self.start, self.end)
        } else {
            write!(f, "{}:{}:{}", self.start, self.end, self.step)
        }
    }
}

/// Selection along a single axis of a view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AxisSpec {
    /// A single position; the axis keeps length 1.
    Index(isize),
    /// Every position along the axis.
    All,
    /// Explicit positions, in the given order.
    Slice(Vec<isize>),
    /// An inclusive stepped range.
    Range(Range),
}

impl AxisSpec {
    /// Expands the specifier into positions along an axis of `extent`.
    ///
    /// `Index` and `Slice` positions are returned verbatim; they are
    /// resolved (and bounds-checked) when the view is flattened.
    pub fn positions(&self, extent: usize, axis: usize) -> Result<Vec<isize>> {
        let positions = match self {
            AxisSpec::Index(index) => vec![*index],
            AxisSpec::All => (0..extent as isize).collect(),
            AxisSpec::Slice(list) => list.clone(),
            AxisSpec::Range(range) => range.positions(extent, axis)?,
        };
        tracing::trace!(axis, extent, spec = %self, count = positions.len(), "expanded axis spec");
        Ok(positions)
    }
}

/// Selects every position along an axis.
pub fn all() -> AxisSpec {
    AxisSpec::All
}

/// Selects the given positions along an axis.
pub fn slice<I: IntoIterator<Item = isize>>(positions: I) -> AxisSpec {
    AxisSpec::Slice(positions.into_iter().collect())
}

/// Selects `start..=end` with step 1.
pub fn range(start: isize, end: isize) -> AxisSpec {
    AxisSpec::Range(Range::new(start, end))
}

/// Selects `start..=end` with an explicit step.
pub fn range_step(start: isize, end: isize, step: isize) -> AxisSpec {
    AxisSpec::Range(Range::with_step(start, end, step))
}

impl From<isize> for AxisSpec {
    fn from(index: isize) -> Self {
        AxisSpec::Index(index)
    }
}

impl From<i32> for AxisSpec {
    fn from(index: i32) -> Self {
        AxisSpec::Index(index as isize)
    }
}

impl From<Range> for AxisSpec {
    fn from(range: Range) -> Self {
        AxisSpec::Range(range)
    }
}

impl fmt::Display for AxisSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisSpec::Index(index) => write!(f, "{index}"),
            AxisSpec::All => write!(f, ":"),
            AxisSpec::Slice(list) => {
                write!(f, "[")?;
                for (i, position) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{position}")?;
                }
                write!(f, "]")
            }
            AxisSpec::Range(range) => write!(f, "{range}"),
        }
    }
}

impl FromStr for AxisSpec {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = || ArrayError::InvalidSpec(s.to_string());
        let number = |part: &str| part.trim().parse::<isize>().map_err(|_| invalid());

        if text == ":" {
            return Ok(AxisSpec::All);
        }
        if let Some(body) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            if body.trim().is_empty() {
                return Ok(AxisSpec::Slice(Vec::new()));
            }
            let list = body
                .split(',')
                .map(|part| number(part))
                .collect::<Result<Vec<_>>>()?;
            return Ok(AxisSpec::Slice(list));
        }
        let parts: Vec<&str> = text.split(':').collect();
        match parts.as_slice() {
            [index] => Ok(AxisSpec::Index(number(*index)?)),
            [start, end] => Ok(range(number(*start)?, number(*end)?)),
            [start, end, step] => Ok(range_step(
                number(*start)?,
                number(*end)?,
                number(*step)?,
            )),
            _ => Err(invalid()),
        }
    }
}
