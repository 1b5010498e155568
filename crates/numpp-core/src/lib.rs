// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # numpp-core
//!
//! Strided N-dimensional storage with aliasing views.
//!
//! This crate provides:
//! - [`Storage`]: an N-dimensional container over a shared buffer, either
//!   owning its elements or aliasing another storage's.
//! - [`Shape`] and [`Strides`]: row-major layout descriptors.
//! - [`Nested`] and the [`nested!`] macro: regular nested literals of any depth.
//! - [`AxisSpec`]: per-axis selections (`Index`, `All`, `Slice`, `Range`)
//!   for building views.
//! - Views, reshape, transpose and diagonal that share the source buffer.
//! - Dot products, elementwise arithmetic, comparisons and `any`/`all`
//!   in [`ops`].
//!
//! # Design Goals
//! - Views never dangle: every storage holds a handle to its buffer.
//! - Every failure is a typed [`ArrayError`]; nothing is partially applied.
//! - Negative indices count from the end of an axis everywhere.

mod buffer;
mod dtype;
mod error;
pub mod index;
mod literal;
pub mod ops;
mod select;
mod shape;
mod storage;
mod view;

pub use buffer::SharedBuffer;
pub use dtype::{DType, Element, Scalar};
pub use error::{ArrayError, Result};
pub use literal::Nested;
pub use select::{all, range, range_step, slice, AxisSpec, Range};
pub use shape::{Shape, Strides};
pub use storage::Storage;
