// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # numpp
//!
//! NumPy-style N-dimensional arrays for Rust.
//!
//! This crate wraps [`numpp_core::Storage`] in an [`Array`] with:
//! - operator syntax: `&a + &b` (shapes must match) and `&a * 2`;
//! - comparisons returning `Array<bool>`, with [`Array::any`] / [`Array::all`];
//! - the factories [`full`], [`zeros`], [`eye`] and [`identity`];
//! - `Display` as nested brackets, tunable through [`PrintOptions`];
//! - a TOML-backed [`NumppConfig`].
//!
//! ```
//! use numpp::{nested, range, all, Array};
//!
//! let a = Array::from_nested(nested![[1, 2, 3], [4, 5, 6]]).unwrap();
//! let left = a.view(&[all(), range(0, 1)]).unwrap();
//! assert_eq!(left.to_string(), "[[1, 2],\n [4, 5]]");
//! assert!((&a + &a).unwrap().greater_scalar(1).any());
//! ```

mod array;
mod config;
mod creators;
mod display;
mod error;

pub use array::Array;
pub use config::NumppConfig;
pub use creators::{eye, full, identity, zeros};
pub use display::{Formatted, PrintOptions};
pub use error::ConfigError;

pub use numpp_core::{
    all, nested, range, range_step, slice, ArrayError, AxisSpec, DType, Element, Nested, Range,
    Result, Scalar, Shape, Storage, Strides,
};
