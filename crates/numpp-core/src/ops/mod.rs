// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Storage arithmetic operations.
//!
//! Every operation here reads its inputs through their cell maps, so views,
//! transposes and diagonals are accepted anywhere an owning storage is.
//! Results are freshly allocated owning storages.

mod dot_op;
mod elementwise_op;
mod reduce_op;

pub use dot_op::dot;
pub use elementwise_op::{binary, binary_scalar, compare, compare_scalar, BinaryOp, CompareOp};
pub use reduce_op::{all, any};
