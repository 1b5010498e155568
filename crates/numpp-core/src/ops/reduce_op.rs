// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Boolean reductions over linear order.

use crate::{Scalar, Storage};

/// Returns `true` if any element is truthy. Stops at the first match.
///
/// Numeric elements are truthy when nonzero. An empty storage yields `false`.
pub fn any<T: Scalar>(storage: &Storage<T>) -> bool {
    storage.iter().any(|value| value.is_truthy())
}

/// Returns `true` if every element is truthy. Stops at the first miss.
///
/// An empty storage yields `true`.
pub fn all<T: Scalar>(storage: &Storage<T>) -> bool {
    storage.iter().all(|value| value.is_truthy())
}
