// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `numpp dot` command: dot product of two literals.

use numpp::{Array, Element, NumppConfig};

use super::{banner, indented, parse_array, ElementType};

pub fn execute(config: &NumppConfig, lhs: &str, rhs: &str, dtype: ElementType) -> anyhow::Result<()> {
    match dtype {
        ElementType::I64 => show(
            config,
            parse_array::<i64>("--lhs", lhs)?,
            parse_array::<i64>("--rhs", rhs)?,
        ),
        ElementType::F64 => show(
            config,
            parse_array::<f64>("--lhs", lhs)?,
            parse_array::<f64>("--rhs", rhs)?,
        ),
    }
}

fn show<T: Element>(
    config: &NumppConfig,
    lhs: Array<T>,
    rhs: Array<T>,
) -> anyhow::Result<()> {
    let product = lhs.dot(&rhs)?;
    banner("numpp · Dot Product");
    println!("  {} · {} -> {}", lhs.shape(), rhs.shape(), product.shape());
    println!();
    println!("{}", indented(&product.display_with(&config.print).to_string()));
    println!();
    Ok(())
}
