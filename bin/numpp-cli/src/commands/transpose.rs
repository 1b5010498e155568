// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `numpp transpose` command.

use numpp::{Array, Element, NumppConfig};

use super::{banner, indented, parse_array, ElementType};

pub fn execute(config: &NumppConfig, array: &str, dtype: ElementType) -> anyhow::Result<()> {
    match dtype {
        ElementType::I64 => show(config, parse_array::<i64>("--array", array)?),
        ElementType::F64 => show(config, parse_array::<f64>("--array", array)?),
    }
}

fn show<T: Element>(config: &NumppConfig, array: Array<T>) -> anyhow::Result<()> {
    let t = array.transpose();
    banner("numpp · Transpose");
    println!("  {} -> {}", array.shape(), t.shape());
    println!();
    println!("{}", indented(&t.display_with(&config.print).to_string()));
    println!();
    Ok(())
}
