// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `numpp inspect` command: shape, strides, size and contents of a literal.

use numpp::{Array, Element, NumppConfig};

use super::{banner, indented, parse_array, ElementType};

pub fn execute(config: &NumppConfig, array: &str, dtype: ElementType) -> anyhow::Result<()> {
    match dtype {
        ElementType::I64 => inspect(config, parse_array::<i64>("--array", array)?),
        ElementType::F64 => inspect(config, parse_array::<f64>("--array", array)?),
    }
}

fn inspect<T: Element>(config: &NumppConfig, array: Array<T>) -> anyhow::Result<()> {
    banner("numpp · Array Inspector");

    println!("  DType:      {}", array.dtype());
    println!("  Dimensions: {}", array.ndims());
    println!("  Shape:      {}", array.shape());
    println!("  Strides:    {:?}", array.strides().as_slice());
    println!("  Size:       {}", array.size());
    println!(
        "  Bytes:      {}",
        array.size() * array.dtype().size_bytes()
    );
    println!();
    println!("{}", indented(&array.display_with(&config.print).to_string()));
    println!();
    Ok(())
}
