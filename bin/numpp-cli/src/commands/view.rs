// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `numpp view` command: select positions per axis and print the view.

use anyhow::Context;
use numpp::{Array, AxisSpec, Element, NumppConfig};

use super::{banner, indented, parse_array, ElementType};

pub fn execute(
    config: &NumppConfig,
    array: &str,
    specs: &[String],
    dtype: ElementType,
) -> anyhow::Result<()> {
    let specs = parse_specs(specs)?;
    match dtype {
        ElementType::I64 => show(config, parse_array::<i64>("--array", array)?, &specs),
        ElementType::F64 => show(config, parse_array::<f64>("--array", array)?, &specs),
    }
}

fn parse_specs(specs: &[String]) -> anyhow::Result<Vec<AxisSpec>> {
    specs
        .iter()
        .map(|text| {
            text.parse::<AxisSpec>()
                .with_context(|| format!("cannot parse --spec '{text}'"))
        })
        .collect()
}

fn show<T: Element>(
    config: &NumppConfig,
    array: Array<T>,
    specs: &[AxisSpec],
) -> anyhow::Result<()> {
    let view = array.view(specs)?;

    banner("numpp · View");
    let joined: Vec<String> = specs.iter().map(ToString::to_string).collect();
    println!("  Source shape: {}", array.shape());
    println!("  Selection:    ({})", joined.join(", "));
    println!("  View shape:   {}", view.shape());
    println!();
    println!("{}", indented(&view.display_with(&config.print).to_string()));
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_specs() {
        let specs = parse_specs(&[":".into(), "-1".into(), "[0,2]".into(), "0:2".into()]).unwrap();
        assert_eq!(specs.len(), 4);
        assert_eq!(specs[1], AxisSpec::Index(-1));
        assert!(parse_specs(&["x".into()]).is_err());
    }
}
