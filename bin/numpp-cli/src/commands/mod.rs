// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and the helpers they share.

pub mod demo;
pub mod dot;
pub mod inspect;
pub mod transpose;
pub mod view;

use std::path::Path;

use anyhow::Context;
use numpp::{Array, Element, Nested, NumppConfig};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

/// Element type used to parse literals given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ElementType {
    I64,
    F64,
}

/// Installs the global subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the configuration file if one was given, defaults otherwise.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<NumppConfig> {
    match path {
        Some(path) => Ok(NumppConfig::from_file(path)?),
        None => Ok(NumppConfig::default()),
    }
}

/// Parses a nested JSON literal into an array.
pub fn parse_array<T: Element + DeserializeOwned>(name: &str, text: &str) -> anyhow::Result<Array<T>> {
    let literal: Nested<T> = serde_json::from_str(text)
        .with_context(|| format!("{name} is not a nested JSON array of numbers"))?;
    let array = Array::try_from(literal).with_context(|| format!("{name} is not a regular array"))?;
    tracing::info!(name, shape = %array.shape(), dtype = %array.dtype(), "parsed array");
    Ok(array)
}

/// Prints the boxed title used at the top of every command.
pub fn banner(title: &str) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║{title:^54}║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
}

/// Indents every line of a rendered array.
pub fn indented(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
