// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # numpp
//!
//! Command-line interface for numpp arrays.
//!
//! ## Usage
//! ```bash
//! # Walk through creation, views, arithmetic and dot products
//! numpp demo
//!
//! # Print shape, strides and contents of a literal
//! numpp inspect --array '[[1, 2, 3], [4, 5, 6]]'
//!
//! # Select the first and last column
//! numpp view --array '[[1, 2, 3], [4, 5, 6]]' --spec : --spec '[0,-1]'
//!
//! # Matrix product of floats
//! numpp dot --lhs '[[1, 2], [3, 4]]' --rhs '[[0.5], [1]]' --dtype f64
//! ```

mod commands;

use clap::{Parser, Subcommand};
use commands::ElementType;

#[derive(Parser)]
#[command(
    name = "numpp",
    about = "NumPy-style N-dimensional arrays with aliasing views",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file with a `[print]` table.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the guided walkthrough of the array API.
    Demo,

    /// Print shape, strides, size and contents of an array literal.
    Inspect {
        /// Nested JSON array, e.g. "[[1, 2], [3, 4]]".
        #[arg(short, long)]
        array: String,

        /// Element type used to parse the literal.
        #[arg(short, long, value_enum, default_value_t = ElementType::I64)]
        dtype: ElementType,
    },

    /// Print a view selected with one specifier per axis.
    View {
        /// Nested JSON array.
        #[arg(short, long)]
        array: String,

        /// Axis specifier, one per axis in order (repeat the flag):
        /// ":" (all), "-1" (index), "[0,-1]" (slice), "0:2" or "2:0:-1"
        /// (inclusive range).
        #[arg(
            short,
            long,
            action = clap::ArgAction::Append,
            required = true,
            allow_hyphen_values = true
        )]
        spec: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = ElementType::I64)]
        dtype: ElementType,
    },

    /// Print the transpose of an array literal.
    Transpose {
        #[arg(short, long)]
        array: String,

        #[arg(short, long, value_enum, default_value_t = ElementType::I64)]
        dtype: ElementType,
    },

    /// Print the dot product of two rank-1 or rank-2 literals.
    Dot {
        /// Left operand as a nested JSON array.
        #[arg(long)]
        lhs: String,

        /// Right operand as a nested JSON array.
        #[arg(long)]
        rhs: String,

        #[arg(short, long, value_enum, default_value_t = ElementType::I64)]
        dtype: ElementType,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Demo => commands::demo::execute(&config),
        Commands::Inspect { array, dtype } => commands::inspect::execute(&config, &array, dtype),
        Commands::View { array, spec, dtype } => {
            commands::view::execute(&config, &array, &spec, dtype)
        }
        Commands::Transpose { array, dtype } => {
            commands::transpose::execute(&config, &array, dtype)
        }
        Commands::Dot { lhs, rhs, dtype } => commands::dot::execute(&config, &lhs, &rhs, dtype),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_view(args: &[&str]) -> (Vec<String>, ElementType, u8) {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::View { spec, dtype, .. } => (spec, dtype, cli.verbose),
            _ => panic!("expected the view command"),
        }
    }

    #[test]
    fn test_view_flags_after_specs() {
        let (spec, dtype, verbose) = parse_view(&[
            "numpp", "view", "--array", "[[1,2,3],[4,5,6]]", "--spec", ":", "--spec", "0",
            "--dtype", "f64", "-v",
        ]);
        assert_eq!(spec, vec![":", "0"]);
        assert_eq!(dtype, ElementType::F64);
        assert_eq!(verbose, 1);
    }

    #[test]
    fn test_view_negative_specs() {
        let (spec, dtype, _) = parse_view(&[
            "numpp", "view", "-a", "[[1,2],[3,4]]", "-s", "-1", "-s", "-2:0:-1", "-d", "i64",
        ]);
        assert_eq!(spec, vec!["-1", "-2:0:-1"]);
        assert_eq!(dtype, ElementType::I64);
    }

    #[test]
    fn test_view_requires_spec() {
        assert!(Cli::try_parse_from(["numpp", "view", "--array", "[1]"]).is_err());
    }
}
