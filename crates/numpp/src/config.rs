// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Library configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! [print]
//! precision = 3
//! threshold = 1000
//! edge_items = 3
//! ```
//!
//! Every key is optional; missing keys take their [`Default`] values.

use std::path::Path;

use crate::{ConfigError, PrintOptions};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NumppConfig {
    /// How arrays are rendered by `Display` and the CLI.
    pub print: PrintOptions,
}

impl NumppConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = NumppConfig::default();
        assert_eq!(c.print.precision, None);
        assert_eq!(c.print.threshold, 1000);
        assert_eq!(c.print.edge_items, 3);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
[print]
precision = 2
threshold = 10
edge_items = 1
"#;
        let c = NumppConfig::from_toml(toml).unwrap();
        assert_eq!(c.print.precision, Some(2));
        assert_eq!(c.print.threshold, 10);
        assert_eq!(c.print.edge_items, 1);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let c = NumppConfig::from_toml("[print]\nprecision = 4\n").unwrap();
        assert_eq!(c.print.precision, Some(4));
        assert_eq!(c.print.threshold, 1000);

        let empty = NumppConfig::from_toml("").unwrap();
        assert_eq!(empty, NumppConfig::default());
    }

    #[test]
    fn test_bad_toml() {
        let err = NumppConfig::from_toml("[print]\nthreshold = \"many\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("TOML parse error"));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let mut c = NumppConfig::default();
        c.print.precision = Some(5);
        let toml = c.to_toml().unwrap();
        assert!(toml.contains("[print]"));
        let back = NumppConfig::from_toml(&toml).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_missing_file() {
        let err = NumppConfig::from_file(Path::new("/nonexistent/numpp.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/numpp.toml"));
    }
}
