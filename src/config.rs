//! Configuration file support for cmddiff
//!
//! Supports `.cmddiffrc.toml`, `cmddiff.toml` and `.cmddiffrc` configuration files.
//!
//! Example configuration:
//! ```toml
//! # Where the inventories live, and how they are named
//! data_dir = "inventories"
//! input_pattern = "command_data_{source}.tsv"
//!
//! output = "comparison.csv"
//! scheme = "semver"
//! product = "macOS"
//! ```

use crate::inventory::SOURCE_PLACEHOLDER;
use crate::version::Scheme;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Maximum size for config files (1 MB) to prevent DoS
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Configuration loaded from .cmddiffrc.toml or cmddiff.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CmddiffConfig {
    /// Output file for the report
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Directory containing the inventory files
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Inventory file name pattern, must contain `{source}`
    #[serde(default)]
    pub input_pattern: Option<String>,

    /// Version ordering used for Upgraded/Downgraded
    #[serde(default)]
    pub scheme: Option<Scheme>,

    /// Product name shown in the column headers
    #[serde(default)]
    pub product: Option<String>,
}

impl CmddiffConfig {
    /// Load configuration by searching for config files in the given directory and parents
    pub fn discover(start_dir: &Path) -> Option<(Self, PathBuf)> {
        let config_names = [".cmddiffrc.toml", "cmddiff.toml", ".cmddiffrc"];

        let mut current = Some(start_dir);
        while let Some(dir) = current {
            for name in &config_names {
                let config_path = dir.join(name);
                if config_path.exists()
                    && let Some(config) = Self::load_from_path(&config_path)
                {
                    return Some((config, config_path));
                }
            }
            current = dir.parent();
        }

        None
    }

    /// Load configuration from a specific file path (silent failure for auto-discovery)
    pub fn load_from_path(path: &Path) -> Option<Self> {
        Self::load_from_path_with_error(path).ok()
    }

    /// Load configuration from a specific file path with detailed error messages
    pub fn load_from_path_with_error(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Err(format!("Config file not found: {}", path.display()));
        }

        match std::fs::metadata(path) {
            Ok(metadata) => {
                if metadata.len() > MAX_CONFIG_FILE_SIZE {
                    return Err(format!(
                        "Config file too large: {} bytes (max {} MB).",
                        metadata.len(),
                        MAX_CONFIG_FILE_SIZE / 1024 / 1024
                    ));
                }
            }
            Err(e) => {
                return Err(format!(
                    "Cannot read config file metadata: {}. Check file permissions.",
                    e
                ));
            }
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                format!(
                    "Permission denied reading config file: {}. Check file permissions.",
                    path.display()
                )
            } else {
                format!("Failed to read config file {}: {}", path.display(), e)
            }
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| format!("Invalid TOML in config file {}:\n  {}", path.display(), e))?;

        config
            .validate()
            .map_err(|e| format!("Invalid config file {}: {}", path.display(), e))?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(pattern) = &self.input_pattern
            && !pattern.contains(SOURCE_PLACEHOLDER)
        {
            return Err(format!(
                "input_pattern '{}' must contain the {} placeholder",
                pattern, SOURCE_PLACEHOLDER
            ));
        }
        Ok(())
    }

    /// Check if any configuration is present
    pub fn has_config(&self) -> bool {
        *self != Self::default()
    }
}
