//! Configuration file support for a split run.

use crate::error::{Result, SplitError};
use crate::fracture::SplitOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for a split run: where the input comes from,
/// where outputs go, and the split options themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Input mesh file path (JSON mesh format).
    pub input_file: String,

    /// Output directory for results.
    pub output_dir: String,

    /// Output volumetric mesh filename, relative to `output_dir`. Defaults
    /// to `volumetric.vtu` when absent.
    pub volumetric_output: Option<String>,

    /// Output fracture surface mesh filename, relative to `output_dir`.
    /// Defaults to `fracture_surface.vtu` when absent.
    pub fracture_output: Option<String>,

    pub options: SplitOptions,
}

impl SplitConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SplitError::ConfigError(format!("failed to read config file: {}", e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            SplitError::ConfigError(format!("failed to parse config file: {}", e))
        })
    }

    /// Save configuration to a JSON file.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            SplitError::ConfigError(format!("failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| {
            SplitError::ConfigError(format!("failed to write config file: {}", e))
        })?;

        Ok(())
    }

    pub fn volumetric_output_path(&self) -> String {
        self.volumetric_output
            .clone()
            .unwrap_or_else(|| "volumetric.vtu".to_string())
    }

    pub fn fracture_output_path(&self) -> String {
        self.fracture_output
            .clone()
            .unwrap_or_else(|| "fracture_surface.vtu".to_string())
    }
}
