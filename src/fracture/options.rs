//! Configuration surface for a split run: a `serde`-(de)serializable struct
//! with `#[serde(default)]` fields for options that have a sensible default,
//! validated up front so failures point at configuration rather than at an
//! assertion deep in the pipeline.

use crate::error::{Result, SplitError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn default_policy() -> String {
    "cell-field".to_string()
}

fn default_field_type() -> String {
    "cell".to_string()
}

/// Options controlling a single `split()` invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOptions {
    /// Name of the per-cell integer attribute driving fracture detection.
    pub field: String,

    /// The admitted set of field values; a face is a fracture face only if
    /// both its cells' values lie in this set and differ.
    pub field_values: HashSet<i64>,

    /// Reserved selector between detection policies. Only `"cell-field"`
    /// (the cell-attribute-driven policy described above) is implemented;
    /// any other value is rejected rather than guessed at.
    #[serde(default = "default_policy")]
    pub policy: String,

    /// Reserved selector for the scope of `field`. Only `"cell"` is
    /// implemented; `"point"`/`"face"` are rejected.
    #[serde(default = "default_field_type")]
    pub field_type: String,

    /// Reserved. Accepted and stored but never consulted by the algorithm;
    /// setting it logs a warning at validation time rather than silently
    /// doing nothing.
    #[serde(default)]
    pub split_on_domain_boundary: bool,

    /// Ambient-only: enables the optional progress bar side channel over
    /// the pipeline's per-cell scans. Never affects the result.
    #[serde(default)]
    pub show_progress: bool,
}

impl SplitOptions {
    pub fn new(field: impl Into<String>, field_values: HashSet<i64>) -> Self {
        Self {
            field: field.into(),
            field_values,
            policy: default_policy(),
            field_type: default_field_type(),
            split_on_domain_boundary: false,
            show_progress: false,
        }
    }

    /// Validate the configuration before running any pipeline stage.
    pub fn validate(&self) -> Result<()> {
        if self.policy != "cell-field" {
            return Err(SplitError::Unimplemented {
                option: "policy".to_string(),
                value: self.policy.clone(),
            });
        }
        if self.field_type != "cell" {
            return Err(SplitError::Unimplemented {
                option: "field_type".to_string(),
                value: self.field_type.clone(),
            });
        }
        if self.split_on_domain_boundary {
            log::warn!(
                "split_on_domain_boundary was set but is not consulted by the split algorithm"
            );
        }
        Ok(())
    }
}
