//! Split summary report, written alongside the output meshes: a small JSON
//! document carrying run parameters and summary counts, timestamped via
//! `chrono`.

use crate::error::{Result, SplitError};
use crate::fracture::types::{FractureSurfaceMesh, SplitPlan};
use crate::fracture::SplitOptions;
use crate::mesh::Mesh;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitReport {
    pub timestamp: String,
    pub field: String,
    pub field_values: Vec<i64>,
    pub input_points: usize,
    pub input_cells: usize,
    pub output_points: usize,
    pub added_points: usize,
    pub fracture_face_count: usize,
    pub fracture_surface_point_count: usize,
}

impl SplitReport {
    pub fn new(
        options: &SplitOptions,
        input_mesh: &Mesh,
        plan: &SplitPlan,
        fracture_face_count: usize,
        surface: &FractureSurfaceMesh,
    ) -> Self {
        let mut values: Vec<i64> = options.field_values.iter().copied().collect();
        values.sort_unstable();
        Self {
            timestamp: Utc::now().to_rfc3339(),
            field: options.field.clone(),
            field_values: values,
            input_points: input_mesh.num_points(),
            input_cells: input_mesh.num_cells(),
            output_points: plan.new_point_count,
            added_points: plan.new_point_count - input_mesh.num_points(),
            fracture_face_count,
            fracture_surface_point_count: surface.num_points(),
        }
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(60));
        println!("FRACTURE SPLIT SUMMARY");
        println!("{}", "=".repeat(60));
        println!();
        println!("  Field:              {}", self.field);
        println!("  Admitted values:    {:?}", self.field_values);
        println!();
        println!("  Input points:       {}", self.input_points);
        println!("  Input cells:        {}", self.input_cells);
        println!("  Output points:      {}", self.output_points);
        println!("  Added points:       {}", self.added_points);
        println!();
        println!("  Fracture faces:     {}", self.fracture_face_count);
        println!("  Fracture surface points: {}", self.fracture_surface_point_count);
        println!();
        println!("{}", "=".repeat(60));
    }

    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| SplitError::ConfigError(format!("failed to serialize report: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
