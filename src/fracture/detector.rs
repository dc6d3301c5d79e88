//! FractureDetector: finds the faces that separate two admitted-but-distinct
//! attribute values, i.e. the fracture.

use crate::error::{Result, SplitError};
use crate::fracture::types::{FaceKey, FractureFace};
use crate::mesh::{cell_faces, Mesh};
use std::collections::{HashMap, HashSet};

/// Below this many cells, the sequential `cell_faces` scan is as fast as
/// spinning up a rayon pool; above it, splitting the scan across threads
/// pays for itself. Each cell's faces are independent of every other's, so
/// this scan is embarrassingly parallel.
const PARALLEL_THRESHOLD: usize = 10_000;

#[cfg(feature = "parallel")]
fn compute_faces_by_cell(mesh: &Mesh) -> Vec<Vec<Vec<usize>>> {
    use rayon::prelude::*;

    if mesh.cells.len() >= PARALLEL_THRESHOLD {
        mesh.cells.par_iter().map(cell_faces).collect()
    } else {
        mesh.cells.iter().map(cell_faces).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn compute_faces_by_cell(mesh: &Mesh) -> Vec<Vec<Vec<usize>>> {
    mesh.cells.iter().map(cell_faces).collect()
}

/// Build the fracture face set for `mesh`, using the per-cell integer
/// attribute named `field` and the admitted value set `values`.
///
/// A face belongs to the fracture iff it is interior (shared by exactly two
/// cells), both cells' field values lie in `values`, and those two values
/// differ. Cells whose field value is outside `values` never contribute a
/// fracture face, even when adjacent to a qualifying cell.
pub fn detect_fracture_faces(
    mesh: &Mesh,
    field: &str,
    values: &HashSet<i64>,
) -> Result<Vec<FractureFace>> {
    let field_values = mesh.cell_field_i64(field)?;
    if field_values.len() != mesh.num_cells() {
        return Err(SplitError::InternalInvariant(format!(
            "field '{}' has {} entries but mesh has {} cells",
            field,
            field_values.len(),
            mesh.num_cells()
        )));
    }

    let faces_by_cell = compute_faces_by_cell(mesh);

    // Global face index: face vertex-set -> every (cell, local-face-index)
    // touching it, in the order discovered (ascending cell id, local face
    // order). Built from the precomputed per-cell face lists so ordering
    // stays deterministic regardless of how those lists were computed.
    let mut index: HashMap<FaceKey, Vec<(usize, usize)>> = HashMap::new();
    for (cell_idx, faces) in faces_by_cell.iter().enumerate() {
        for (local_idx, face) in faces.iter().enumerate() {
            let key = FaceKey::from_points(face);
            index.entry(key).or_default().push((cell_idx, local_idx));
        }
    }

    let mut seen_keys: HashSet<FaceKey> = HashSet::new();
    let mut result = Vec::new();

    for (cell_idx, cell) in mesh.cells.iter().enumerate() {
        let this_value = field_values[cell_idx];
        if !values.contains(&this_value) {
            continue;
        }

        for (local_idx, face) in faces_by_cell[cell_idx].iter().enumerate() {
            let key = FaceKey::from_points(face);
            if seen_keys.contains(&key) {
                continue;
            }

            let owners = &index[&key];
            let others: Vec<(usize, usize)> = owners
                .iter()
                .copied()
                .filter(|&(c, l)| !(c == cell_idx && l == local_idx))
                .collect();

            if owners.len() > 2 {
                return Err(SplitError::InternalInvariant(format!(
                    "face shared by {} cells (expected at most 2)",
                    owners.len()
                )));
            }

            let Some(&(other_cell, _)) = others.first() else {
                continue; // boundary face
            };

            let other_value = field_values[other_cell];
            if values.contains(&other_value) && other_value != this_value {
                seen_keys.insert(key.clone());
                result.push(FractureFace {
                    key,
                    ordered: face.clone(),
                });
            }
        }
    }

    Ok(result)
}
