//! `split()`: the single entry point that drives the five pipeline stages
//! behind one call, with an optional progress bar ticking once per stage.

use crate::error::Result;
use crate::fracture::adjacency::build_adjacency_graph;
use crate::fracture::assembler::{assemble_fracture_surface, assemble_volumetric_mesh};
use crate::fracture::detector::detect_fracture_faces;
use crate::fracture::node_index::build_node_cell_index;
use crate::fracture::options::SplitOptions;
use crate::fracture::planner::plan_split;
use crate::fracture::types::FractureSurfaceMesh;
use crate::mesh::Mesh;
use indicatif::{ProgressBar, ProgressStyle};

/// Split `mesh` along the fracture implied by `options`, returning the new
/// volumetric mesh and the fracture surface mesh.
pub fn split(mesh: &Mesh, options: &SplitOptions) -> Result<(Mesh, FractureSurfaceMesh)> {
    options.validate()?;

    let progress = options.show_progress.then(|| {
        let bar = ProgressBar::new(5);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );
        bar
    });

    let tick = |msg: &'static str| {
        if let Some(bar) = &progress {
            bar.set_message(msg);
            bar.inc(1);
        }
    };

    log::debug!("detecting fracture faces on field '{}'", options.field);
    let fracture_faces = detect_fracture_faces(mesh, &options.field, &options.field_values)?;
    tick("fracture faces detected");
    log::info!("found {} fracture faces", fracture_faces.len());

    let node_index = build_node_cell_index(mesh, &fracture_faces);
    tick("node/cell index built");

    let adjacency = build_adjacency_graph(mesh, &fracture_faces, &node_index);
    tick("adjacency graph built");

    let plan = plan_split(mesh.num_points(), &adjacency, &node_index);
    tick("split planned");
    log::info!(
        "split adds {} points ({} -> {})",
        plan.new_point_count - mesh.num_points(),
        mesh.num_points(),
        plan.new_point_count
    );

    let volumetric = assemble_volumetric_mesh(mesh, &plan)?;
    let surface = assemble_fracture_surface(mesh, &plan, &fracture_faces, &node_index)?;
    tick("meshes assembled");

    if let Some(bar) = progress {
        bar.finish_with_message("split complete");
    }

    Ok((volumetric, surface))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::types::AttributeArray;
    use crate::mesh::{Cell, CellType, Point};
    use std::sync::Arc;

    /// Two hexahedra sharing one quad face {4,5,6,7} == {8,9,10,11} at
    /// x = 1, with distinct field values on either side (S1).
    fn two_hex_sharing_a_face() -> Mesh {
        let mut mesh = Mesh::new();
        // Left cube: 0..8
        for (x, y, z) in [
            (0, 0, 0),
            (1, 0, 0),
            (1, 1, 0),
            (0, 1, 0),
            (0, 0, 1),
            (1, 0, 1),
            (1, 1, 1),
            (0, 1, 1),
        ] {
            mesh.points.push(Point::new(x as f64, y as f64, z as f64));
        }
        // Right cube shares the x=1 face: reuse nodes 1,2,5,6 and add new
        // nodes at x=2.
        let base = mesh.points.len();
        mesh.points.push(Point::new(2.0, 0.0, 0.0)); // base+0
        mesh.points.push(Point::new(2.0, 1.0, 0.0)); // base+1
        mesh.points.push(Point::new(2.0, 0.0, 1.0)); // base+2
        mesh.points.push(Point::new(2.0, 1.0, 1.0)); // base+3

        mesh.cells.push(Cell::standard(
            CellType::Hexahedron,
            vec![0, 1, 2, 3, 4, 5, 6, 7],
        ));
        mesh.cells.push(Cell::standard(
            CellType::Hexahedron,
            vec![1, base, base + 1, 2, 5, base + 2, base + 3, 6],
        ));

        mesh.cell_attributes.insert(
            "region".to_string(),
            Arc::new(AttributeArray::Int(vec![1, 2])),
        );
        mesh
    }

    #[test]
    fn test_s1_shared_face_splits_four_nodes() {
        let mesh = two_hex_sharing_a_face();
        let options = SplitOptions::new("region", [1, 2].into_iter().collect());
        let (volumetric, surface) = split(&mesh, &options).unwrap();

        assert_eq!(volumetric.num_points(), mesh.num_points() + 4);
        assert_eq!(surface.num_points(), 4);
        assert_eq!(surface.num_polygons(), 1);
        for row in &surface.collocated_nodes.rows {
            assert_eq!(row.len(), 2);
        }
    }

    #[test]
    fn test_s2_restricted_value_set_yields_no_split() {
        let mesh = two_hex_sharing_a_face();
        let options = SplitOptions::new("region", [1].into_iter().collect());
        let (volumetric, surface) = split(&mesh, &options).unwrap();

        assert_eq!(volumetric.num_points(), mesh.num_points());
        assert_eq!(surface.num_points(), 0);
        assert_eq!(surface.num_polygons(), 0);
    }

    #[test]
    fn test_s8_unimplemented_policy_rejected() {
        let mesh = two_hex_sharing_a_face();
        let mut options = SplitOptions::new("region", [1, 2].into_iter().collect());
        options.policy = "face-field".to_string();
        let result = split(&mesh, &options);
        assert!(matches!(
            result,
            Err(crate::error::SplitError::Unimplemented { .. })
        ));
    }

    #[test]
    fn test_determinism_repeated_runs_match() {
        let mesh = two_hex_sharing_a_face();
        let options = SplitOptions::new("region", [1, 2].into_iter().collect());
        let (v1, s1) = split(&mesh, &options).unwrap();
        let (v2, s2) = split(&mesh, &options).unwrap();

        assert_eq!(v1.num_points(), v2.num_points());
        for (c1, c2) in v1.cells.iter().zip(v2.cells.iter()) {
            assert_eq!(c1.point_ids, c2.point_ids);
        }
        assert_eq!(s1.polygons, s2.polygons);
        assert_eq!(s1.collocated_nodes.rows, s2.collocated_nodes.rows);
    }
}
