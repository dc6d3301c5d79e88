//! MeshAssembler: builds the split volumetric mesh and the companion
//! fracture surface mesh from a `SplitPlan`.

use crate::error::{Result, SplitError};
use crate::fracture::types::{
    FractureFace, FractureSurfaceMesh, NodeCellIndex, SplitPlan, SurfaceCollocation,
    VolumeCollocation,
};
use crate::mesh::types::{Cell, CellType};
use crate::mesh::Mesh;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Assemble the volumetric collocation table (new point id -> original
/// point id) from the plan.
fn build_volume_collocation(mesh: &Mesh, plan: &SplitPlan) -> VolumeCollocation {
    let mut origin: Vec<usize> = (0..plan.new_point_count).collect();
    for (_, node_to_new) in plan.cell_node_map.iter() {
        for (&orig, &new_id) in node_to_new.iter() {
            if new_id >= mesh.num_points() {
                origin[new_id] = orig;
            }
        }
    }
    VolumeCollocation { origin }
}

/// Relabel a single cell's point ids (and, for polyhedra, its explicit
/// faces) according to the plan. Dispatches on cell type: polyhedral cells
/// have their face descriptions rewritten in place; standard cell types
/// have their compact point-id list relabeled, since their faces are
/// implied by a fixed local table.
fn relabel_cell(cell_idx: usize, cell: &Cell, plan: &SplitPlan) -> Cell {
    let relabel = |p: usize| plan.resolve(cell_idx, p);
    match cell.cell_type {
        CellType::Polyhedron => {
            let faces = cell
                .faces
                .as_ref()
                .expect("polyhedron cell must carry explicit faces");
            let new_faces: Vec<Vec<usize>> = faces
                .iter()
                .map(|f| f.iter().map(|&p| relabel(p)).collect())
                .collect();
            Cell::polyhedron(new_faces)
        }
        _ => {
            let new_points: Vec<usize> = cell.point_ids.iter().map(|&p| relabel(p)).collect();
            Cell::standard(cell.cell_type, new_points)
        }
    }
}

/// Build the split volumetric mesh: duplicated points, relabeled cells, and
/// attribute arrays propagated per their by-reference / rebuilt rules.
pub fn assemble_volumetric_mesh(mesh: &Mesh, plan: &SplitPlan) -> Result<Mesh> {
    let collocation = build_volume_collocation(mesh, plan);

    let mut points = Vec::with_capacity(plan.new_point_count);
    for i in 0..plan.new_point_count {
        let orig = collocation.origin[i];
        let p = mesh.points.get(orig).ok_or_else(|| {
            SplitError::InternalInvariant(format!(
                "collocation table entry {} references nonexistent point {}",
                i, orig
            ))
        })?;
        points.push(*p);
    }

    let cells: Vec<Cell> = mesh
        .cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| relabel_cell(idx, cell, plan))
        .collect();

    let mut point_attributes = HashMap::new();
    for (name, array) in &mesh.point_attributes {
        point_attributes.insert(name.clone(), Arc::new(array.gather(&collocation.origin)));
    }

    Ok(Mesh {
        points,
        cells,
        cell_attributes: mesh.cell_attributes.clone(),
        point_attributes,
        mesh_attributes: mesh.mesh_attributes.clone(),
    })
}

/// Build the fracture surface mesh: compact 2-D points (in fracture-node
/// discovery order), polygons re-indexed into that 2-D space, and the
/// collocated-nodes back-reference table.
pub fn assemble_fracture_surface(
    mesh: &Mesh,
    plan: &SplitPlan,
    fracture_faces: &[FractureFace],
    node_index: &NodeCellIndex,
) -> Result<FractureSurfaceMesh> {
    let mut index_2d: HashMap<usize, usize> = HashMap::new();
    let mut points = Vec::with_capacity(node_index.discovery_order.len());
    for (k, &node) in node_index.discovery_order.iter().enumerate() {
        index_2d.insert(node, k);
        points.push(mesh.points[node]);
    }

    let mut polygons = Vec::with_capacity(fracture_faces.len());
    for face in fracture_faces {
        let mut poly = Vec::with_capacity(face.ordered.len());
        for &v in &face.ordered {
            let idx = index_2d.get(&v).ok_or_else(|| {
                SplitError::InternalInvariant(format!(
                    "fracture face references node {} with no 2-D index",
                    v
                ))
            })?;
            poly.push(*idx);
        }
        polygons.push(poly);
    }

    let mut rows = Vec::with_capacity(node_index.discovery_order.len());
    for &node in &node_index.discovery_order {
        let cells = node_index.cells_by_node.get(&node).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut distinct: HashSet<usize> = HashSet::new();
        for &cell in cells {
            distinct.insert(plan.resolve(cell, node));
        }
        let mut row: Vec<usize> = distinct.into_iter().collect();
        row.sort_unstable();
        rows.push(row);
    }

    if rows.len() != node_index.discovery_order.len() {
        return Err(SplitError::InternalInvariant(
            "collocation table row count does not match 2-D point count".to_string(),
        ));
    }

    Ok(FractureSurfaceMesh {
        points,
        polygons,
        collocated_nodes: SurfaceCollocation { rows },
    })
}
