//! NodeCellIndex: for every fracture node, every cell in the whole mesh
//! that touches it.

use crate::fracture::types::{FractureFace, NodeCellIndex};
use crate::mesh::Mesh;
use std::collections::HashSet;

/// Build the node -> incident-cells index restricted to fracture nodes, but
/// covering ALL of the mesh's cells (not just fracture-adjacent ones).
///
/// Deterministic: cells are scanned in ascending id order, and each cell's
/// distinct points are visited in ascending id order, so the discovery
/// order recorded alongside the index is reproducible.
pub fn build_node_cell_index(mesh: &Mesh, fracture_faces: &[FractureFace]) -> NodeCellIndex {
    let fracture_nodes: HashSet<usize> = fracture_faces
        .iter()
        .flat_map(|f| f.ordered.iter().copied())
        .collect();

    let mut index = NodeCellIndex::default();
    let mut seen = HashSet::new();

    for (cell_idx, cell) in mesh.cells.iter().enumerate() {
        for node in cell.sorted_unique_points() {
            if !fracture_nodes.contains(&node) {
                continue;
            }
            if seen.insert(node) {
                index.discovery_order.push(node);
            }
            index.cells_by_node.entry(node).or_default().push(cell_idx);
        }
    }

    index
}
