//! AdjacencyGraph: cells touching the fracture, connected by shared faces
//! that are NOT part of the fracture.

use crate::fracture::types::{AdjacencyGraph, FaceKey, FractureFace, NodeCellIndex};
use crate::mesh::{cell_faces, Mesh};
use std::collections::{HashMap, HashSet};

/// Build the adjacency graph over the cells named in `node_index` (the
/// cells touching the fracture at any node). No general graph library is
/// used: only connected components of induced subgraphs are ever needed
/// downstream (`fracture::planner`), so a plain adjacency list suffices.
pub fn build_adjacency_graph(
    mesh: &Mesh,
    fracture_faces: &[FractureFace],
    node_index: &NodeCellIndex,
) -> AdjacencyGraph {
    let fracture_keys: HashSet<FaceKey> =
        fracture_faces.iter().map(|f| f.key.clone()).collect();

    let mut cells: Vec<usize> = node_index
        .cells_by_node
        .values()
        .flat_map(|v| v.iter().copied())
        .collect();
    cells.sort_unstable();
    cells.dedup();

    let mut buckets: HashMap<FaceKey, Vec<usize>> = HashMap::new();
    for &cell_idx in &cells {
        for face in cell_faces(&mesh.cells[cell_idx]) {
            let key = FaceKey::from_points(&face);
            if fracture_keys.contains(&key) {
                continue;
            }
            buckets.entry(key).or_default().push(cell_idx);
        }
    }

    let mut graph = AdjacencyGraph::default();
    for owners in buckets.values() {
        if owners.len() == 2 {
            let (a, b) = (owners[0], owners[1]);
            graph.edges.entry(a).or_default().push(b);
            graph.edges.entry(b).or_default().push(a);
        }
    }
    graph
}
