//! Shared types for the fracture-split pipeline: face identity keys, the
//! fracture-face collection, the node/cell indexes, the adjacency graph,
//! the split plan, and the collocation tables.

use std::collections::HashMap;

/// Unordered identity of a face: its point ids, sorted. Two faces with the
/// same vertex set but different orientation/starting point hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceKey(Vec<usize>);

impl FaceKey {
    pub fn from_points(points: &[usize]) -> Self {
        let mut sorted = points.to_vec();
        sorted.sort_unstable();
        FaceKey(sorted)
    }
}

/// A face identified as part of the fracture: its unordered identity plus
/// the first-encountered ordered vertex tuple, preserved for polygon
/// emission and orientation.
#[derive(Debug, Clone)]
pub struct FractureFace {
    pub key: FaceKey,
    pub ordered: Vec<usize>,
}

/// For every fracture node, every cell in the whole mesh incident to it,
/// plus the order in which fracture nodes were first discovered. The
/// discovery order drives the fracture surface mesh's compact point
/// numbering (see `fracture::assembler`).
#[derive(Debug, Clone, Default)]
pub struct NodeCellIndex {
    pub cells_by_node: HashMap<usize, Vec<usize>>,
    pub discovery_order: Vec<usize>,
}

/// Adjacency list over cells that touch the fracture at any node. An edge
/// joins two cells that share a face which is NOT a fracture face.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    pub edges: HashMap<usize, Vec<usize>>,
}

impl AdjacencyGraph {
    pub fn neighbors(&self, cell: usize) -> &[usize] {
        self.edges.get(&cell).map(|v| v.as_slice()).unwrap_or(&[])
    }
}

/// The result of SplitPlanner: per-cell relabeling of fracture nodes, and
/// the resulting new total point count.
#[derive(Debug, Clone, Default)]
pub struct SplitPlan {
    /// cell index -> (original node id -> replacement node id). Only
    /// entries for nodes actually replaced in that cell are present; nodes
    /// kept at their original id are omitted (equivalent to an identity
    /// entry per the "absent or identity" invariant).
    pub cell_node_map: HashMap<usize, HashMap<usize, usize>>,
    pub new_point_count: usize,
}

impl SplitPlan {
    /// Resolve the node a cell should use in place of `orig`, accounting
    /// for both present and absent (identity) mapping entries.
    pub fn resolve(&self, cell: usize, orig: usize) -> usize {
        self.cell_node_map
            .get(&cell)
            .and_then(|m| m.get(&orig))
            .copied()
            .unwrap_or(orig)
    }
}

/// CollocationTable for the volumetric output: new point id -> original
/// point id (identity for point ids below the original point count).
#[derive(Debug, Clone, Default)]
pub struct VolumeCollocation {
    pub origin: Vec<usize>,
}

/// CollocationTable for the fracture surface output: row k lists every
/// volumetric point id that is a copy (including the original) of the 3-D
/// node assigned 2-D index k. Ragged; padded to a rectangular table only at
/// export time.
#[derive(Debug, Clone, Default)]
pub struct SurfaceCollocation {
    pub rows: Vec<Vec<usize>>,
}

impl SurfaceCollocation {
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    /// Render as a rectangular table, -1 padded, suitable for attaching as
    /// point data on the fracture surface mesh.
    pub fn to_padded_i64(&self) -> Vec<Vec<i64>> {
        let w = self.width();
        self.rows
            .iter()
            .map(|row| {
                let mut padded: Vec<i64> = row.iter().map(|&v| v as i64).collect();
                padded.resize(w, -1);
                padded
            })
            .collect()
    }
}

/// The fracture surface mesh: a compact 2-D mesh covering the fracture,
/// with a back-reference table into the volumetric output's points.
#[derive(Debug, Clone, Default)]
pub struct FractureSurfaceMesh {
    pub points: Vec<crate::mesh::Point>,
    pub polygons: Vec<Vec<usize>>,
    pub collocated_nodes: SurfaceCollocation,
}

impl FractureSurfaceMesh {
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_key_order_independent() {
        let a = FaceKey::from_points(&[1, 2, 3, 4]);
        let b = FaceKey::from_points(&[4, 3, 2, 1]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_surface_collocation_padding() {
        let table = SurfaceCollocation {
            rows: vec![vec![0, 10], vec![1, 11, 12]],
        };
        let padded = table.to_padded_i64();
        assert_eq!(padded[0], vec![0, 10, -1]);
        assert_eq!(padded[1], vec![1, 11, 12]);
    }
}
