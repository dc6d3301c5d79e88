//! Local face tables for standard cell types, and the polyhedral/standard
//! face-derivation dispatch used throughout `fracture::`.
//!
//! Polyhedral cells carry their faces explicitly (`Cell::faces`); the
//! standard solid types derive theirs from a fixed table of local vertex
//! indices.

use crate::mesh::types::{Cell, CellType};

/// Local-vertex-index face table for a tetrahedron (4 triangular faces).
const TETRA_FACES: [&[usize]; 4] = [&[0, 1, 2], &[0, 3, 1], &[1, 3, 2], &[2, 3, 0]];

/// Local-vertex-index face table for a hexahedron: bottom, top, front,
/// right, back, left.
const HEX_FACES: [&[usize]; 6] = [
    &[0, 3, 2, 1],
    &[4, 5, 6, 7],
    &[0, 1, 5, 4],
    &[1, 2, 6, 5],
    &[2, 3, 7, 6],
    &[3, 0, 4, 7],
];

/// Local-vertex-index face table for a wedge/prism: two triangles, three
/// quads.
const WEDGE_FACES: [&[usize]; 5] = [
    &[0, 1, 2],
    &[3, 5, 4],
    &[0, 3, 4, 1],
    &[1, 4, 5, 2],
    &[2, 5, 3, 0],
];

/// Local-vertex-index face table for a pyramid: one quad base, four
/// triangles.
const PYRAMID_FACES: [&[usize]; 5] = [
    &[0, 3, 2, 1],
    &[0, 1, 4],
    &[1, 2, 4],
    &[2, 3, 4],
    &[3, 0, 4],
];

/// Return the ordered per-face point-id lists of a cell, dispatching on
/// cell type: explicit for `Polyhedron`, derived from the fixed local
/// table otherwise.
pub fn cell_faces(cell: &Cell) -> Vec<Vec<usize>> {
    match cell.cell_type {
        CellType::Polyhedron => cell
            .faces
            .as_ref()
            .expect("polyhedron cell must carry explicit faces")
            .clone(),
        CellType::Tetra => local_faces(cell, &TETRA_FACES),
        CellType::Hexahedron => local_faces(cell, &HEX_FACES),
        CellType::Wedge => local_faces(cell, &WEDGE_FACES),
        CellType::Pyramid => local_faces(cell, &PYRAMID_FACES),
    }
}

fn local_faces(cell: &Cell, table: &[&[usize]]) -> Vec<Vec<usize>> {
    table
        .iter()
        .map(|local| local.iter().map(|&li| cell.point_ids[li]).collect())
        .collect()
}
