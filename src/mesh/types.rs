//! Core mesh data structures
//!
//! The mesh model here is polyhedral-generic: a cell carries a type tag and
//! a point-id list, and polyhedral cells additionally carry an explicit,
//! ordered face list (the general "face stream" idiom used by VTK/Exodus for
//! cells whose faces cannot be derived from a fixed local table).

use nalgebra::{Point3, Vector3};
use std::collections::HashMap;
use std::sync::Arc;

/// 3D point type
pub type Point = Point3<f64>;

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// Recognized cell types. The first four have a fixed local face layout
/// (see `mesh::topology`); `Polyhedron` carries its faces explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    Tetra,
    Hexahedron,
    Wedge,
    Pyramid,
    Polyhedron,
}

impl CellType {
    /// Expected point count for the fixed-topology types. `Polyhedron` has
    /// no fixed count; callers should use `point_ids.len()` directly.
    pub fn fixed_point_count(&self) -> Option<usize> {
        match self {
            CellType::Tetra => Some(4),
            CellType::Hexahedron => Some(8),
            CellType::Wedge => Some(6),
            CellType::Pyramid => Some(5),
            CellType::Polyhedron => None,
        }
    }
}

/// A single mesh cell.
///
/// `point_ids` is the cell's full, ordered point-id list. For the standard
/// types this list is indexed according to the fixed local-vertex
/// convention in `mesh::topology`. For `Polyhedron`, `faces` holds the
/// authoritative per-face point ordering; `point_ids` is still the
/// deduplicated set of points the cell touches, in first-seen order across
/// `faces`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub cell_type: CellType,
    pub point_ids: Vec<usize>,
    pub faces: Option<Vec<Vec<usize>>>,
}

impl Cell {
    pub fn standard(cell_type: CellType, point_ids: Vec<usize>) -> Self {
        debug_assert_ne!(cell_type, CellType::Polyhedron);
        Self {
            cell_type,
            point_ids,
            faces: None,
        }
    }

    /// Build a polyhedral cell from its explicit face list. `point_ids` is
    /// derived as the deduplicated, first-seen point order across faces.
    pub fn polyhedron(faces: Vec<Vec<usize>>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let mut point_ids = Vec::new();
        for face in &faces {
            for &p in face {
                if seen.insert(p) {
                    point_ids.push(p);
                }
            }
        }
        Self {
            cell_type: CellType::Polyhedron,
            point_ids,
            faces: Some(faces),
        }
    }

    /// Distinct point ids touched by this cell, ascending.
    pub fn sorted_unique_points(&self) -> Vec<usize> {
        let mut pts: Vec<usize> = self.point_ids.clone();
        pts.sort_unstable();
        pts.dedup();
        pts
    }
}

/// A named array of per-cell, per-point, or per-mesh attribute data.
/// Only the integer variant is interpreted by the fracture-split algorithm
/// itself; floating-point arrays ride along as inert payload.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeArray {
    Int(Vec<i64>),
    Float(Vec<f64>),
}

impl AttributeArray {
    pub fn len(&self) -> usize {
        match self {
            AttributeArray::Int(v) => v.len(),
            AttributeArray::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_int(&self) -> Option<&[i64]> {
        match self {
            AttributeArray::Int(v) => Some(v),
            AttributeArray::Float(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<&[f64]> {
        match self {
            AttributeArray::Float(v) => Some(v),
            AttributeArray::Int(_) => None,
        }
    }

    /// Gather a new array by copying values at the given source indices, in
    /// order. Used to rebuild point-scoped arrays after point duplication.
    pub fn gather(&self, indices: &[usize]) -> Self {
        match self {
            AttributeArray::Int(v) => {
                AttributeArray::Int(indices.iter().map(|&i| v[i]).collect())
            }
            AttributeArray::Float(v) => {
                AttributeArray::Float(indices.iter().map(|&i| v[i]).collect())
            }
        }
    }
}

/// Complete volumetric mesh representation.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub points: Vec<Point>,
    pub cells: Vec<Cell>,

    /// Per-cell attribute arrays, one entry per cell, shared cheaply since
    /// cells never change identity or count across a split.
    pub cell_attributes: HashMap<String, Arc<AttributeArray>>,

    /// Per-point attribute arrays, one entry per point. Rebuilt (not
    /// shared) whenever the point count changes.
    pub point_attributes: HashMap<String, Arc<AttributeArray>>,

    /// Whole-mesh scalar/array attributes, geometry-independent and always
    /// shared by reference.
    pub mesh_attributes: HashMap<String, Arc<AttributeArray>>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            cells: Vec::new(),
            cell_attributes: HashMap::new(),
            point_attributes: HashMap::new(),
            mesh_attributes: HashMap::new(),
        }
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Look up a named integer cell attribute, erroring if absent or of the
    /// wrong element type. This is the accessor `FractureDetector` uses for
    /// the field that drives detection.
    pub fn cell_field_i64(&self, name: &str) -> crate::error::Result<&[i64]> {
        let arr = self.cell_attributes.get(name).ok_or_else(|| {
            crate::error::SplitError::InvalidInput(format!(
                "cell attribute field '{}' does not exist on the mesh",
                name
            ))
        })?;
        arr.as_int().ok_or_else(|| {
            crate::error::SplitError::InvalidInput(format!(
                "cell attribute field '{}' is not integer-valued",
                name
            ))
        })
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
