//! VTK XML (VTU) writers for the split outputs.
//!
//! Write-only: VTU here is a visualization export, not the canonical
//! interchange format (that's `io::json`). Polyhedral cells are written
//! using VTK's generic convex-point-set cell type rather than an explicit
//! face-stream encoding — faithful face topology for polyhedra only matters
//! to the split algorithm itself, not to viewing the result.

use crate::error::{Result, SplitError};
use crate::fracture::types::FractureSurfaceMesh;
use crate::mesh::types::{CellType as MeshCellType, Mesh};
use std::path::Path;
use vtkio::model::*;

/// Default VTK file format version (2.2 for broad compatibility).
pub const DEFAULT_VTK_VERSION: (u8, u8) = (2, 2);

fn vtk_cell_type(t: MeshCellType) -> CellType {
    match t {
        MeshCellType::Tetra => CellType::Tetra,
        MeshCellType::Hexahedron => CellType::Hexahedron,
        MeshCellType::Wedge => CellType::Wedge,
        MeshCellType::Pyramid => CellType::Pyramid,
        MeshCellType::Polyhedron => CellType::ConvexPointSet,
    }
}

/// Write the split volumetric mesh to a VTU file.
pub fn write_volumetric_vtu(mesh: &Mesh, output_path: &Path, vtk_version: Option<(u8, u8)>) -> Result<()> {
    let version = vtk_version.unwrap_or(DEFAULT_VTK_VERSION);
    log::info!(
        "writing volumetric mesh with {} cells to {:?} (VTK version {}.{})",
        mesh.num_cells(),
        output_path,
        version.0,
        version.1
    );

    let points: Vec<f64> = mesh.points.iter().flat_map(|p| vec![p.x, p.y, p.z]).collect();

    let mut connectivity = Vec::new();
    let mut offsets = Vec::with_capacity(mesh.num_cells());
    let mut types = Vec::with_capacity(mesh.num_cells());
    let mut running = 0u64;
    for cell in &mesh.cells {
        connectivity.extend(cell.point_ids.iter().map(|&id| id as u64));
        running += cell.point_ids.len() as u64;
        offsets.push(running);
        types.push(vtk_cell_type(cell.cell_type));
    }

    let cells = Cells {
        cell_verts: VertexNumbers::XML { connectivity, offsets },
        types,
    };

    let mut ugrid = UnstructuredGridPiece {
        points: IOBuffer::F64(points),
        cells,
        data: Attributes::new(),
    };

    for (name, array) in &mesh.cell_attributes {
        if let Some(values) = array.as_int() {
            ugrid.data.cell.push(Attribute::DataArray(DataArray {
                name: name.clone().into(),
                elem: ElementType::Scalars {
                    num_comp: 1,
                    lookup_table: None,
                },
                data: IOBuffer::I64(values.to_vec()),
            }));
        } else if let Some(values) = array.as_float() {
            ugrid.data.cell.push(Attribute::DataArray(DataArray {
                name: name.clone().into(),
                elem: ElementType::Scalars {
                    num_comp: 1,
                    lookup_table: None,
                },
                data: IOBuffer::F64(values.to_vec()),
            }));
        }
    }

    let vtk = Vtk {
        version: Version::new(version),
        title: "Split volumetric mesh".to_string(),
        byte_order: ByteOrder::LittleEndian,
        data: DataSet::UnstructuredGrid {
            pieces: vec![Piece::Inline(Box::new(ugrid))],
            meta: None,
        },
        file_path: None,
    };

    vtk.export(output_path)
        .map_err(|e| SplitError::VtkError(format!("failed to write VTU file: {}", e)))?;

    Ok(())
}

/// Write the fracture surface mesh to a VTU file, attaching the
/// collocated-nodes back-reference table as point data.
pub fn write_fracture_surface_vtu(
    surface: &FractureSurfaceMesh,
    output_path: &Path,
    vtk_version: Option<(u8, u8)>,
) -> Result<()> {
    let version = vtk_version.unwrap_or(DEFAULT_VTK_VERSION);
    log::info!(
        "writing fracture surface with {} polygons to {:?} (VTK version {}.{})",
        surface.num_polygons(),
        output_path,
        version.0,
        version.1
    );

    let points: Vec<f64> = surface.points.iter().flat_map(|p| vec![p.x, p.y, p.z]).collect();

    let mut connectivity = Vec::new();
    let mut offsets = Vec::with_capacity(surface.polygons.len());
    let mut running = 0u64;
    for poly in &surface.polygons {
        connectivity.extend(poly.iter().map(|&id| id as u64));
        running += poly.len() as u64;
        offsets.push(running);
    }
    let types = vec![CellType::Polygon; surface.polygons.len()];

    let cells = Cells {
        cell_verts: VertexNumbers::XML { connectivity, offsets },
        types,
    };

    let mut ugrid = UnstructuredGridPiece {
        points: IOBuffer::F64(points),
        cells,
        data: Attributes::new(),
    };

    let padded = surface.collocated_nodes.to_padded_i64();
    let width = surface.collocated_nodes.width();
    if width > 0 {
        let flat: Vec<i64> = padded.into_iter().flatten().collect();
        ugrid.data.point.push(Attribute::DataArray(DataArray {
            name: "collocated_nodes".into(),
            elem: ElementType::Generic(width as u32),
            data: IOBuffer::I64(flat),
        }));
    }

    let vtk = Vtk {
        version: Version::new(version),
        title: "Fracture surface mesh".to_string(),
        byte_order: ByteOrder::LittleEndian,
        data: DataSet::UnstructuredGrid {
            pieces: vec![Piece::Inline(Box::new(ugrid))],
            meta: None,
        },
        file_path: None,
    };

    vtk.export(output_path)
        .map_err(|e| SplitError::VtkError(format!("failed to write VTU file: {}", e)))?;

    Ok(())
}

/// Sanitize a string to be a valid filename.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
