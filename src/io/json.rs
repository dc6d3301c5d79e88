//! Canonical JSON mesh interchange format.
//!
//! Round-trips the full polyhedral data model exactly: points, cells (type
//! tag, point-id list, and optional explicit face list), and named
//! cell/point/mesh attribute arrays.

use crate::error::{Result, SplitError};
use crate::mesh::types::{AttributeArray, Cell, CellType, Mesh, Point};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonCell {
    cell_type: String,
    point_ids: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    faces: Option<Vec<Vec<usize>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
enum JsonAttribute {
    Int { values: Vec<i64> },
    Float { values: Vec<f64> },
}

impl From<&AttributeArray> for JsonAttribute {
    fn from(arr: &AttributeArray) -> Self {
        match arr {
            AttributeArray::Int(v) => JsonAttribute::Int { values: v.clone() },
            AttributeArray::Float(v) => JsonAttribute::Float { values: v.clone() },
        }
    }
}

impl From<JsonAttribute> for AttributeArray {
    fn from(attr: JsonAttribute) -> Self {
        match attr {
            JsonAttribute::Int { values } => AttributeArray::Int(values),
            JsonAttribute::Float { values } => AttributeArray::Float(values),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonMesh {
    points: Vec<[f64; 3]>,
    cells: Vec<JsonCell>,
    #[serde(default)]
    cell_attributes: HashMap<String, JsonAttribute>,
    #[serde(default)]
    point_attributes: HashMap<String, JsonAttribute>,
    #[serde(default)]
    mesh_attributes: HashMap<String, JsonAttribute>,
}

fn cell_type_to_str(t: CellType) -> &'static str {
    match t {
        CellType::Tetra => "tetra",
        CellType::Hexahedron => "hexahedron",
        CellType::Wedge => "wedge",
        CellType::Pyramid => "pyramid",
        CellType::Polyhedron => "polyhedron",
    }
}

fn str_to_cell_type(s: &str) -> Result<CellType> {
    match s {
        "tetra" => Ok(CellType::Tetra),
        "hexahedron" => Ok(CellType::Hexahedron),
        "wedge" => Ok(CellType::Wedge),
        "pyramid" => Ok(CellType::Pyramid),
        "polyhedron" => Ok(CellType::Polyhedron),
        other => Err(SplitError::InvalidInput(format!(
            "unrecognized cell type '{}'",
            other
        ))),
    }
}

fn mesh_to_json(mesh: &Mesh) -> JsonMesh {
    let points = mesh.points.iter().map(|p| [p.x, p.y, p.z]).collect();
    let cells = mesh
        .cells
        .iter()
        .map(|c| JsonCell {
            cell_type: cell_type_to_str(c.cell_type).to_string(),
            point_ids: c.point_ids.clone(),
            faces: c.faces.clone(),
        })
        .collect();

    let convert = |map: &HashMap<String, Arc<AttributeArray>>| {
        map.iter()
            .map(|(k, v)| (k.clone(), JsonAttribute::from(v.as_ref())))
            .collect()
    };

    JsonMesh {
        points,
        cells,
        cell_attributes: convert(&mesh.cell_attributes),
        point_attributes: convert(&mesh.point_attributes),
        mesh_attributes: convert(&mesh.mesh_attributes),
    }
}

fn json_to_mesh(json: JsonMesh) -> Result<Mesh> {
    let points = json
        .points
        .into_iter()
        .map(|[x, y, z]| Point::new(x, y, z))
        .collect();

    let mut cells = Vec::with_capacity(json.cells.len());
    for jc in json.cells {
        let cell_type = str_to_cell_type(&jc.cell_type)?;
        let cell = if cell_type == CellType::Polyhedron {
            let faces = jc.faces.ok_or_else(|| {
                SplitError::InvalidInput("polyhedron cell is missing its face list".to_string())
            })?;
            Cell::polyhedron(faces)
        } else {
            Cell::standard(cell_type, jc.point_ids)
        };
        cells.push(cell);
    }

    let convert = |map: HashMap<String, JsonAttribute>| {
        map.into_iter()
            .map(|(k, v)| (k, Arc::new(AttributeArray::from(v))))
            .collect()
    };

    Ok(Mesh {
        points,
        cells,
        cell_attributes: convert(json.cell_attributes),
        point_attributes: convert(json.point_attributes),
        mesh_attributes: convert(json.mesh_attributes),
    })
}

/// Read a mesh from the canonical JSON interchange format.
pub fn read_json_mesh(path: &Path) -> Result<Mesh> {
    let content = std::fs::read_to_string(path)?;
    let json: JsonMesh = serde_json::from_str(&content)
        .map_err(|e| SplitError::InvalidInput(format!("failed to parse mesh JSON: {}", e)))?;
    json_to_mesh(json)
}

/// Write a mesh to the canonical JSON interchange format.
pub fn write_json_mesh(mesh: &Mesh, path: &Path) -> Result<()> {
    let json = mesh_to_json(mesh);
    let content = serde_json::to_string_pretty(&json)
        .map_err(|e| SplitError::InvalidInput(format!("failed to serialize mesh: {}", e)))?;
    std::fs::write(path, content)?;
    Ok(())
}
