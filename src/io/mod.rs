//! I/O module for reading and writing mesh files and run reports.

pub mod json;
pub mod report;
pub mod vtu;

pub use json::{read_json_mesh, write_json_mesh};
pub use report::SplitReport;
pub use vtu::{sanitize_filename, write_fracture_surface_vtu, write_volumetric_vtu};
