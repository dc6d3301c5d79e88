//! Mesh data structures and operations

pub mod topology;
pub mod types;

pub use topology::*;
pub use types::*;
