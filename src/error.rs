//! Error types for the fracture split application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    /// The input mesh or configuration does not satisfy a precondition: a
    /// named field is missing or of the wrong kind, a config value is
    /// malformed, etc.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An invariant the algorithm relies on was violated by the mesh itself
    /// (e.g. an interior face shared by more than two cells). This indicates
    /// a malformed mesh, not a bug in the caller's request.
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),

    /// A recognized but unimplemented configuration value was requested.
    /// The crate does not guess at semantics for options it only partially
    /// supports; it surfaces them instead of silently defaulting.
    #[error("Unimplemented option '{option}': {value}")]
    Unimplemented { option: String, value: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("VTK error: {0}")]
    VtkError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, SplitError>;
