//! Error types for grid layout construction.

use thiserror::Error;

/// Errors that can occur while building or inspecting a grid dataset.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// A range step was zero, negative where not allowed, or non-finite.
    #[error("invalid step {step} for range [{start}, {stop})")]
    InvalidStep { start: f64, stop: f64, step: f64 },

    /// Two arrays that must be combined element-wise differ in length.
    #[error("shape mismatch in {context}: {left} vs {right}")]
    ShapeMismatch {
        context: String,
        left: usize,
        right: usize,
    },

    /// A dimension was registered twice with different lengths.
    #[error("dimension '{dim}' already has length {existing}, cannot use {requested}")]
    DimensionConflict {
        dim: String,
        existing: usize,
        requested: usize,
    },

    /// A variable's array rank does not match its dimension list.
    #[error("variable '{name}' declares {dims} dimensions but has rank {rank}")]
    RankMismatch {
        name: String,
        dims: usize,
        rank: usize,
    },

    /// Invalid builder configuration.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// Unrecognized grid kind name.
    #[error("unknown grid kind: {0}")]
    UnknownGridKind(String),

    /// Requested variable is not present in the dataset.
    #[error("variable not found: {0}")]
    VariableNotFound(String),

    /// Cell index outside the grid.
    #[error("cell ({row}, {col}) is outside grid of shape ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl GridError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(context: impl Into<String>, left: usize, right: usize) -> Self {
        Self::ShapeMismatch {
            context: context.into(),
            left,
            right,
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

impl From<ndarray::ShapeError> for GridError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::InvalidConfig(format!("array shape: {}", err))
    }
}

/// Result type for grid layout operations.
pub type Result<T> = std::result::Result<T, GridError>;
