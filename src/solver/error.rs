//! Error types for grid setup and source-field validation.
//!
//! The per-cell kernels never fail; these errors come from constructing
//! grids and states, and from checking a finished source field.

use thiserror::Error;

use crate::types::{CellIndex, Real};

/// Errors reported by the solver front end.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Grid dimensions or spacings cannot support the stencils.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An array does not have the length the grid or layout requires.
    #[error("Dimension mismatch for {field}: expected {expected}, got {actual}")]
    DimensionMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// State layout differs from the layout the physics configuration implies.
    #[error("State layout mismatch: state has {actual} variables per cell, physics expects {expected}")]
    LayoutMismatch { expected: usize, actual: usize },

    /// NaN or infinity in a computed source value.
    #[error("Non-finite source value {value} in component {component} at cell {cell}")]
    NonFinite {
        cell: CellIndex,
        component: usize,
        value: Real,
    },
}

impl SolverError {
    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(field: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            field,
            expected,
            actual,
        }
    }
}
