//! Error types for fallible grid operations
//!
//! Only two operations can fail by design: in-place cell assignment outside
//! the current bounds, and extension to a smaller size. Construction adds two
//! shape errors of its own. Everything else degrades gracefully to the empty
//! marker, an absent result, or a degenerate grid.

use std::fmt;

use crate::geometry::Vector;

/// Main error type for all grid operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Assignment targeted a position outside the current dimensions
    OutOfBounds {
        /// Position that was addressed
        position: Vector,
        /// Grid dimensions at the time of the call
        dimensions: Vector,
    },

    /// Extension requested a size smaller than the current size
    ///
    /// `extend` grows a grid and never shrinks it; cropping is the
    /// shrinking operation.
    InvalidExtent {
        /// Requested new dimensions
        requested: Vector,
        /// Dimensions at the time of the call
        current: Vector,
    },

    /// Construction requested a negative dimension
    InvalidDimensions {
        /// Requested dimensions
        dimensions: Vector,
    },

    /// Adopted column table is not rectangular
    RaggedColumns {
        /// Index of the offending column
        column: usize,
        /// Length of the first column, which sets the grid height
        expected: usize,
        /// Length of the offending column
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is out of bounds (grid size {}x{})",
                    position.x, position.y, dimensions.x, dimensions.y
                )
            }
            Self::InvalidExtent { requested, current } => {
                write!(
                    f,
                    "Cannot extend grid to {}x{} from {}x{}: extend never shrinks",
                    requested.x, requested.y, current.x, current.y
                )
            }
            Self::InvalidDimensions { dimensions } => {
                write!(
                    f,
                    "Invalid grid dimensions {}x{}: both components must be non-negative",
                    dimensions.x, dimensions.y
                )
            }
            Self::RaggedColumns {
                column,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Column {column} has length {actual}, expected {expected}: grids must be rectangular"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;
