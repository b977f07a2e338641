//! Generic dense two-dimensional grid with geometric transforms, 4-connected
//! adjacency queries and frontier-based reachability search
//!
//! The central type is [`Grid`], an owned rectangular table of `Option<T>`
//! cells addressed by [`Vector`] coordinates where `x` is the column index
//! and `y` is the row index. Transforms return fresh grids; only cell
//! assignment mutates in place. Out-of-bounds reads degrade to the empty
//! marker rather than failing.

#![forbid(unsafe_code)]

/// Error types for fallible grid operations
pub mod error;
/// Coordinate and rectangle primitives shared by all grid operations
pub mod geometry;
/// The grid container and its transform, query and search methods
pub mod grid;

pub use error::{GridError, Result};
pub use geometry::{Area, Vector};
pub use grid::Grid;
