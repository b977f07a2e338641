//! Coordinate and rectangle primitives for grid addressing
//!
//! [`Vector`] is an integer coordinate pair compared and hashed by value, so
//! coordinate sets deduplicate correctly. [`Area`] is an inclusive
//! axis-aligned rectangle whose corners carry no ordering guarantee;
//! consumers normalize and clamp.

/// Inclusive axis-aligned rectangle
pub mod area;
/// Integer coordinate pair and the 4-connected unit offsets
pub mod vector;

pub use area::Area;
pub use vector::{ORTHOGONAL_OFFSETS, Vector};
