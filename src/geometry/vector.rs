//! Integer coordinate pair and the 4-connected unit offsets

use std::fmt;
use std::ops::{Add, Sub};

/// A grid coordinate: `x` is the column index, `y` the row index
///
/// Coordinates compare, hash and deduplicate by value. Components are signed
/// so the same type can carry relative offsets; grid cells themselves live in
/// the non-negative quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

/// The four orthogonal unit offsets, in fixed probe order
///
/// Adjacency throughout the crate is 4-connected; diagonals are never
/// considered neighbours.
pub const ORTHOGONAL_OFFSETS: [Vector; 4] = [
    Vector { x: 0, y: 1 },
    Vector { x: 1, y: 0 },
    Vector { x: 0, y: -1 },
    Vector { x: -1, y: 0 },
];

impl Vector {
    /// Create a coordinate from column and row indices
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
