//! Inclusive axis-aligned rectangle in grid space

use crate::geometry::Vector;

/// Two inclusive corners of an axis-aligned rectangle
///
/// Construction enforces no ordering between the corners; operations that
/// consume an `Area` normalize via [`Area::normalized`] and clamp against the
/// grid extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Area {
    /// First corner (inclusive)
    pub p1: Vector,
    /// Second corner (inclusive)
    pub p2: Vector,
}

impl Area {
    /// Create a rectangle from two inclusive corners
    pub const fn new(p1: Vector, p2: Vector) -> Self {
        Self { p1, p2 }
    }

    /// Equivalent rectangle with `p1` the component-wise minimum corner
    pub fn normalized(self) -> Self {
        Self {
            p1: Vector::new(self.p1.x.min(self.p2.x), self.p1.y.min(self.p2.y)),
            p2: Vector::new(self.p1.x.max(self.p2.x), self.p1.y.max(self.p2.y)),
        }
    }
}
