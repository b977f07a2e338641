//! Adjacency, difference and membership queries
//!
//! Adjacency is always 4-connected. Query predicates receive the cell value
//! and its absolute position; empty cells never satisfy a predicate, so
//! presence is a precondition rather than something every filter restates.
//! Coordinate results are [`IndexSet`]s: deduplicated by value, iterated in
//! insertion order.

use indexmap::IndexSet;

use crate::geometry::{ORTHOGONAL_OFFSETS, Vector};
use crate::grid::Grid;

impl<T> Grid<T> {
    /// Relative unit offsets of the 4-neighbours of `position` whose target
    /// cell is in bounds, occupied, and satisfies `filter`
    ///
    /// Returns `None` (not an empty set) when `position` itself lies outside
    /// the grid. An in-bounds position with no qualifying neighbour yields
    /// `Some` of an empty set.
    pub fn neighbour_offsets<F>(&self, position: Vector, mut filter: F) -> Option<IndexSet<Vector>>
    where
        F: FnMut(&T, Vector) -> bool,
    {
        if !self.contains_position(position) {
            return None;
        }
        let mut offsets = IndexSet::new();
        for offset in ORTHOGONAL_OFFSETS {
            let target = position + offset;
            if self.get(target).is_some_and(|value| filter(value, target)) {
                offsets.insert(offset);
            }
        }
        Some(offsets)
    }

    /// Absolute positions of the qualifying 4-neighbours of `position`
    ///
    /// Same predicate semantics as [`Grid::neighbour_offsets`], translated
    /// to absolute coordinates and deduplicated by value.
    pub fn neighbours<F>(&self, position: Vector, filter: F) -> Option<IndexSet<Vector>>
    where
        F: FnMut(&T, Vector) -> bool,
    {
        let offsets = self.neighbour_offsets(position, filter)?;
        Some(offsets.into_iter().map(|offset| position + offset).collect())
    }

    /// Boolean grid marking cells that satisfy `filter` or touch one that
    /// does
    ///
    /// A cell is `true` iff it satisfies `filter` directly or at least one
    /// of its in-bounds 4-neighbours does. Every cell of the result is
    /// present.
    pub fn pad_cells<F>(&self, filter: F) -> Grid<bool>
    where
        F: Fn(&T, Vector) -> bool,
    {
        let padded = self.map(|_, position| {
            Some(
                self.neighbours(position, &filter)
                    .is_some_and(|neighbours| !neighbours.is_empty()),
            )
        });
        self.map(|value, position| {
            let direct = value.is_some_and(|v| filter(v, position));
            Some(direct || padded.get(position).copied().unwrap_or(false))
        })
    }
}

impl<T: PartialEq> Grid<T> {
    /// Positions of the receiver where the two grids hold unequal cells
    ///
    /// Cells compare by value, with the empty marker equal only to itself;
    /// positions of `other` outside the receiver's shape are not visited,
    /// and receiver positions outside `other` compare against the empty
    /// marker. `a.difference(a)` is always empty.
    pub fn difference(&self, other: &Self) -> IndexSet<Vector> {
        self.iter()
            .filter(|&(position, value)| other.get(position) != value)
            .map(|(position, _)| position)
            .collect()
    }

    /// Whether any occupied cell holds `value`
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|(_, cell)| cell == Some(value))
    }

    /// Position of the first occupied cell holding `value`, in row-major
    /// order (`x` outer, `y` inner)
    pub fn find(&self, value: &T) -> Option<Vector> {
        self.iter()
            .find(|&(_, cell)| cell == Some(value))
            .map(|(position, _)| position)
    }
}

impl<T> Grid<T> {
    /// Every in-bounds position, row-major (`x` outer, `y` inner)
    ///
    /// The cardinality always equals [`Grid::area`].
    pub fn all_positions(&self) -> IndexSet<Vector> {
        self.iter().map(|(position, _)| position).collect()
    }
}
