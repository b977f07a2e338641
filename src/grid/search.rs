//! Frontier-based reachability search
//!
//! This is a reachability test, not a shortest-path computation. The search
//! keeps a visited set and a frontier, both value-deduplicated coordinate
//! sets with insertion order; the frontier pops its oldest element, so
//! exploration is breadth-leaning but the returned sequence is discovery
//! order, not a minimal route. Callers needing an actual shortest path
//! should run a proper breadth-first or weighted search on top of
//! [`Grid::neighbours`].

use indexmap::IndexSet;

use crate::geometry::Vector;
use crate::grid::Grid;

impl<T> Grid<T> {
    /// Explore the grid from `start` across 4-neighbours whose cells satisfy
    /// `allowed`, reporting the coordinates discovered on the way to `end`
    ///
    /// Returns the discovery-order sequence of newly frontiered coordinates
    /// once `end` is reached, or `None` when the frontier drains first. The
    /// cell at `start` is never tested against `allowed`; `end` must satisfy
    /// it to be reachable (unless `start == end`). An out-of-bounds `start`
    /// expands nothing and yields `None`.
    ///
    /// Terminates for every input: each iteration removes one frontier
    /// element, and admissions are bounded by [`Grid::area`] because a
    /// coordinate enters the frontier at most once.
    pub fn pathfind<F>(&self, start: Vector, end: Vector, mut allowed: F) -> Option<Vec<Vector>>
    where
        F: FnMut(&T, Vector) -> bool,
    {
        let mut visited: IndexSet<Vector> = IndexSet::new();
        let mut frontier: IndexSet<Vector> = IndexSet::new();
        let mut discovered: Vec<Vector> = Vec::new();
        frontier.insert(start);

        while let Some(current) = frontier.shift_remove_index(0) {
            if current == end {
                return Some(discovered);
            }
            visited.insert(current);
            let Some(neighbours) = self.neighbours(current, &mut allowed) else {
                // Out-of-bounds positions have no neighbourhood to expand.
                continue;
            };
            for neighbour in neighbours {
                if visited.contains(&neighbour) || frontier.contains(&neighbour) {
                    continue;
                }
                frontier.insert(neighbour);
                discovered.push(neighbour);
            }
        }

        None
    }
}
