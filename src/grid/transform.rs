//! Geometric transforms producing fresh grids
//!
//! Every method here leaves the receiver untouched and returns a new grid
//! with independent backing storage. Rectangle arguments are normalized and
//! clamped, so a transform never fails on geometry alone; the one exception
//! is [`Grid::extend`], which refuses to shrink.

use std::ops::Range;

use ndarray::{Array2, Axis};

use crate::error::{GridError, Result};
use crate::geometry::{Area, Vector};
use crate::grid::Grid;

/// Inclusive span `[lo, hi]` clamped to `[0, extent)`, as an index range
///
/// Disjoint spans collapse to an empty range so degenerate crops keep a
/// meaningful size on the other axis.
fn axis_span(lo: i32, hi: i32, extent: usize) -> Range<usize> {
    let start = (lo.max(0) as usize).min(extent);
    let end = (hi.saturating_add(1).max(0) as usize).min(extent);
    start..end.max(start)
}

impl<T: Clone> Grid<T> {
    /// Inclusive sub-rectangle of the grid
    ///
    /// The corners of `area` are normalized and clamped to the grid extents,
    /// so any rectangle is accepted; a rectangle outside the grid yields a
    /// grid with zero columns or rows as appropriate.
    pub fn crop(&self, area: Area) -> Self {
        let normalized = area.normalized();
        let xs = axis_span(normalized.p1.x, normalized.p2.x, self.width());
        let ys = axis_span(normalized.p1.y, normalized.p2.y, self.height());
        let content = Array2::from_shape_fn((xs.len(), ys.len()), |(x, y)| {
            self.content
                .get((xs.start + x, ys.start + y))
                .and_then(Clone::clone)
        });
        Self { content }
    }

    /// Grown copy of the grid with new cells holding `fill`
    ///
    /// Existing cells keep their values at their original coordinates,
    /// including empty ones.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidExtent` if either component of `new_size`
    /// is smaller than the current dimension; extend never shrinks.
    pub fn extend(&self, new_size: Vector, fill: T) -> Result<Self> {
        let current = self.dimensions();
        if new_size.x < current.x || new_size.y < current.y {
            return Err(GridError::InvalidExtent {
                requested: new_size,
                current,
            });
        }
        let shape = (new_size.x as usize, new_size.y as usize);
        let content = Array2::from_shape_fn(shape, |(x, y)| {
            self.content
                .get((x, y))
                .map_or_else(|| Some(fill.clone()), Clone::clone)
        });
        Ok(Self { content })
    }

    /// Mirror along the y axis: element order reversed within each column
    pub fn flip_x(&self) -> Self {
        let mut content = self.content.clone();
        content.invert_axis(Axis(1));
        Self { content }
    }

    /// Mirror along the x axis: column order reversed
    pub fn flip_y(&self) -> Self {
        let mut content = self.content.clone();
        content.invert_axis(Axis(0));
        Self { content }
    }

    /// Transpose of the grid: the roles of `x` and `y` swap
    ///
    /// Equivalent to a 90-degree rotation composed with a mirror.
    pub fn rotate(&self) -> Self {
        Self {
            content: self.content.t().to_owned(),
        }
    }

    /// Copy of the grid where empty cells take the corresponding cell of
    /// `other` placed at `offset`
    ///
    /// Occupied receiver cells are always preserved. Cells of `other` that
    /// fall outside the receiver are discarded; empty receiver cells with no
    /// counterpart in `other` stay empty.
    pub fn overlay(&self, offset: Vector, other: &Self) -> Self {
        self.map(|value, position| {
            value
                .cloned()
                .or_else(|| other.get(position - offset).cloned())
        })
    }

    /// Apply `f` to the cells inside `area`, leaving the rest untouched
    ///
    /// Implemented as crop, map, then overlay back at the rectangle's
    /// minimum corner; by overlay semantics only empty receiver cells take
    /// the mapped values.
    pub fn map_area<F>(&self, area: Area, f: F) -> Self
    where
        F: FnMut(Option<&T>, Vector) -> Option<T>,
    {
        let normalized = area.normalized();
        let origin = Vector::new(normalized.p1.x.max(0), normalized.p1.y.max(0));
        self.overlay(origin, &self.crop(area).map(f))
    }

    /// Fill the empty cells inside `area` with `value`
    pub fn fill_area(&self, area: Area, value: T) -> Self {
        self.map_area(area, |_, _| Some(value.clone()))
    }

    /// Copy of the grid with every cell set to `value`
    pub fn fill_all(&self, value: T) -> Self {
        self.map(|_, _| Some(value.clone()))
    }

    /// Copy of the grid with empty cells set to `value` and occupied cells
    /// kept
    pub fn fill_undefined(&self, value: T) -> Self {
        self.map(|cell, _| cell.cloned().or_else(|| Some(value.clone())))
    }
}

impl<T> Grid<T> {
    /// Elementwise transform producing a grid of another type
    ///
    /// `f` receives the cell value (empty cells as `None`) and the source
    /// coordinate, and decides presence of the output cell. Cells are
    /// visited in row-major order (`x` outer, `y` inner).
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(Option<&T>, Vector) -> Option<U>,
    {
        let content = Array2::from_shape_fn(self.content.raw_dim(), |(x, y)| {
            let position = Vector::new(x as i32, y as i32);
            f(
                self.content.get((x, y)).and_then(Option::as_ref),
                position,
            )
        });
        Grid { content }
    }

    /// The grid's rows, outer index `y`, cells borrowed
    pub fn rows(&self) -> Vec<Vec<Option<&T>>> {
        (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| self.get(Vector::new(x as i32, y as i32)))
                    .collect()
            })
            .collect()
    }

    /// The grid's columns, outer index `x`, cells borrowed
    pub fn columns(&self) -> Vec<Vec<Option<&T>>> {
        (0..self.width())
            .map(|x| {
                (0..self.height())
                    .map(|y| self.get(Vector::new(x as i32, y as i32)))
                    .collect()
            })
            .collect()
    }
}
