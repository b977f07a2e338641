//! Rectangular grid container with coordinate-safe access
//!
//! [`Grid`] owns a `width x height` table of `Option<T>` cells backed by an
//! [`ndarray::Array2`], addressed `[x][y]` with `x` the column index. `None`
//! is the explicit empty marker, distinct from any value of `T`. Reads
//! outside the bounds degrade to the empty marker; only assignment treats an
//! out-of-bounds position as an error.

use ndarray::Array2;

use crate::error::{GridError, Result};
use crate::geometry::Vector;

/// Display formatting for grids of displayable values
pub mod display;
/// Adjacency, difference and membership queries
pub mod query;
/// Frontier-based reachability search
pub mod search;
/// Geometric transforms returning fresh grids
pub mod transform;

/// A dense rectangular table of optional values
///
/// Every column has identical length by construction; the backing array
/// cannot represent a ragged table. Transform methods return new grids with
/// independent storage, so two instances never alias. [`Grid::set`] and
/// [`Grid::clear`] are the only in-place mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    /// Cell table, dimension `(width, height)`, indexed `[[x, y]]`
    pub(crate) content: Array2<Option<T>>,
}

impl<T> Grid<T> {
    /// Create a grid of the given dimensions with every cell empty
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if either component of
    /// `dimensions` is negative.
    pub fn new(dimensions: Vector) -> Result<Self> {
        if dimensions.x < 0 || dimensions.y < 0 {
            return Err(GridError::InvalidDimensions { dimensions });
        }
        let shape = (dimensions.x as usize, dimensions.y as usize);
        Ok(Self {
            content: Array2::from_shape_simple_fn(shape, || None),
        })
    }

    /// Adopt a caller-supplied column table as backing storage
    ///
    /// `columns[x][y]` becomes the cell at `(x, y)`. The height of the grid
    /// is the length of the first column; an empty table yields a 0x0 grid.
    ///
    /// # Errors
    ///
    /// Returns `GridError::RaggedColumns` if any column differs in length
    /// from the first.
    pub fn from_columns(columns: Vec<Vec<Option<T>>>) -> Result<Self> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        for (column, cells) in columns.iter().enumerate() {
            if cells.len() != height {
                return Err(GridError::RaggedColumns {
                    column,
                    expected: height,
                    actual: cells.len(),
                });
            }
        }
        let cells: Vec<Option<T>> = columns.into_iter().flatten().collect();
        let content = Array2::from_shape_vec((width, height), cells).map_err(|_shape_error| {
            GridError::InvalidDimensions {
                dimensions: Vector::new(width as i32, height as i32),
            }
        })?;
        Ok(Self { content })
    }

    /// Cell value at `position`, or `None` when the cell is empty or the
    /// position lies outside the grid
    pub fn get(&self, position: Vector) -> Option<&T> {
        let index = self.index(position)?;
        self.content.get(index).and_then(Option::as_ref)
    }

    /// Assign `value` to the cell at `position`
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfBounds` if `position` lies outside the grid;
    /// the grid is left unchanged.
    pub fn set(&mut self, position: Vector, value: T) -> Result<()> {
        self.put(position, Some(value))
    }

    /// Reset the cell at `position` to the empty marker
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfBounds` if `position` lies outside the grid.
    pub fn clear(&mut self, position: Vector) -> Result<()> {
        self.put(position, None)
    }

    /// Whether `position` lies within `[0, width) x [0, height)`
    pub fn contains_position(&self, position: Vector) -> bool {
        self.index(position).is_some()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.content.nrows()
    }

    /// Number of rows (0 when the grid has no columns)
    pub fn height(&self) -> usize {
        self.content.ncols()
    }

    /// Current dimensions as a coordinate pair
    pub fn dimensions(&self) -> Vector {
        Vector::new(self.width() as i32, self.height() as i32)
    }

    /// Total cell count, `width * height`
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Whether the grid holds no cells at all
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Visit every cell in row-major order (`x` outer, `y` inner)
    ///
    /// Empty cells are visited as `None`.
    pub fn iter(&self) -> impl Iterator<Item = (Vector, Option<&T>)> {
        self.content
            .indexed_iter()
            .map(|((x, y), cell)| (Vector::new(x as i32, y as i32), cell.as_ref()))
    }

    /// Apply `f` to every cell in row-major order
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Option<&T>, Vector),
    {
        for (position, value) in self.iter() {
            f(value, position);
        }
    }

    /// Translate a coordinate into a checked backing-array index
    pub(crate) fn index(&self, position: Vector) -> Option<(usize, usize)> {
        (position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width()
            && (position.y as usize) < self.height())
        .then(|| (position.x as usize, position.y as usize))
    }

    fn put(&mut self, position: Vector, value: Option<T>) -> Result<()> {
        let dimensions = self.dimensions();
        let index = self
            .index(position)
            .ok_or(GridError::OutOfBounds {
                position,
                dimensions,
            })?;
        if let Some(cell) = self.content.get_mut(index) {
            *cell = value;
        }
        Ok(())
    }
}

impl<T> Default for Grid<T> {
    /// The empty 0x0 grid
    fn default() -> Self {
        Self {
            content: Array2::from_shape_simple_fn((0, 0), || None),
        }
    }
}
