//! The cell matrix a board is laid out on.

use crate::{Coord, TileId};

/// The content of a grid cell as seen by queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Cell {
    /// Outside the grid. Nothing can ever enter a wall.
    Wall,
    /// An in-bounds cell with no tile on it.
    Empty,
    /// A cell holding a live tile.
    Occupied(TileId),
}

impl Cell {
    /// Returns the tile on this cell, if any.
    #[must_use]
    pub fn tile(self) -> Option<TileId> {
        match self {
            Self::Occupied(id) => Some(id),
            Self::Wall | Self::Empty => None,
        }
    }
}

/// Errors returned when mutating a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The coordinate is outside the grid.
    #[display("coordinate {coord} is outside the grid")]
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
    },
    /// Tiles cannot be placed on the border.
    #[display("coordinate {coord} is on the border")]
    BorderCell {
        /// The offending coordinate.
        coord: Coord,
    },
    /// The cell already holds a tile.
    #[display("coordinate {coord} is already occupied")]
    Occupied {
        /// The offending coordinate.
        coord: Coord,
    },
}

/// A rectangular cell matrix surrounded by a one-cell empty border.
///
/// The interior spans `1..=width` by `1..=height`. Row and column `0`, and the
/// last row and column, form the border: they are in bounds and can be walked
/// through, but never hold a tile. Everything beyond the border is
/// [`Cell::Wall`].
///
/// # Examples
///
/// ```
/// use tilelink_core::{Cell, Coord, Grid, TileId};
///
/// let mut grid = Grid::new(2, 3);
/// assert_eq!((grid.total_width(), grid.total_height()), (4, 5));
/// assert!(grid.in_bounds(Coord::new(0, 0)));
/// assert_eq!(grid.cell(Coord::new(-1, 0)), Cell::Wall);
///
/// grid.set(Coord::new(1, 1), Some(TileId::new(0)))?;
/// assert!(grid.is_occupied(Coord::new(1, 1)));
/// assert!(grid.set(Coord::new(0, 1), Some(TileId::new(1))).is_err());
/// # Ok::<(), tilelink_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<TileId>>,
}

impl Grid {
    /// Creates an empty grid with the given interior size.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; (width + 2) * (height + 2)],
        }
    }

    /// Returns the interior width.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the interior height.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the width including the border.
    #[must_use]
    pub const fn total_width(&self) -> usize {
        self.width + 2
    }

    /// Returns the height including the border.
    #[must_use]
    pub const fn total_height(&self) -> usize {
        self.height + 2
    }

    /// Returns `true` if `coord` addresses a cell of the grid, border included.
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some()
    }

    /// Returns `true` if `coord` lies on the border.
    #[must_use]
    pub fn is_border(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && !self.is_interior(coord)
    }

    /// Returns `true` if `coord` lies inside the border.
    #[must_use]
    pub fn is_interior(&self, coord: Coord) -> bool {
        usize::try_from(coord.x).is_ok_and(|x| (1..=self.width).contains(&x))
            && usize::try_from(coord.y).is_ok_and(|y| (1..=self.height).contains(&y))
    }

    /// Returns the content of a cell. Out of bounds coordinates are walls.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Cell {
        match self.index_of(coord) {
            None => Cell::Wall,
            Some(i) => self.cells[i].map_or(Cell::Empty, Cell::Occupied),
        }
    }

    /// Returns the tile on a cell, if any.
    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> Option<TileId> {
        self.cell(coord).tile()
    }

    /// Returns `true` if a tile sits on `coord`.
    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.cell(coord).is_occupied()
    }

    /// Sets the content of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is outside the grid, and
    /// [`GridError::BorderCell`] when placing a tile on the border. Clearing a
    /// border cell is allowed and does nothing.
    pub fn set(&mut self, coord: Coord, tile: Option<TileId>) -> Result<(), GridError> {
        let i = self
            .index_of(coord)
            .ok_or(GridError::OutOfBounds { coord })?;
        if tile.is_some() && !self.is_interior(coord) {
            return Err(GridError::BorderCell { coord });
        }
        self.cells[i] = tile;
        Ok(())
    }

    /// Swaps the contents of two interior cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::BorderCell`] or [`GridError::OutOfBounds`] if either
    /// cell is not an interior cell.
    pub fn swap(&mut self, a: Coord, b: Coord) -> Result<(), GridError> {
        let ia = self.interior_index(a)?;
        let ib = self.interior_index(b)?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Iterates over interior coordinates in row-major order.
    pub fn interior_coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let width = to_coord(self.width);
        let height = to_coord(self.height);
        (1..=height).flat_map(move |y| (1..=width).map(move |x| Coord::new(x, y)))
    }

    /// Iterates over every in-bounds coordinate, border included, in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let width = to_coord(self.total_width());
        let height = to_coord(self.total_height());
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn interior_index(&self, coord: Coord) -> Result<usize, GridError> {
        let i = self
            .index_of(coord)
            .ok_or(GridError::OutOfBounds { coord })?;
        if !self.is_interior(coord) {
            return Err(GridError::BorderCell { coord });
        }
        Ok(i)
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        (x < self.total_width() && y < self.total_height()).then(|| y * self.total_width() + x)
    }
}

fn to_coord(value: usize) -> i32 {
    i32::try_from(value).expect("grid dimensions fit in i32")
}
