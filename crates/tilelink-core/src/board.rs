//! Board state: a grid plus the tiles placed on it.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Coord, Grid, GridError, TileType, TileTypeCounter};

/// Identifies a tile within one [`Board`].
///
/// Ids index the board's tile table and are never reused while the board lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct TileId(u32);

impl TileId {
    /// Creates an id from its raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A typed tile sitting on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Identity of the tile.
    pub id: TileId,
    /// Type of the tile.
    pub ty: TileType,
    /// Current cell of the tile.
    pub coord: Coord,
}

/// A [`Grid`] together with the table of tiles placed on it.
///
/// The grid holds [`TileId`]s only; the board owns the [`Tile`] records and
/// keeps a live [`TileTypeCounter`] in sync with them.
///
/// Boards have a compact text form: one line per interior row, a type letter
/// for each tile and `.` for an empty cell.
///
/// # Examples
///
/// ```
/// use tilelink_core::{Board, Coord, TileType};
///
/// let mut board: Board = "
///     AB
///     BA
/// "
/// .parse()?;
/// assert_eq!(board.tile_count(), 4);
///
/// let id = board.tile_at(Coord::new(1, 1)).unwrap().id;
/// board.remove_tile(id);
/// assert_eq!(board.type_counter()[TileType::A], 1);
/// assert_eq!(board.to_string(), ".B\nBA");
/// # Ok::<(), tilelink_core::BoardParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    tiles: Vec<Option<Tile>>,
    counter: TileTypeCounter,
    live: usize,
}

impl Board {
    /// Creates a board with no tiles.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            tiles: Vec::new(),
            counter: TileTypeCounter::new(),
            live: 0,
        }
    }

    /// Returns the underlying grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the live tile count per type.
    #[must_use]
    pub fn type_counter(&self) -> &TileTypeCounter {
        &self.counter
    }

    /// Returns the number of live tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.live
    }

    /// Returns `true` if no tile is left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns a live tile by id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index()).and_then(Option::as_ref)
    }

    /// Returns the tile on a cell, if any.
    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        self.grid.tile_at(coord).and_then(|id| self.tile(id))
    }

    /// Iterates over live tiles in id order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }

    /// Places a new tile on an empty interior cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Occupied`] if the cell already has a tile, and the
    /// errors of [`Grid::set`] for border or out of bounds cells.
    pub fn place_tile(&mut self, coord: Coord, ty: TileType) -> Result<TileId, GridError> {
        if self.grid.is_occupied(coord) {
            return Err(GridError::Occupied { coord });
        }
        let index = u32::try_from(self.tiles.len()).expect("tile count fits in u32");
        let id = TileId::new(index);
        self.grid.set(coord, Some(id))?;
        self.tiles.push(Some(Tile { id, ty, coord }));
        self.counter.increment(ty);
        self.live += 1;
        Ok(id)
    }

    /// Removes a tile and clears its cell. Returns `None` if it was not live.
    pub fn remove_tile(&mut self, id: TileId) -> Option<Tile> {
        let tile = self.tiles.get_mut(id.index())?.take()?;
        self.grid
            .set(tile.coord, None)
            .expect("live tiles sit on in-bounds cells");
        self.counter.decrement(tile.ty);
        self.live -= 1;
        Some(tile)
    }

    /// Changes the type of a live tile. Returns the previous type.
    pub fn retype_tile(&mut self, id: TileId, ty: TileType) -> Option<TileType> {
        let tile = self.tiles.get_mut(id.index())?.as_mut()?;
        let previous = std::mem::replace(&mut tile.ty, ty);
        self.counter.decrement(previous);
        self.counter.increment(ty);
        Some(previous)
    }

    /// Swaps the occupants of two interior cells, updating the tiles' coordinates.
    ///
    /// Either cell may be empty.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is not an interior cell.
    pub fn swap_cells(&mut self, a: Coord, b: Coord) -> Result<(), GridError> {
        self.grid.swap(a, b)?;
        for coord in [a, b] {
            if let Some(id) = self.grid.tile_at(coord)
                && let Some(tile) = self.tiles[id.index()].as_mut()
            {
                tile.coord = coord;
            }
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`Board`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// The text has no rows.
    #[display("board text is empty")]
    Empty,
    /// Rows have different lengths.
    #[display("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row number.
        row: usize,
        /// Cells found on the row.
        len: usize,
        /// Cells on the first row.
        expected: usize,
    },
    /// A character is neither a type letter nor `.`.
    #[display("invalid cell character {ch:?} on row {row}")]
    InvalidCell {
        /// Zero-based row number.
        row: usize,
        /// The offending character.
        ch: char,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        let expected = rows.first().ok_or(BoardParseError::Empty)?.len();

        let mut board = Self::new(expected, rows.len());
        for (row, (y, cells)) in (1..).zip(&rows).enumerate() {
            if cells.len() != expected {
                return Err(BoardParseError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected,
                });
            }
            for (x, &ch) in (1..).zip(cells) {
                if ch == '.' {
                    continue;
                }
                let ty = TileType::from_letter(ch).ok_or(BoardParseError::InvalidCell { row, ch })?;
                board
                    .place_tile(Coord::new(x, y), ty)
                    .expect("parsed cells are empty interior cells");
            }
        }
        Ok(board)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for coord in self.grid.interior_coords() {
            if coord.x == 1 && !first {
                writeln!(f)?;
            }
            first = false;
            match self.tile_at(coord) {
                Some(tile) => write!(f, "{}", tile.ty)?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
