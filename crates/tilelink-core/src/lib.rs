//! Core data structures for the Tilelink matching game.
//!
//! This crate provides the board model shared by path search, generation and
//! game session management.
//!
//! # Overview
//!
//! - [`coord`]: [`Coord`] values and the [`Direction`] classification of deltas
//! - [`grid`]: the bordered cell matrix ([`Grid`]) and its query result ([`Cell`])
//! - [`tile_type`]: [`TileType`], the [`TileTypeCatalog`] with display colors,
//!   and the per-type [`TileTypeCounter`]
//! - [`board`]: [`Board`], a grid plus the table of [`Tile`]s placed on it
//!
//! # Examples
//!
//! ```
//! use tilelink_core::{Board, Cell, Coord};
//!
//! let board: Board = "
//!     A.
//!     .A
//! "
//! .parse()?;
//!
//! // The interior starts at (1, 1); everything around it is an empty border.
//! assert!(board.grid().is_occupied(Coord::new(1, 1)));
//! assert_eq!(board.grid().cell(Coord::new(0, 0)), Cell::Empty);
//! assert_eq!(board.grid().cell(Coord::new(-1, 0)), Cell::Wall);
//! # Ok::<(), tilelink_core::BoardParseError>(())
//! ```

pub mod board;
pub mod coord;
pub mod grid;
pub mod tile_type;

pub use self::{
    board::{Board, BoardParseError, Tile, TileId},
    coord::{Coord, Direction},
    grid::{Cell, Grid, GridError},
    tile_type::{CatalogError, Color, TileType, TileTypeCatalog, TileTypeCounter},
};
