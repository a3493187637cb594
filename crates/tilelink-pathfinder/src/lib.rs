//! Path search for the Tilelink matching game.
//!
//! Two tiles of the same type can be matched when a route connects them:
//! axis-aligned unit steps through empty cells (the border included), with a
//! bounded number of turns. [`PathFinder`] finds the shortest such route and
//! returns it as a [`Path`]; [`LineShape`] tells a front-end how to draw it.
//!
//! # Examples
//!
//! ```
//! use tilelink_core::{Board, Coord};
//! use tilelink_pathfinder::{LineShape, PathFinder};
//!
//! let board: Board = "
//!     ABA
//!     CCC
//! "
//! .parse()?;
//!
//! // B is in the way, so the route goes over it through the top border.
//! let path = PathFinder::new(board.grid())
//!     .find_path(Coord::new(1, 1), Coord::new(3, 1))
//!     .expect("a route over the top exists");
//! assert_eq!(path.bends(), 2);
//! assert_eq!(
//!     path.line_shapes().map(|(_, shape)| shape).nth(1),
//!     Some(LineShape::Horizontal)
//! );
//! # Ok::<(), tilelink_core::BoardParseError>(())
//! ```

pub use self::{
    observer::{SearchObserver, StepKind, StepRecorder},
    path::{LineShape, Path, PathError},
    path_finder::{MAX_TURNS, PathFinder},
};

mod observer;
mod path;
mod path_finder;

#[cfg(test)]
mod testing;
