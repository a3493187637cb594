//! Test utilities for path search.
//!
//! [`PathTester`] runs a search on a board written in text form and checks
//! the result with chained assertions:
//!
//! ```text
//! PathTester::from_str("A.A")
//!     .find((1, 1), (3, 1))
//!     .assert_len(3)
//!     .assert_bends(0);
//! ```

use tilelink_core::{Board, Coord};

use crate::{MAX_TURNS, Path, PathFinder};

/// A test harness for path search results.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the calling test's location.
#[derive(Debug)]
pub struct PathTester {
    board: Board,
    search: Option<(Coord, Coord, Option<Path>)>,
}

impl PathTester {
    /// Creates a tester from a board in text form.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid board.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let board = s.parse().unwrap_or_else(|e| panic!("invalid board text: {e}"));
        Self {
            board,
            search: None,
        }
    }

    /// Runs a search between two cells given as `(x, y)` pairs.
    #[must_use]
    pub fn find(mut self, source: (i32, i32), target: (i32, i32)) -> Self {
        let (source, target) = (Coord::from(source), Coord::from(target));
        let path = PathFinder::new(self.board.grid()).find_path(source, target);
        self.search = Some((source, target, path));
        self
    }

    #[track_caller]
    fn path(&self) -> &Path {
        let Some((source, target, path)) = &self.search else {
            panic!("call find() before asserting on the result");
        };
        path.as_ref().unwrap_or_else(|| {
            panic!(
                "expected a path {source} -> {target}, found none on\n{}",
                self.board
            )
        })
    }

    /// Asserts that no path was found.
    #[track_caller]
    pub fn assert_none(self) -> Self {
        let Some((source, target, path)) = &self.search else {
            panic!("call find() before asserting on the result");
        };
        if let Some(path) = path {
            panic!("expected no path {source} -> {target}, found {path}");
        }
        self
    }

    /// Asserts the number of points, source and target included.
    #[track_caller]
    pub fn assert_len(self, len: usize) -> Self {
        let path = self.path();
        assert_eq!(path.len(), len, "unexpected length of {path}");
        self
    }

    /// Asserts the number of direction changes.
    #[track_caller]
    pub fn assert_bends(self, bends: u8) -> Self {
        let path = self.path();
        assert_eq!(path.bends(), bends, "unexpected bends of {path}");
        self
    }

    /// Asserts the turn count, the first heading included.
    #[track_caller]
    pub fn assert_turns(self, turns: u8) -> Self {
        let path = self.path();
        assert_eq!(path.turns(), turns, "unexpected turns of {path}");
        self
    }

    /// Asserts the exact points of the path.
    #[track_caller]
    pub fn assert_points(self, points: &[(i32, i32)]) -> Self {
        let path = self.path();
        let expected: Vec<Coord> = points.iter().copied().map(Coord::from).collect();
        assert_eq!(path.points(), expected.as_slice(), "unexpected route {path}");
        self
    }

    /// Asserts that the path is made of unit steps within the turn cap.
    #[track_caller]
    pub fn assert_well_formed(self) -> Self {
        let path = self.path();
        let rebuilt = Path::from_points(path.points().to_vec())
            .unwrap_or_else(|e| panic!("malformed path {path}: {e}"));
        assert_eq!(rebuilt.turns(), path.turns(), "turn count mismatch on {path}");
        assert!(path.turns() <= MAX_TURNS, "too many turns on {path}");
        self
    }

    /// Asserts that no interior point of the path crosses a tile or a wall.
    #[track_caller]
    pub fn assert_none_through_tiles(self) -> Self {
        let path = self.path();
        let grid = self.board.grid();
        for &point in &path.points()[1..path.len() - 1] {
            assert!(grid.in_bounds(point), "{path} leaves the grid at {point}");
            assert!(!grid.is_occupied(point), "{path} crosses a tile at {point}");
        }
        self
    }
}
