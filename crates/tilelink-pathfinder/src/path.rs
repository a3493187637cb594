use std::fmt::{self, Display};

use tilelink_core::{Coord, Direction};

/// A connecting route between two cells.
///
/// A path holds every cell it passes through, source and target included.
/// Consecutive points are one axis-aligned step apart and the route never
/// doubles back on itself.
///
/// Turns are counted the way the search counts them: the first heading counts
/// as one turn, and every later change of direction adds one. [`Path::bends`]
/// gives the number of direction changes only.
///
/// # Examples
///
/// ```
/// use tilelink_core::Coord;
/// use tilelink_pathfinder::Path;
///
/// let path = Path::from_points(vec![
///     Coord::new(1, 1),
///     Coord::new(1, 0),
///     Coord::new(2, 0),
///     Coord::new(2, 1),
/// ])?;
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.turns(), 3);
/// assert_eq!(path.bends(), 2);
/// # Ok::<(), tilelink_pathfinder::PathError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    points: Vec<Coord>,
    turns: u8,
}

/// Errors returned by [`Path::from_points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PathError {
    /// A path needs at least a source and a target.
    #[display("a path needs at least two points, got {len}")]
    TooShort {
        /// Number of points given.
        len: usize,
    },
    /// Two consecutive points are not one axis-aligned step apart.
    #[display("point {index} is not adjacent to the next one")]
    NotAdjacent {
        /// Index of the first point of the offending pair.
        index: usize,
    },
    /// The path steps straight back onto the cell it came from.
    #[display("path reverses direction at point {index}")]
    Reversal {
        /// Index of the point where the reversal happens.
        index: usize,
    },
}

impl Path {
    pub(crate) fn new(points: Vec<Coord>, turns: u8) -> Self {
        debug_assert!(points.len() >= 2);
        Self { points, turns }
    }

    /// Builds a path from its points, validating its shape and counting turns.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] if there are fewer than two points, if two
    /// consecutive points are not adjacent, or if the path reverses.
    pub fn from_points(points: Vec<Coord>) -> Result<Self, PathError> {
        if points.len() < 2 {
            return Err(PathError::TooShort { len: points.len() });
        }
        let mut turns = 0_u8;
        let mut previous: Option<Direction> = None;
        for (index, pair) in points.windows(2).enumerate() {
            if pair[0].manhattan_distance(pair[1]) != 1 {
                return Err(PathError::NotAdjacent { index });
            }
            let direction = pair[0].direction_to(pair[1]);
            if previous.is_some_and(|p| p.opposite() == direction) {
                return Err(PathError::Reversal { index });
            }
            if previous != Some(direction) {
                turns = turns.saturating_add(1);
            }
            previous = Some(direction);
        }
        Ok(Self { points, turns })
    }

    /// Returns every cell on the path, source first.
    #[must_use]
    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// Returns the starting cell.
    #[must_use]
    pub fn source(&self) -> Coord {
        self.points[0]
    }

    /// Returns the final cell.
    #[must_use]
    pub fn target(&self) -> Coord {
        self.points[self.points.len() - 1]
    }

    /// Returns the number of points, source and target included.
    #[must_use]
    #[expect(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of unit steps (`len() - 1`).
    #[must_use]
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns the number of headings taken, the first one included.
    #[must_use]
    pub fn turns(&self) -> u8 {
        self.turns
    }

    /// Returns the number of direction changes along the path.
    #[must_use]
    pub fn bends(&self) -> u8 {
        self.turns.saturating_sub(1)
    }

    /// Returns the direction of each step, in order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.points.windows(2).map(|w| w[0].direction_to(w[1]))
    }

    /// Returns the line shape to draw on each interior point of the path.
    ///
    /// Source and target are not included: they hold the matched tiles.
    pub fn line_shapes(&self) -> impl Iterator<Item = (Coord, LineShape)> + '_ {
        self.points.windows(3).map(|w| {
            let incoming = w[0].direction_to(w[1]);
            let outgoing = w[1].direction_to(w[2]);
            let shape = LineShape::classify(incoming, outgoing)
                .expect("paths only hold adjacent, non-reversing steps");
            (w[1], shape)
        })
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{point}")?;
        }
        Ok(())
    }
}

/// The piece of line drawn through one interior point of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum LineShape {
    /// Connects the left and right neighbours.
    Horizontal,
    /// Connects the upper and lower neighbours.
    Vertical,
    /// Connects the two sides named by the diagonal, e.g.
    /// [`Direction::UpLeft`] joins the upper and left neighbours.
    ///
    /// The diagonal names the sides the line touches, not the headings
    /// travelled. Entering moving down and leaving moving left gives
    /// `Corner(UpLeft)`, drawn `┘`. Art keyed by travel headings calls the
    /// same corner bottom-left, so map it through the touched sides.
    Corner(Direction),
}

impl LineShape {
    /// Classifies the shape through a cell entered moving `incoming` and left
    /// moving `outgoing`.
    ///
    /// Returns `None` unless both are movement steps and `outgoing` does not
    /// reverse `incoming`.
    #[must_use]
    pub fn classify(incoming: Direction, outgoing: Direction) -> Option<Self> {
        if !incoming.is_step() || !outgoing.is_step() || outgoing == incoming.opposite() {
            return None;
        }
        if incoming == outgoing {
            return Some(match incoming {
                Direction::Left | Direction::Right => Self::Horizontal,
                _ => Self::Vertical,
            });
        }
        // The corner touches the side we came from and the side we leave by.
        let sides = incoming.opposite().delta() + outgoing.delta();
        Some(Self::Corner(Direction::from_delta(sides)))
    }

    /// Returns the character used to draw this shape in text.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Horizontal => '─',
            Self::Vertical => '│',
            Self::Corner(Direction::UpLeft) => '┘',
            Self::Corner(Direction::UpRight) => '└',
            Self::Corner(Direction::DownLeft) => '┐',
            Self::Corner(Direction::DownRight) => '┌',
            Self::Corner(_) => '+',
        }
    }
}
