//! Grid coordinates and directions.

use std::ops::{Add, Neg, Sub};

/// A cell coordinate on a [`Grid`](crate::Grid).
///
/// `x` grows to the right and `y` grows downwards. Coordinates are signed so
/// that stepping off the edge of the grid yields a representable (but out of
/// bounds) value instead of an overflow.
///
/// # Examples
///
/// ```
/// use tilelink_core::{Coord, Direction};
///
/// let a = Coord::new(1, 1);
/// let b = a + Direction::Right.delta();
/// assert_eq!(b, Coord::new(2, 1));
/// assert_eq!(a.direction_to(b), Direction::Right);
/// assert_eq!(b - a, Coord::new(1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Coord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Coord {
    /// The origin `(0, 0)`, which is always a border cell.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a coordinate.
    #[must_use]
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this coordinate with each axis reduced to `-1`, `0` or `1`.
    #[must_use]
    #[inline]
    pub const fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// Classifies the direction from `self` towards `other`.
    ///
    /// Any non-zero delta is normalized to a unit step per axis before
    /// classification, so `(1, 1)` to `(5, 3)` is [`Direction::DownRight`].
    #[must_use]
    pub fn direction_to(self, other: Self) -> Direction {
        Direction::from_delta(other - self)
    }

    /// Returns the Manhattan distance between two coordinates.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns the neighbouring coordinate one step in `direction`.
    #[must_use]
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        self + direction.delta()
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A coarse direction between two cells.
///
/// Only [`Up`](Self::Up), [`Down`](Self::Down), [`Left`](Self::Left) and
/// [`Right`](Self::Right) are movement steps. The diagonals and
/// [`Nowhere`](Self::Nowhere) only come out of [`Direction::from_delta`],
/// which is used to classify turns when drawing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Direction {
    /// Towards smaller `y`.
    Up,
    /// Towards larger `y`.
    Down,
    /// Towards smaller `x`.
    Left,
    /// Towards larger `x`.
    Right,
    /// Up and left.
    UpLeft,
    /// Up and right.
    UpRight,
    /// Down and left.
    DownLeft,
    /// Down and right.
    DownRight,
    /// No movement.
    Nowhere,
}

impl Direction {
    /// The four movement directions, in the order the path search tries them.
    pub const STEPS: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Classifies a delta by the sign of each axis.
    #[must_use]
    pub fn from_delta(delta: Coord) -> Self {
        match (delta.x.signum(), delta.y.signum()) {
            (0, -1) => Self::Up,
            (0, 1) => Self::Down,
            (-1, 0) => Self::Left,
            (1, 0) => Self::Right,
            (-1, -1) => Self::UpLeft,
            (1, -1) => Self::UpRight,
            (-1, 1) => Self::DownLeft,
            (1, 1) => Self::DownRight,
            _ => Self::Nowhere,
        }
    }

    /// Returns the unit delta of this direction.
    #[must_use]
    pub const fn delta(self) -> Coord {
        match self {
            Self::Up => Coord::new(0, -1),
            Self::Down => Coord::new(0, 1),
            Self::Left => Coord::new(-1, 0),
            Self::Right => Coord::new(1, 0),
            Self::UpLeft => Coord::new(-1, -1),
            Self::UpRight => Coord::new(1, -1),
            Self::DownLeft => Coord::new(-1, 1),
            Self::DownRight => Coord::new(1, 1),
            Self::Nowhere => Coord::ORIGIN,
        }
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::from_delta(-self.delta())
    }

    /// Returns `true` for the four axis-aligned movement directions.
    #[must_use]
    pub const fn is_step(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }
}
