//! Tile types, their display colors, and per-type counters.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use rand::Rng;

/// The type of a tile. Two tiles match iff their types are equal.
///
/// # Examples
///
/// ```
/// use tilelink_core::TileType;
///
/// assert_eq!(TileType::ALL.len(), TileType::COUNT);
/// assert_eq!(TileType::from_index(2), Some(TileType::C));
/// assert_eq!(TileType::from_index(TileType::COUNT as u8), None);
/// assert_eq!(TileType::from_letter('n'), Some(TileType::N));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TileType {
    /// Tile type A.
    A = 0,
    /// Tile type B.
    B,
    /// Tile type C.
    C,
    /// Tile type D.
    D,
    /// Tile type E.
    E,
    /// Tile type F.
    F,
    /// Tile type G.
    G,
    /// Tile type H.
    H,
    /// Tile type I.
    I,
    /// Tile type J.
    J,
    /// Tile type K.
    K,
    /// Tile type L.
    L,
    /// Tile type M.
    M,
    /// Tile type N.
    N,
}

impl TileType {
    /// Number of tile types. Also the first index that is not a type.
    pub const COUNT: usize = 14;

    /// All tile types in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
    ];

    /// Returns the zero-based index of this type.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the type at `index`, or `None` if it is out of range.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Returns the upper-case letter naming this type.
    #[must_use]
    pub fn letter(self) -> char {
        char::from(b'A' + self as u8)
    }

    /// Parses a type from its letter (either case).
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        let byte = u8::try_from(upper).ok()?;
        Self::from_index(byte - b'A')
    }
}

impl Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An RGBA display color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
#[display("rgba({r}, {g}, {b}, {a})")]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

const PALETTE: [Color; TileType::COUNT] = [
    Color::rgb(0.0, 0.0, 1.0),
    Color::rgb(0.0, 1.0, 1.0),
    Color::rgb(0.0, 1.0, 0.0),
    Color::rgb(1.0, 0.0, 1.0),
    Color::rgb(1.0, 0.0, 0.0),
    Color::rgb(1.0, 0.92, 0.016),
    Color::rgb(0.5, 0.5, 0.5),
    Color::rgb(1.0, 1.0, 1.0),
    Color::rgb(0.5, 0.0, 0.0),
    Color::rgb(0.0, 0.5, 0.0),
    Color::rgb(0.0, 0.0, 0.5),
    Color::rgb(0.0, 0.5, 0.5),
    Color::rgb(0.5, 0.5, 0.0),
    Color::rgb(0.5, 0.0, 0.5),
];

/// Errors reported by a [`TileTypeCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CatalogError {
    /// The type index is the sentinel or is not defined by the catalog.
    #[display("unrecognized tile type index: {index}")]
    UnrecognizedType {
        /// The offending index.
        index: usize,
    },
    /// A catalog must hold between 2 and [`TileType::COUNT`] types.
    #[display("invalid tile type count: {count} (expected 2..=14)")]
    InvalidTypeCount {
        /// The requested count.
        count: usize,
    },
}

/// The set of tile types a board is built from.
///
/// A catalog uses the first `type_count` types of [`TileType::ALL`]. Fewer types
/// make boards with more pairs of each type.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use tilelink_core::{TileType, TileTypeCatalog};
///
/// let catalog = TileTypeCatalog::with_type_count(3)?;
/// assert_eq!(catalog.type_count(), 3);
/// assert!(catalog.color_of(TileType::C).is_ok());
/// assert!(catalog.color_of(TileType::D).is_err());
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let ty = catalog.random_type(&mut rng);
/// assert!(catalog.contains(ty));
/// # Ok::<(), tilelink_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileTypeCatalog {
    type_count: usize,
}

impl Default for TileTypeCatalog {
    fn default() -> Self {
        Self::full()
    }
}

impl TileTypeCatalog {
    /// Creates a catalog with every tile type.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            type_count: TileType::COUNT,
        }
    }

    /// Creates a catalog with the first `count` tile types.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidTypeCount`] unless `2 <= count <= TileType::COUNT`.
    pub fn with_type_count(count: usize) -> Result<Self, CatalogError> {
        if !(2..=TileType::COUNT).contains(&count) {
            return Err(CatalogError::InvalidTypeCount { count });
        }
        Ok(Self { type_count: count })
    }

    /// Returns the number of distinct types in this catalog.
    #[must_use]
    pub const fn type_count(&self) -> usize {
        self.type_count
    }

    /// Returns the types of this catalog in index order.
    #[must_use]
    pub fn types(&self) -> &'static [TileType] {
        &TileType::ALL[..self.type_count]
    }

    /// Returns `true` if `ty` belongs to this catalog.
    #[must_use]
    pub const fn contains(&self, ty: TileType) -> bool {
        ty.index() < self.type_count
    }

    /// Picks a type uniformly at random.
    pub fn random_type<R>(&self, rng: &mut R) -> TileType
    where
        R: Rng + ?Sized,
    {
        TileType::ALL[rng.random_range(0..self.type_count)]
    }

    /// Returns the display color of a type.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnrecognizedType`] if the type is not part of
    /// this catalog.
    pub fn color_of(&self, ty: TileType) -> Result<Color, CatalogError> {
        self.color_of_index(ty.index())
    }

    /// Returns the display color of the type with the given raw index.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnrecognizedType`] for the sentinel index
    /// [`TileType::COUNT`] and for any index outside this catalog.
    pub fn color_of_index(&self, index: usize) -> Result<Color, CatalogError> {
        if index >= self.type_count {
            return Err(CatalogError::UnrecognizedType { index });
        }
        Ok(PALETTE[index])
    }
}

/// Number of live tiles per [`TileType`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileTypeCounter {
    counts: [usize; TileType::COUNT],
}

impl TileTypeCounter {
    /// Creates a counter with every count at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; TileType::COUNT],
        }
    }

    /// Increments the count of `ty`.
    pub fn increment(&mut self, ty: TileType) {
        self.counts[ty.index()] += 1;
    }

    /// Decrements the count of `ty`.
    ///
    /// # Panics
    ///
    /// Panics if the count is already zero.
    pub fn decrement(&mut self, ty: TileType) {
        let count = &mut self.counts[ty.index()];
        *count = count
            .checked_sub(1)
            .expect("tile type count must not underflow");
    }

    /// Returns the total of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Returns `true` if the count of `ty` is odd.
    #[must_use]
    pub fn is_odd(&self, ty: TileType) -> bool {
        self.counts[ty.index()] % 2 == 1
    }

    /// Returns the types whose count is odd, in index order.
    pub fn odd_types(&self) -> impl Iterator<Item = TileType> + '_ {
        TileType::ALL.into_iter().filter(|&ty| self.is_odd(ty))
    }

    /// Returns `true` if every type has an even count.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.odd_types().next().is_none()
    }

    /// Iterates over `(type, count)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (TileType, usize)> + '_ {
        TileType::ALL.into_iter().zip(self.counts)
    }
}

impl Index<TileType> for TileTypeCounter {
    type Output = usize;

    fn index(&self, ty: TileType) -> &usize {
        &self.counts[ty.index()]
    }
}
