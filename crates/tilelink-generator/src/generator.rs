use rand::Rng as _;
use tilelink_core::{Board, TileType, TileTypeCatalog};

use crate::{BoardConfig, BoardSeed, ConfigError};

/// Errors returned by [`BoardGenerator`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GeneratorError {
    /// The size bounds cannot produce a board.
    #[display("invalid board configuration: {_0}")]
    InvalidConfig(#[from] ConfigError),
}

/// A board produced by [`BoardGenerator`], with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The generated board.
    pub board: Board,
    /// The seed used for generation.
    pub seed: BoardSeed,
}

/// Generates boards whose tiles can all be paired by type.
///
/// Every interior cell receives a tile of a random type from the catalog.
/// The tile count is always even, and a final repair pass retypes tiles so
/// that every type occurs an even number of times.
///
/// # Examples
///
/// ```
/// use tilelink_generator::{BoardConfig, BoardGenerator};
///
/// let generator = BoardGenerator::default();
/// let generated = generator.generate(&BoardConfig::default())?;
///
/// let board = &generated.board;
/// assert_eq!(board.tile_count() % 2, 0);
/// assert!(board.type_counter().is_balanced());
/// # Ok::<(), tilelink_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardGenerator {
    catalog: TileTypeCatalog,
}

impl BoardGenerator {
    /// Creates a generator drawing tile types from `catalog`.
    #[must_use]
    pub const fn new(catalog: TileTypeCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog tile types are drawn from.
    #[must_use]
    pub const fn catalog(&self) -> &TileTypeCatalog {
        &self.catalog
    }

    /// Generates a board from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if `config` does not validate.
    pub fn generate(&self, config: &BoardConfig) -> Result<GeneratedBoard, GeneratorError> {
        self.generate_with_seed(config, BoardSeed::random())
    }

    /// Generates the board determined by `config`, this generator's catalog and `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if `config` does not validate.
    pub fn generate_with_seed(
        &self,
        config: &BoardConfig,
        seed: BoardSeed,
    ) -> Result<GeneratedBoard, GeneratorError> {
        config.validate()?;
        let mut rng = seed.rng("board");

        let width = rng.random_range(config.width_range());
        let mut height = rng.random_range(config.height_range());
        if (width * height) % 2 == 1 {
            height += 1;
        }
        log::debug!("generating {width}x{height} board from seed {seed}");

        let mut board = Board::new(width, height);
        for coord in board.grid().interior_coords() {
            let ty = self.catalog.random_type(&mut rng);
            board
                .place_tile(coord, ty)
                .expect("interior cells of a new board are free");
        }
        repair_parity(&mut board);
        debug_assert!(board.type_counter().is_balanced());

        Ok(GeneratedBoard { board, seed })
    }
}

/// Retypes tiles until every type occurs an even number of times.
///
/// Each odd type takes the first tile (in id order) of the next odd type,
/// which leaves both even. The tile total is even, so the number of odd types
/// is even and every odd type finds a partner.
pub(crate) fn repair_parity(board: &mut Board) {
    for (i, &a) in TileType::ALL.iter().enumerate() {
        if !board.type_counter().is_odd(a) {
            continue;
        }
        for &b in &TileType::ALL[i + 1..] {
            if !board.type_counter().is_odd(b) {
                continue;
            }
            let Some(id) = board.tiles().find(|tile| tile.ty == b).map(|tile| tile.id) else {
                continue;
            };
            board.retype_tile(id, a);
            log::trace!("parity repair: retyped {id} from {b} to {a}");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tilelink_core::{Cell, Coord};

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    fn seed() -> BoardSeed {
        SEED.parse().unwrap()
    }

    fn assert_board_invariants(board: &Board, config: &BoardConfig) {
        let grid = board.grid();
        assert!(config.width_range().contains(&grid.width()));
        assert!(
            (config.min_height..=config.max_height).contains(&grid.height()),
            "height {} out of range",
            grid.height()
        );
        assert_eq!(board.tile_count(), grid.width() * grid.height());
        assert_eq!(board.tile_count() % 2, 0);
        for (ty, count) in board.type_counter().iter() {
            assert_eq!(count % 2, 0, "type {ty} occurs {count} times");
        }
        for coord in grid.coords().filter(|&c| grid.is_border(c)) {
            assert_eq!(grid.cell(coord), Cell::Empty);
        }
    }

    #[test]
    fn test_generate_default() {
        let config = BoardConfig::default();
        let generated = BoardGenerator::default()
            .generate_with_seed(&config, seed())
            .unwrap();
        assert_eq!(generated.seed, seed());
        assert_board_invariants(&generated.board, &config);
    }

    #[test]
    fn test_same_seed_same_board() {
        let config = BoardConfig::default();
        let generator = BoardGenerator::default();
        let first = generator.generate_with_seed(&config, seed()).unwrap();
        let second = generator.generate_with_seed(&config, seed()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_odd_area_adds_row() {
        let config = BoardConfig::new().with_width(3..4).with_height(3..4);
        let board = BoardGenerator::default()
            .generate_with_seed(&config, seed())
            .unwrap()
            .board;
        assert_eq!((board.grid().width(), board.grid().height()), (3, 4));
        assert_eq!(board.tile_count(), 12);
    }

    #[test]
    fn test_catalog_limits_types() {
        let catalog = TileTypeCatalog::with_type_count(3).unwrap();
        let board = BoardGenerator::new(catalog)
            .generate_with_seed(&BoardConfig::default(), seed())
            .unwrap()
            .board;
        assert!(board.tiles().all(|tile| catalog.contains(tile.ty)));
    }

    #[test]
    fn test_invalid_config() {
        let config = BoardConfig::new().with_width(4..2);
        assert_eq!(
            BoardGenerator::default().generate_with_seed(&config, seed()),
            Err(GeneratorError::InvalidConfig(ConfigError::EmptyWidthRange {
                min: 4,
                max: 2
            }))
        );
    }

    #[test]
    fn test_repair_parity_pairs_odd_types() {
        let mut board: Board = "
            AABC
            CCDD
        "
        .parse()
        .unwrap();
        repair_parity(&mut board);

        // The first C in id order becomes a B.
        assert_eq!(board.to_string(), "AABB\nCCDD");
        assert!(board.type_counter().is_balanced());
    }

    #[test]
    fn test_repair_parity_retypes_one_tile_per_odd_type() {
        let mut board: Board = "ABCD".parse().unwrap();
        repair_parity(&mut board);
        assert_eq!(board.to_string(), "AACC");
        assert_eq!(board.type_counter()[TileType::A], 2);
        assert_eq!(board.type_counter()[TileType::C], 2);
        assert_eq!(board.tile_at(Coord::new(4, 1)).map(|t| t.ty), Some(TileType::C));
    }

    #[test]
    fn test_repair_parity_skips_even_types() {
        let mut board: Board = "
            ABBC
            DDEE
        "
        .parse()
        .unwrap();
        repair_parity(&mut board);

        // A pairs with C, the next odd type; B, D and E are untouched.
        assert_eq!(board.to_string(), "ABBA\nDDEE");
        assert!(board.type_counter().is_balanced());
    }

    #[test]
    fn test_repair_parity_keeps_balanced_board() {
        let mut board: Board = "AB\nBA".parse().unwrap();
        let before = board.clone();
        repair_parity(&mut board);
        assert_eq!(board, before);
    }

    proptest! {
        #[test]
        fn prop_generated_boards_are_pairable(
            bytes in any::<[u8; 32]>(),
            min_width in 1_usize..8,
            extra_width in 1_usize..4,
            min_height in 1_usize..8,
            extra_height in 1_usize..4,
            types in 2_usize..=TileType::COUNT,
        ) {
            let config = BoardConfig::new()
                .with_width(min_width..min_width + extra_width)
                .with_height(min_height..min_height + extra_height);
            let generator = BoardGenerator::new(TileTypeCatalog::with_type_count(types).unwrap());
            let generated = generator
                .generate_with_seed(&config, BoardSeed::from_bytes(bytes))
                .unwrap();
            assert_board_invariants(&generated.board, &config);
        }
    }
}
