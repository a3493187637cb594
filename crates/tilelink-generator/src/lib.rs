//! Board generation for the Tilelink matching game.
//!
//! [`BoardGenerator`] fills a board of random size with random tile types and
//! then repairs type parity, so every tile has at least one partner of the
//! same type. Generation is reproducible from a [`BoardSeed`].
//!
//! [`scramble`] shuffles the tiles of a board in play.
//!
//! # Examples
//!
//! ```
//! use tilelink_generator::{BoardConfig, BoardGenerator, BoardSeed};
//!
//! let config = BoardConfig::new().with_width(4..5).with_height(2..3);
//! let seed = BoardSeed::from_bytes([42; 32]);
//! let generated = BoardGenerator::default().generate_with_seed(&config, seed)?;
//!
//! assert_eq!(generated.board.tile_count(), 8);
//! assert_eq!(generated.seed, seed);
//! # Ok::<(), tilelink_generator::GeneratorError>(())
//! ```

pub use self::{
    config::{BoardConfig, ConfigError},
    generator::{BoardGenerator, GeneratedBoard, GeneratorError},
    scramble::{default_steps, scramble},
    seed::{BoardSeed, SeedParseError},
};

mod config;
mod generator;
mod scramble;
mod seed;
