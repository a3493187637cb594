use tilelink_core::TileId;
use tilelink_generator::GeneratorError;

/// Errors returned by [`BoardSession`](crate::BoardSession) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// A new board could not be generated.
    #[display("board generation failed: {_0}")]
    Generator(#[from] GeneratorError),
    /// The id does not name a tile on the board.
    #[display("no tile {id} on the board")]
    UnknownTile {
        /// The unknown id.
        id: TileId,
    },
}
