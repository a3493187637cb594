use std::{collections::HashMap, time::Duration};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use tilelink_core::{Board, Coord, Tile, TileId, TileType};
use tilelink_generator::{
    BoardConfig, BoardGenerator, BoardSeed, GeneratedBoard, default_steps, scramble,
};
use tilelink_pathfinder::{Path, PathFinder};

use crate::{GameError, GameTimer, Presenter, VisualId, VisualKind};

/// Settings of a [`BoardSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Size bounds for generated boards.
    pub board: BoardConfig,
    /// Time available at the start of a board.
    pub time_limit: Duration,
    /// Time added on every accepted match.
    pub match_bonus: Duration,
    /// Delay before visuals removed by a match disappear.
    pub effect_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            time_limit: Duration::from_secs(60),
            match_bonus: Duration::from_secs(1),
            effect_delay: Duration::from_millis(400),
        }
    }
}

/// Whether a session still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionStatus {
    /// Tiles remain and time is left.
    Playing,
    /// Every tile has been matched.
    Complete,
    /// The timer ran out first.
    OutOfTime,
}

/// The tile currently selected by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    tile: TileId,
    highlight: VisualId,
}

impl Selection {
    /// Returns the selected tile.
    #[must_use]
    pub const fn tile(&self) -> TileId {
        self.tile
    }

    /// Returns the highlight shown on the selected tile.
    #[must_use]
    pub const fn highlight(&self) -> VisualId {
        self.highlight
    }
}

/// Result of [`BoardSession::click`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum ClickOutcome {
    /// The clicked tile is now selected.
    Selected,
    /// The selected tile was clicked again and is no longer selected.
    Deselected,
    /// Both tiles were removed along this path.
    MatchAccepted(Path),
    /// The tiles differ in type or cannot be connected; the selection is cleared.
    MatchRejected,
    /// The last two tiles were removed along this path.
    BoardComplete(Path),
    /// The click had no effect: no tile there, or the session is over.
    Ignored,
}

/// A game in progress on one board.
///
/// The session owns the board, the current selection, the timer and the
/// presenter showing them. Every change goes through `&mut self`, so a
/// search always sees the board as it is between two clicks.
///
/// # Examples
///
/// ```
/// use tilelink_core::{Board, Coord};
/// use tilelink_game::{BoardSession, ClickOutcome, NullPresenter, SessionConfig};
///
/// let board: Board = "AB\nAB".parse()?;
/// let mut session = BoardSession::from_board(board, SessionConfig::default(), NullPresenter::default());
///
/// assert_eq!(session.click(Coord::new(1, 1)), ClickOutcome::Selected);
/// let outcome = session.click(Coord::new(1, 2));
/// assert!(outcome.is_match_accepted());
/// assert_eq!(session.tile_at(Coord::new(1, 1)), None);
/// # Ok::<(), tilelink_core::BoardParseError>(())
/// ```
#[derive(Debug)]
pub struct BoardSession<P> {
    config: SessionConfig,
    board: Board,
    seed: Option<BoardSeed>,
    presenter: P,
    tile_visuals: HashMap<TileId, VisualId>,
    selection: Option<Selection>,
    timer: GameTimer,
    status: SessionStatus,
    rng: Pcg64,
}

impl<P> BoardSession<P>
where
    P: Presenter,
{
    /// Generates a board and starts a session on it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Generator`] if `config.board` is invalid.
    pub fn generate(
        generator: &BoardGenerator,
        config: SessionConfig,
        presenter: P,
    ) -> Result<Self, GameError> {
        let generated = generator.generate(&config.board)?;
        Ok(Self::from_generated(generated, config, presenter))
    }

    /// Starts a session on a generated board, seeding scrambles from its seed.
    #[must_use]
    pub fn from_generated(generated: GeneratedBoard, config: SessionConfig, presenter: P) -> Self {
        let GeneratedBoard { board, seed } = generated;
        let mut this = Self::from_board(board, config, presenter);
        this.seed = Some(seed);
        this.rng = seed.rng("scramble");
        this
    }

    /// Starts a session on an existing board.
    #[must_use]
    pub fn from_board(board: Board, config: SessionConfig, presenter: P) -> Self {
        let mut this = Self {
            config,
            board,
            seed: None,
            presenter,
            tile_visuals: HashMap::new(),
            selection: None,
            timer: GameTimer::new(config.time_limit, config.match_bonus),
            status: SessionStatus::Playing,
            rng: Pcg64::from_rng(&mut rand::rng()),
        };
        this.start();
        this
    }

    /// Replaces the scramble random stream, for reproducible sessions.
    #[must_use]
    pub fn with_rng(mut self, rng: Pcg64) -> Self {
        self.rng = rng;
        self
    }

    /// Handles a click on a cell.
    ///
    /// The first click on a tile selects it. A second click on the same tile
    /// clears the selection. A click on another tile ends the selection: the
    /// two tiles are removed when they share a type and a path connects
    /// them, otherwise the match is rejected.
    pub fn click(&mut self, coord: Coord) -> ClickOutcome {
        if !self.status.is_playing() {
            return ClickOutcome::Ignored;
        }
        let Some(&clicked) = self.board.tile_at(coord) else {
            return ClickOutcome::Ignored;
        };

        let Some(selection) = self.selection.take() else {
            let highlight = self.presenter.spawn_visual(VisualKind::Highlight, coord);
            self.selection = Some(Selection {
                tile: clicked.id,
                highlight,
            });
            log::debug!("selected {} at {coord}", clicked.id);
            return ClickOutcome::Selected;
        };

        if selection.tile == clicked.id {
            self.presenter
                .destroy_visual(selection.highlight, Duration::ZERO);
            log::debug!("deselected {}", clicked.id);
            return ClickOutcome::Deselected;
        }

        let selected = *self
            .board
            .tile(selection.tile)
            .expect("the selected tile stays on the board until matched");
        let path = if selected.ty == clicked.ty {
            PathFinder::new(self.board.grid()).find_path(selected.coord, clicked.coord)
        } else {
            None
        };
        let Some(path) = path else {
            self.presenter
                .destroy_visual(selection.highlight, Duration::ZERO);
            log::debug!("rejected match {} -> {}", selected.coord, clicked.coord);
            return ClickOutcome::MatchRejected;
        };

        self.presenter.draw_path(&path);
        self.presenter
            .destroy_visual(selection.highlight, self.config.effect_delay);
        self.remove_matched(selected);
        self.remove_matched(clicked);
        self.timer.add_bonus();
        log::debug!(
            "matched {} -> {} with {} bends, {} tiles left",
            selected.coord,
            clicked.coord,
            path.bends(),
            self.board.tile_count()
        );

        if self.board.is_empty() {
            self.status = SessionStatus::Complete;
            log::debug!("board complete");
            return ClickOutcome::BoardComplete(path);
        }
        ClickOutcome::MatchAccepted(path)
    }

    /// Discards the current board and starts over on a freshly generated one.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Generator`] if the configured board size is
    /// invalid; the current board is kept in that case.
    pub fn new_board(&mut self, generator: &BoardGenerator) -> Result<(), GameError> {
        let generated = generator.generate(&self.config.board)?;
        self.clear_visuals();
        self.board = generated.board;
        self.seed = Some(generated.seed);
        self.rng = generated.seed.rng("scramble");
        self.start();
        Ok(())
    }

    /// Moves the remaining tiles to random cells.
    ///
    /// Uses one swap per remaining tile. The selection is cleared and every
    /// tile visual is spawned again at its new cell.
    pub fn scramble(&mut self) {
        if !self.status.is_playing() {
            return;
        }
        self.clear_visuals();
        let steps = default_steps(&self.board);
        scramble(&mut self.board, steps, &mut self.rng);
        self.spawn_tiles();
    }

    /// Counts down the timer. Returns the status afterwards.
    ///
    /// Time only passes while the session is playing. Running out of time
    /// clears the selection and ends the session.
    pub fn advance_time(&mut self, elapsed: Duration) -> SessionStatus {
        if self.status.is_playing() && self.timer.advance(elapsed) {
            self.status = SessionStatus::OutOfTime;
            if let Some(selection) = self.selection.take() {
                self.presenter
                    .destroy_visual(selection.highlight, Duration::ZERO);
            }
            log::debug!("out of time with {} tiles left", self.board.tile_count());
        }
        self.status
    }

    fn start(&mut self) {
        self.selection = None;
        self.timer.reset();
        self.status = if self.board.is_empty() {
            SessionStatus::Complete
        } else {
            SessionStatus::Playing
        };
        self.spawn_tiles();
        log::debug!(
            "started {}x{} board with {} tiles",
            self.board.grid().width(),
            self.board.grid().height(),
            self.board.tile_count()
        );
    }

    fn spawn_tiles(&mut self) {
        for tile in self.board.tiles() {
            let visual = self
                .presenter
                .spawn_visual(VisualKind::Tile(tile.ty), tile.coord);
            self.tile_visuals.insert(tile.id, visual);
        }
    }

    fn clear_visuals(&mut self) {
        if let Some(selection) = self.selection.take() {
            self.presenter
                .destroy_visual(selection.highlight, Duration::ZERO);
        }
        for (_, visual) in self.tile_visuals.drain() {
            self.presenter.destroy_visual(visual, Duration::ZERO);
        }
    }

    fn remove_matched(&mut self, tile: Tile) {
        self.board.remove_tile(tile.id);
        if let Some(visual) = self.tile_visuals.remove(&tile.id) {
            self.presenter
                .destroy_visual(visual, self.config.effect_delay);
        }
    }
}

impl<P> BoardSession<P> {
    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the id of the tile on a cell, if any.
    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> Option<TileId> {
        self.board.grid().tile_at(coord)
    }

    /// Returns the type of a tile.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownTile`] if the tile is not on the board.
    pub fn tile_type(&self, id: TileId) -> Result<TileType, GameError> {
        self.board
            .tile(id)
            .map(|tile| tile.ty)
            .ok_or(GameError::UnknownTile { id })
    }

    /// Returns the visual showing a tile, if any.
    #[must_use]
    pub fn tile_visual(&self, id: TileId) -> Option<VisualId> {
        self.tile_visuals.get(&id).copied()
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Returns the session status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the settings.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the seed of the current board, if it was generated.
    #[must_use]
    pub fn seed(&self) -> Option<BoardSeed> {
        self.seed
    }

    /// Returns the timer.
    #[must_use]
    pub fn timer(&self) -> &GameTimer {
        &self.timer
    }

    /// Returns the time left.
    #[must_use]
    pub fn time_remaining(&self) -> Duration {
        self.timer.remaining()
    }

    /// Returns the time left as a fraction of the limit.
    #[must_use]
    pub fn time_fraction(&self) -> f32 {
        self.timer.fraction()
    }

    /// Returns the presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
