//! Game session management for the Tilelink matching game.
//!
//! A [`BoardSession`] holds one board in play: it turns cell clicks into
//! selections and matches, runs the path search, removes matched tiles and
//! keeps the [`GameTimer`]. Everything visible is reported to a
//! [`Presenter`] supplied by the front-end.
//!
//! # Examples
//!
//! ```
//! use tilelink_game::{BoardSession, NullPresenter, SessionConfig};
//! use tilelink_generator::BoardGenerator;
//!
//! let session = BoardSession::generate(
//!     &BoardGenerator::default(),
//!     SessionConfig::default(),
//!     NullPresenter::default(),
//! )?;
//! assert!(session.status().is_playing());
//! assert_eq!(session.board().tile_count() % 2, 0);
//! # Ok::<(), tilelink_game::GameError>(())
//! ```

pub use self::{
    error::GameError,
    presenter::{NullPresenter, Presenter, VisualId, VisualKind},
    session::{BoardSession, ClickOutcome, Selection, SessionConfig, SessionStatus},
    timer::GameTimer,
};

mod error;
pub mod presenter;
mod session;
mod timer;
