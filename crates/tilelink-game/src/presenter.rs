//! The interface a front-end implements to show a session.
//!
//! A [`BoardSession`](crate::BoardSession) calls its presenter whenever
//! something visible changes. The presenter never calls back into the
//! session.

use std::time::Duration;

use tilelink_core::{Coord, TileType};
use tilelink_pathfinder::Path;

/// Handle to a visual created by a [`Presenter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("visual#{_0}")]
pub struct VisualId(pub u64);

/// What a visual shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum VisualKind {
    /// A tile of the given type.
    Tile(TileType),
    /// The selection marker around a tile.
    Highlight,
}

/// Receives the visible effects of a session.
pub trait Presenter {
    /// Shows a new visual on a cell and returns its handle.
    fn spawn_visual(&mut self, kind: VisualKind, coord: Coord) -> VisualId;

    /// Removes a visual once `delay` has passed.
    fn destroy_visual(&mut self, id: VisualId, delay: Duration);

    /// Shows the path of an accepted match.
    fn draw_path(&mut self, path: &Path);
}

impl<P> Presenter for &mut P
where
    P: Presenter + ?Sized,
{
    fn spawn_visual(&mut self, kind: VisualKind, coord: Coord) -> VisualId {
        (**self).spawn_visual(kind, coord)
    }

    fn destroy_visual(&mut self, id: VisualId, delay: Duration) {
        (**self).destroy_visual(id, delay);
    }

    fn draw_path(&mut self, path: &Path) {
        (**self).draw_path(path);
    }
}

impl<P> Presenter for Box<P>
where
    P: Presenter + ?Sized,
{
    fn spawn_visual(&mut self, kind: VisualKind, coord: Coord) -> VisualId {
        (**self).spawn_visual(kind, coord)
    }

    fn destroy_visual(&mut self, id: VisualId, delay: Duration) {
        (**self).destroy_visual(id, delay);
    }

    fn draw_path(&mut self, path: &Path) {
        (**self).draw_path(path);
    }
}

/// A presenter that shows nothing and hands out sequential ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullPresenter {
    next_id: u64,
}

impl Presenter for NullPresenter {
    fn spawn_visual(&mut self, _kind: VisualKind, _coord: Coord) -> VisualId {
        let id = VisualId(self.next_id);
        self.next_id += 1;
        id
    }

    fn destroy_visual(&mut self, _id: VisualId, _delay: Duration) {}

    fn draw_path(&mut self, _path: &Path) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_presenter_ids_are_sequential() {
        let mut presenter = NullPresenter::default();
        let a = presenter.spawn_visual(VisualKind::Highlight, Coord::new(1, 1));
        let b = presenter.spawn_visual(VisualKind::Tile(TileType::C), Coord::new(2, 1));
        assert_eq!((a, b), (VisualId(0), VisualId(1)));
        assert_eq!(b.to_string(), "visual#1");
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        fn spawn_highlight(mut presenter: impl Presenter) -> VisualId {
            presenter.spawn_visual(VisualKind::Highlight, Coord::ORIGIN)
        }

        let mut presenter = NullPresenter::default();
        assert_eq!(spawn_highlight(&mut presenter), VisualId(0));
        assert_eq!(spawn_highlight(&mut presenter), VisualId(1));
        assert_eq!(spawn_highlight(Box::new(presenter)), VisualId(2));
    }
}
