use tilelink_core::Coord;

/// What the search decided about a visited cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum StepKind {
    /// The cell is free and the search branches from it.
    Checked,
    /// The branch hit a wall or a blocking tile.
    Terminated,
    /// The branch could not beat the best path found so far.
    Pruned,
    /// The branch reached the target.
    Found,
}

/// Receives a notification for every cell the search visits.
///
/// The search never depends on what an observer does; `()` is the no-op
/// observer used by default.
pub trait SearchObserver {
    /// Called once per visited cell, after the search has classified it.
    fn on_step_visited(&mut self, coord: Coord, kind: StepKind);
}

impl SearchObserver for () {
    #[inline]
    fn on_step_visited(&mut self, _coord: Coord, _kind: StepKind) {}
}

impl<O> SearchObserver for &mut O
where
    O: SearchObserver + ?Sized,
{
    fn on_step_visited(&mut self, coord: Coord, kind: StepKind) {
        (**self).on_step_visited(coord, kind);
    }
}

/// An observer that records every visit in order.
///
/// # Examples
///
/// ```
/// use tilelink_core::{Board, Coord};
/// use tilelink_pathfinder::{PathFinder, StepKind, StepRecorder};
///
/// let board: Board = "AA".parse()?;
/// let mut recorder = StepRecorder::default();
/// let path = PathFinder::new(board.grid())
///     .with_observer(&mut recorder)
///     .find_path(Coord::new(1, 1), Coord::new(2, 1));
///
/// assert_eq!(path.map(|p| p.len()), Some(2));
/// assert_eq!(recorder.steps()[0], (Coord::new(1, 1), StepKind::Checked));
/// assert!(recorder.count(StepKind::Found) >= 1);
/// # Ok::<(), tilelink_core::BoardParseError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepRecorder {
    steps: Vec<(Coord, StepKind)>,
}

impl StepRecorder {
    /// Returns the recorded visits in order.
    #[must_use]
    pub fn steps(&self) -> &[(Coord, StepKind)] {
        &self.steps
    }

    /// Returns how many visits were classified as `kind`.
    #[must_use]
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|(_, k)| *k == kind).count()
    }
}

impl SearchObserver for StepRecorder {
    fn on_step_visited(&mut self, coord: Coord, kind: StepKind) {
        self.steps.push((coord, kind));
    }
}
