use tilelink_core::{Coord, Direction, Grid};

use crate::{Path, SearchObserver, StepKind};

/// Default cap on turns, counting the first heading as one turn.
///
/// A cap of 3 allows paths made of up to three straight segments.
pub const MAX_TURNS: u8 = 3;

/// Finds the shortest admissible path connecting two tiles.
///
/// A path moves one cell at a time along the axes, never steps straight back,
/// and takes at most [`MAX_TURNS`] headings (the first one included). It may
/// run through empty cells and the border, but not through any other tile.
/// Only cells outside the grid's total extents are walls.
///
/// The search is a depth-first recursion that keeps the best path found so
/// far and prunes every branch that cannot be strictly shorter. At each cell
/// the current heading is tried first, then [`Direction::STEPS`] order, so
/// among paths of equal length the one found first under that order wins.
///
/// # Examples
///
/// ```
/// use tilelink_core::{Board, Coord};
/// use tilelink_pathfinder::PathFinder;
///
/// let board: Board = "
///     A.A
///     BBB
/// "
/// .parse()?;
/// let path = PathFinder::new(board.grid())
///     .find_path(Coord::new(1, 1), Coord::new(3, 1))
///     .expect("the middle cell is free");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.bends(), 0);
///
/// // Neighbouring tiles connect directly.
/// let path = PathFinder::new(board.grid()).find_path(Coord::new(2, 2), Coord::new(3, 2));
/// assert_eq!(path.map(|p| p.len()), Some(2));
/// # Ok::<(), tilelink_core::BoardParseError>(())
/// ```
#[derive(Debug)]
pub struct PathFinder<'a, O = ()> {
    grid: &'a Grid,
    observer: O,
    max_turns: u8,
}

impl<'a> PathFinder<'a> {
    /// Creates a path finder over `grid` with the default turn cap and no observer.
    #[must_use]
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            observer: (),
            max_turns: MAX_TURNS,
        }
    }
}

impl<'a, O> PathFinder<'a, O>
where
    O: SearchObserver,
{
    /// Replaces the observer notified of every visited cell.
    #[must_use]
    pub fn with_observer<P>(self, observer: P) -> PathFinder<'a, P>
    where
        P: SearchObserver,
    {
        PathFinder {
            grid: self.grid,
            observer,
            max_turns: self.max_turns,
        }
    }

    /// Sets the turn cap, counting the first heading as one turn.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u8) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Returns the observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consumes the path finder and returns the observer.
    #[must_use]
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Finds the shortest path from `source` to `target`.
    ///
    /// `source` is passable as the starting cell only; every other occupied
    /// cell blocks, except that arriving on `target` is a success even though
    /// its tile sits there. Returns `None` when `source == target` or when no
    /// admissible path exists.
    pub fn find_path(&mut self, source: Coord, target: Coord) -> Option<Path> {
        if source == target {
            return None;
        }
        let mut search = Search {
            grid: self.grid,
            target,
            max_turns: self.max_turns,
            max_len: 2 * (self.grid.total_width() + self.grid.total_height()),
            observer: &mut self.observer,
            points: vec![source],
            best: None,
        };
        search.visit(None, 0);
        let best = search.best;

        match &best {
            Some(path) => log::trace!(
                "path {source} -> {target}: {} points, {} turns",
                path.len(),
                path.turns()
            ),
            None => log::trace!("path {source} -> {target}: none"),
        }
        best
    }
}

/// Mutable state of one search, threaded through the recursion.
struct Search<'g, 'o, O> {
    grid: &'g Grid,
    target: Coord,
    max_turns: u8,
    /// Hard ceiling on path length; no path within the turn cap is longer.
    max_len: usize,
    observer: &'o mut O,
    points: Vec<Coord>,
    best: Option<Path>,
}

impl<O> Search<'_, '_, O>
where
    O: SearchObserver,
{
    fn visit(&mut self, heading: Option<Direction>, turns: u8) {
        let pos = *self.points.last().expect("the path always holds the source");

        if pos == self.target {
            if self
                .best
                .as_ref()
                .is_none_or(|best| self.points.len() < best.len())
            {
                self.best = Some(Path::new(self.points.clone(), turns));
            }
            self.observer.on_step_visited(pos, StepKind::Found);
            return;
        }

        let beaten = self
            .best
            .as_ref()
            .is_some_and(|best| self.points.len() + 1 >= best.len());
        if beaten || self.points.len() >= self.max_len {
            self.observer.on_step_visited(pos, StepKind::Pruned);
            return;
        }

        let is_start = self.points.len() == 1;
        if !self.grid.in_bounds(pos) || (!is_start && self.grid.is_occupied(pos)) {
            self.observer.on_step_visited(pos, StepKind::Terminated);
            return;
        }
        self.observer.on_step_visited(pos, StepKind::Checked);

        for direction in heading_first(heading) {
            if heading.is_some_and(|h| h.opposite() == direction) {
                continue;
            }
            let turns = if heading == Some(direction) {
                turns
            } else {
                turns.saturating_add(1)
            };
            if turns > self.max_turns {
                continue;
            }
            self.points.push(pos.step(direction));
            self.visit(Some(direction), turns);
            self.points.pop();
        }
    }
}

/// Movement directions with the current heading moved to the front.
fn heading_first(heading: Option<Direction>) -> impl Iterator<Item = Direction> {
    heading.into_iter().chain(
        Direction::STEPS
            .into_iter()
            .filter(move |&d| Some(d) != heading),
    )
}

#[cfg(test)]
mod tests {
    use tilelink_core::{Board, Coord};

    use super::*;
    use crate::{StepRecorder, testing::PathTester};

    #[test]
    fn test_heading_first_order() {
        assert_eq!(heading_first(None).collect::<Vec<_>>(), Direction::STEPS);
        assert_eq!(
            heading_first(Some(Direction::Left)).collect::<Vec<_>>(),
            [
                Direction::Left,
                Direction::Up,
                Direction::Down,
                Direction::Right
            ]
        );
    }

    #[test]
    fn test_straight_line() {
        // Five empty cells between the pair: 7 points, no bends.
        PathTester::from_str("A.....A")
            .find((1, 1), (7, 1))
            .assert_len(7)
            .assert_bends(0)
            .assert_well_formed();
    }

    #[test]
    fn test_adjacent_tiles() {
        PathTester::from_str(
            "
            BAB
            BAB
            ",
        )
        .find((2, 1), (2, 2))
        .assert_points(&[(2, 1), (2, 2)])
        .assert_bends(0);
    }

    #[test]
    fn test_one_bend_around_blocker() {
        // B blocks the top row; the route bends once below it.
        PathTester::from_str(
            "
            ABC
            ..A
            ",
        )
        .find((1, 1), (3, 2))
        .assert_len(4)
        .assert_bends(1)
        .assert_points(&[(1, 1), (1, 2), (2, 2), (3, 2)])
        .assert_none_through_tiles()
        .assert_well_formed();
    }

    #[test]
    fn test_two_bends_through_border() {
        // Both tiles are enclosed except towards the top border.
        PathTester::from_str(
            "
            A.A
            BBB
            ",
        )
        .find((1, 1), (3, 1))
        .assert_len(3)
        .assert_bends(0);

        PathTester::from_str(
            "
            ABA
            CCC
            ",
        )
        .find((1, 1), (3, 1))
        .assert_points(&[(1, 1), (1, 0), (2, 0), (3, 0), (3, 1)])
        .assert_turns(3)
        .assert_bends(2);
    }

    #[test]
    fn test_three_bends_are_too_many() {
        // Reaching the target needs four straight segments.
        PathTester::from_str(
            "
            CCCCC
            CA..C
            CCC.C
            C...C
            CAC.C
            CCCCC
            ",
        )
        .find((2, 2), (2, 5))
        .assert_none();
    }

    #[test]
    fn test_four_segment_route_found_with_higher_cap() {
        let board: Board = "
            CCCCC
            CA..C
            CCC.C
            C...C
            CAC.C
            CCCCC
        "
        .parse()
        .unwrap();
        let path = PathFinder::new(board.grid())
            .with_max_turns(4)
            .find_path(Coord::new(2, 2), Coord::new(2, 5))
            .expect("four segments reach the target");
        assert_eq!(path.turns(), 4);
        assert_eq!(path.len(), 8);
    }

    #[test]
    fn test_enclosed_source_has_no_path() {
        PathTester::from_str(
            "
            BBBA
            BAB.
            BBB.
            ",
        )
        .find((2, 2), (4, 1))
        .assert_none();
    }

    #[test]
    fn test_other_tile_on_target_route_blocks() {
        // The only straight route is blocked by C; detours need the border.
        PathTester::from_str(
            "
            ACA
            ",
        )
        .find((1, 1), (3, 1))
        .assert_len(5)
        .assert_bends(2)
        .assert_none_through_tiles();
    }

    #[test]
    fn test_shortest_path_wins_over_first_found() {
        // Up is tried first and finds a long detour; Right then finds the
        // direct neighbour, which must replace it.
        PathTester::from_str("AA")
            .find((1, 1), (2, 1))
            .assert_points(&[(1, 1), (2, 1)]);
    }

    #[test]
    fn test_equal_length_tie_prefers_search_order() {
        // Both an up-and-over and a down-and-under route have 5 points.
        // Up is explored first, so it is kept.
        PathTester::from_str("ABA")
            .find((1, 1), (3, 1))
            .assert_points(&[(1, 1), (1, 0), (2, 0), (3, 0), (3, 1)]);
    }

    #[test]
    fn test_same_cell_is_no_path() {
        PathTester::from_str("AA").find((1, 1), (1, 1)).assert_none();
    }

    #[test]
    fn test_wall_beyond_border() {
        // Source on the left edge of a 1-wide board: moving left reaches the
        // border column, moving further is outside the grid.
        let board: Board = "A\nB\nA".parse().unwrap();
        let mut recorder = StepRecorder::default();
        let path = PathFinder::new(board.grid())
            .with_observer(&mut recorder)
            .find_path(Coord::new(1, 1), Coord::new(1, 3));
        let path = path.expect("route around B through the border column");
        assert_eq!(path.len(), 5);
        assert_eq!(path.bends(), 2);
        assert!(
            recorder
                .steps()
                .iter()
                .filter(|(_, kind)| kind.is_checked())
                .all(|(coord, _)| board.grid().in_bounds(*coord))
        );
        assert!(
            recorder
                .steps()
                .iter()
                .any(|(coord, kind)| kind.is_terminated() && !board.grid().in_bounds(*coord))
        );
    }

    #[test]
    fn test_observer_sees_source_first() {
        let board: Board = "A.A".parse().unwrap();
        let mut finder = PathFinder::new(board.grid()).with_observer(StepRecorder::default());
        let path = finder.find_path(Coord::new(1, 1), Coord::new(3, 1));
        assert_eq!(path.map(|p| p.len()), Some(3));
        let recorder = finder.into_observer();
        assert_eq!(recorder.steps()[0], (Coord::new(1, 1), StepKind::Checked));
        assert!(recorder.count(StepKind::Found) >= 1);
    }

    #[test]
    fn test_search_is_deterministic() {
        let board: Board = "
            AB.CA
            .DB..
            CA.BD
        "
        .parse()
        .unwrap();
        let first = PathFinder::new(board.grid()).find_path(Coord::new(1, 1), Coord::new(5, 1));
        let second = PathFinder::new(board.grid()).find_path(Coord::new(1, 1), Coord::new(5, 1));
        assert_eq!(first.as_ref().map(Path::len), Some(7));
        assert_eq!(first, second);
    }

    proptest::proptest! {
        #[test]
        fn test_found_paths_are_admissible(
            cells in proptest::collection::vec(proptest::bool::weighted(0.55), 30),
            a in 0..30_usize,
            b in 0..30_usize,
        ) {
            proptest::prop_assume!(a != b);
            let mut board = Board::new(6, 5);
            let coords: Vec<Coord> = board.grid().interior_coords().collect();
            for (i, (&coord, &filled)) in coords.iter().zip(&cells).enumerate() {
                if filled || i == a || i == b {
                    board.place_tile(coord, tilelink_core::TileType::A).unwrap();
                }
            }
            let (source, target) = (coords[a], coords[b]);
            if let Some(path) = PathFinder::new(board.grid()).find_path(source, target) {
                proptest::prop_assert_eq!(path.source(), source);
                proptest::prop_assert_eq!(path.target(), target);
                proptest::prop_assert!(path.turns() <= MAX_TURNS);
                let rebuilt = Path::from_points(path.points().to_vec()).unwrap();
                proptest::prop_assert_eq!(rebuilt.turns(), path.turns());
                for &point in &path.points()[1..path.len() - 1] {
                    proptest::prop_assert!(board.grid().in_bounds(point));
                    proptest::prop_assert!(!board.grid().is_occupied(point));
                }
                proptest::prop_assert!(path.steps() >= source.manhattan_distance(target) as usize);
            }
        }
    }
}
