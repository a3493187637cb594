use rand::Rng;
use tilelink_core::{Board, Coord};

/// Returns the number of swaps [`scramble`] uses by default: one per live tile.
#[must_use]
pub fn default_steps(board: &Board) -> usize {
    board.tile_count()
}

/// Shuffles a board by swapping the occupants of random interior cells.
///
/// Each of the `steps` iterations picks two interior cells uniformly (they
/// may coincide or be empty) and swaps them. Tile types and counts are kept;
/// only positions change. A scrambled board may contain pairs that can no
/// longer be connected.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use tilelink_core::Board;
/// use tilelink_generator::{default_steps, scramble};
///
/// let mut board: Board = "AB\n.A\nB.".parse()?;
/// let before = *board.type_counter();
/// let steps = default_steps(&board);
///
/// scramble(&mut board, steps, &mut Pcg64::seed_from_u64(3));
/// assert_eq!(*board.type_counter(), before);
/// assert_eq!(board.grid().occupied_count(), 4);
/// # Ok::<(), tilelink_core::BoardParseError>(())
/// ```
pub fn scramble<R>(board: &mut Board, steps: usize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let cells = board.grid().interior_coords().collect::<Vec<Coord>>();
    if cells.is_empty() {
        return;
    }
    for _ in 0..steps {
        let a = cells[rng.random_range(0..cells.len())];
        let b = cells[rng.random_range(0..cells.len())];
        board
            .swap_cells(a, b)
            .expect("interior coordinates are swappable");
    }
    log::debug!("scrambled board with {steps} swaps");
}
