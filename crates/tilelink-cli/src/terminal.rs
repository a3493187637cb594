use std::{
    collections::HashMap,
    fmt::{self, Display},
    time::Duration,
};

use tilelink_core::Coord;
use tilelink_game::{Presenter, VisualId, VisualKind};
use tilelink_pathfinder::Path;

/// Presents a session as text.
///
/// The presenter keeps its own picture of the board, built only from the
/// visuals the session spawns and destroys. Drawn paths are printed at once,
/// over the tiles they connect.
#[derive(Debug, Default)]
pub(crate) struct TerminalPresenter {
    next_id: u64,
    size: (i32, i32),
    visuals: HashMap<VisualId, (VisualKind, Coord)>,
}

impl TerminalPresenter {
    /// Sets the extents of the board to draw, border included.
    pub(crate) fn fit(&mut self, (width, height): (usize, usize)) {
        let to_i32 = |n: usize| i32::try_from(n).unwrap_or(i32::MAX);
        self.size = (to_i32(width), to_i32(height));
    }

    /// Draws the board with an optional path overlay.
    pub(crate) fn render(&self, path: Option<&Path>) -> String {
        let mut cells = HashMap::new();
        for &(kind, coord) in self.visuals.values() {
            match kind {
                VisualKind::Tile(ty) => {
                    cells.entry(coord).or_insert((ty.letter(), false)).0 = ty.letter();
                }
                VisualKind::Highlight => cells.entry(coord).or_insert((' ', false)).1 = true,
            }
        }
        if let Some(path) = path {
            for (coord, shape) in path.line_shapes() {
                cells.insert(coord, (shape.glyph(), false));
            }
        }
        Picture {
            size: self.size,
            cells,
        }
        .to_string()
    }
}

/// Characters to print per cell, with whether the cell is highlighted.
struct Picture {
    size: (i32, i32),
    cells: HashMap<Coord, (char, bool)>,
}

impl Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.size;
        write!(f, "   ")?;
        for x in 0..width {
            write!(f, "{:>2}", x % 100)?;
        }
        for y in 0..height {
            write!(f, "\n{y:>2} ")?;
            for x in 0..width {
                let (ch, highlighted) = self
                    .cells
                    .get(&Coord::new(x, y))
                    .copied()
                    .unwrap_or((' ', false));
                let ch = match (ch, highlighted) {
                    (' ', _) if x == 0 || y == 0 || x == width - 1 || y == height - 1 => ' ',
                    (' ', _) => '.',
                    (ch, true) => ch.to_ascii_lowercase(),
                    (ch, false) => ch,
                };
                write!(f, " {ch}")?;
            }
        }
        Ok(())
    }
}

impl Presenter for TerminalPresenter {
    fn spawn_visual(&mut self, kind: VisualKind, coord: Coord) -> VisualId {
        let id = VisualId(self.next_id);
        self.next_id += 1;
        self.visuals.insert(id, (kind, coord));
        log::debug!("spawn {id}: {kind:?} at {coord}");
        id
    }

    fn destroy_visual(&mut self, id: VisualId, delay: Duration) {
        if self.visuals.remove(&id).is_some() {
            log::debug!("destroy {id} after {delay:?}");
        } else {
            log::warn!("destroy of unknown {id}");
        }
    }

    fn draw_path(&mut self, path: &Path) {
        log::debug!("path {path}");
        println!("{}", self.render(Some(path)));
    }
}
