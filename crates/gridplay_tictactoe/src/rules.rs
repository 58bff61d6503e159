//! Win and draw detection for tic-tac-toe.
//!
//! Only lines through the cell just played are examined: its column, its
//! row, and a diagonal only when the cell lies on it. The winning line is
//! not reported, only the fact of the win.

use gridplay_board::{Color, Coord, Grid, Verdict};
use tracing::{instrument, trace};

/// Checks whether the mark just placed at `at` ends the game.
///
/// The cell at `at` must already hold `color`. `move_count` counts the move
/// just made; a full board with no line is a draw.
#[instrument(skip(grid))]
pub fn check_win_draw(grid: &Grid, at: Coord, color: Color, move_count: usize) -> Verdict {
    let n = grid.height();
    let Coord { column: x, row: y } = at;

    if line_complete(grid, color, (0..n).map(|i| Coord::new(x, i))) {
        trace!("Column complete");
        return Verdict::Win(Vec::new());
    }

    if line_complete(grid, color, (0..n).map(|i| Coord::new(i, y))) {
        trace!("Row complete");
        return Verdict::Win(Vec::new());
    }

    if x == y && line_complete(grid, color, (0..n).map(|i| Coord::new(i, i))) {
        trace!("Diagonal complete");
        return Verdict::Win(Vec::new());
    }

    if x + y + 1 == n && line_complete(grid, color, (0..n).map(|i| Coord::new(i, n - 1 - i))) {
        trace!("Anti-diagonal complete");
        return Verdict::Win(Vec::new());
    }

    if move_count == n * n {
        Verdict::Draw
    } else {
        Verdict::Undecided
    }
}

fn line_complete(grid: &Grid, color: Color, mut cells: impl Iterator<Item = Coord>) -> bool {
    cells.all(|coord| grid.cell(coord).is_ok_and(|cell| cell.holds(color)))
}
