//! Gravity and win/draw detection for Connect Four.
//!
//! Each of the four lines through the landed disc is walked end to end
//! while a running list of consecutive matching cells is kept. Any empty or
//! foreign cell empties the list; the first list to reach [`RUN`] cells is
//! the winning set. Lines are checked in the order column, row, diagonal,
//! anti-diagonal.

use gridplay_board::{Color, Coord, Grid, MoveRejected, Verdict};
use tracing::{instrument, trace};

/// Discs in a row needed to win.
pub const RUN: usize = 4;

/// Finds the cell a disc dropped into `column` lands on.
///
/// A column is full once its top cell is occupied.
#[instrument(skip(grid))]
pub fn landing_cell(grid: &Grid, column: usize) -> Result<Coord, MoveRejected> {
    let top = Coord::new(column, 0);
    if !grid.cell(top)?.is_empty() {
        return Err(MoveRejected::ColumnFull(column));
    }
    grid.column(column)
        .filter(|cell| cell.is_empty())
        .map(|cell| *cell.coord())
        .last()
        .ok_or(MoveRejected::ColumnFull(column))
}

/// Checks whether the disc that landed at `at` ends the game.
///
/// The cell at `at` must already hold `color`; `move_count` includes this
/// move. On a win the first run of [`RUN`] matching cells found is returned.
#[instrument(skip(grid))]
pub fn check_win_draw(grid: &Grid, at: Coord, color: Color, move_count: usize) -> Verdict {
    let width = grid.width() as i64;
    let height = grid.height() as i64;
    let (x, y) = (at.column as i64, at.row as i64);

    let column = (0..height).map(|row| (x, row));
    if let Some(run) = scan(grid, color, column) {
        trace!("Column run");
        return Verdict::Win(run);
    }

    let row = (0..width).map(|col| (col, y));
    if let Some(run) = scan(grid, color, row) {
        trace!("Row run");
        return Verdict::Win(run);
    }

    // Slope +1: row - column is constant along the line.
    let intercept = y - x;
    let start = (-intercept).max(0);
    let end = (height - 1 - intercept).min(width - 1);
    if long_enough(start, end) {
        let diagonal = (start..=end).map(|col| (col, intercept + col));
        if let Some(run) = scan(grid, color, diagonal) {
            trace!(intercept, "Diagonal run");
            return Verdict::Win(run);
        }
    }

    // Slope -1: row + column is constant along the line.
    let intercept = y + x;
    let start = (intercept - height + 1).max(0);
    let end = intercept.min(width - 1);
    if long_enough(start, end) {
        let anti_diagonal = (start..=end).map(|col| (col, intercept - col));
        if let Some(run) = scan(grid, color, anti_diagonal) {
            trace!(intercept, "Anti-diagonal run");
            return Verdict::Win(run);
        }
    }

    if move_count == grid.capacity() {
        Verdict::Draw
    } else {
        Verdict::Undecided
    }
}

/// Lines shorter than a run cannot win and are skipped.
fn long_enough(start: i64, end: i64) -> bool {
    end - start + 1 >= RUN as i64
}

fn scan(grid: &Grid, color: Color, line: impl Iterator<Item = (i64, i64)>) -> Option<Vec<Coord>> {
    let mut run = Vec::with_capacity(RUN);
    for (col, row) in line {
        let coord = Coord::new(col as usize, row as usize);
        if grid.cell(coord).is_ok_and(|cell| cell.holds(color)) {
            run.push(coord);
            if run.len() == RUN {
                return Some(run);
            }
        } else {
            run.clear();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_disc(grid: &mut Grid, column: usize, color: Color) -> Coord {
        let at = landing_cell(grid, column).unwrap();
        grid.set_cell_color(at, color);
        grid.toggle_cell_occupied(at);
        at
    }

    #[test]
    fn test_landing_cell_stacks_from_bottom() {
        let mut grid = Grid::new(7, 6);
        assert_eq!(landing_cell(&grid, 3), Ok(Coord::new(3, 5)));
        drop_disc(&mut grid, 3, Color::RED);
        assert_eq!(landing_cell(&grid, 3), Ok(Coord::new(3, 4)));
    }

    #[test]
    fn test_landing_cell_full_and_off_board() {
        let mut grid = Grid::new(7, 6);
        for _ in 0..6 {
            drop_disc(&mut grid, 0, Color::RED);
        }
        assert_eq!(landing_cell(&grid, 0), Err(MoveRejected::ColumnFull(0)));
        assert_eq!(
            landing_cell(&grid, 7),
            Err(MoveRejected::OutOfBounds(Coord::new(7, 0)))
        );
    }

    #[test]
    fn test_vertical_run() {
        let mut grid = Grid::new(7, 6);
        let at = (0..4)
            .map(|_| drop_disc(&mut grid, 2, Color::BLACK))
            .last()
            .unwrap();
        let expected = vec![
            Coord::new(2, 2),
            Coord::new(2, 3),
            Coord::new(2, 4),
            Coord::new(2, 5),
        ];
        assert_eq!(check_win_draw(&grid, at, Color::BLACK, 7), Verdict::Win(expected));
    }

    #[test]
    fn test_run_broken_by_other_color() {
        let mut grid = Grid::new(7, 6);
        for column in [0, 1, 3] {
            drop_disc(&mut grid, column, Color::RED);
        }
        drop_disc(&mut grid, 2, Color::BLACK);
        let at = drop_disc(&mut grid, 4, Color::RED);
        assert_eq!(check_win_draw(&grid, at, Color::RED, 5), Verdict::Undecided);
    }

    #[test]
    fn test_first_run_reported_when_longer_exists() {
        let mut grid = Grid::new(7, 6);
        for column in [0, 1, 2, 3, 4] {
            drop_disc(&mut grid, column, Color::RED);
        }
        let verdict = check_win_draw(&grid, Coord::new(4, 5), Color::RED, 9);
        let expected: Vec<_> = (0..4).map(|x| Coord::new(x, 5)).collect();
        assert_eq!(verdict, Verdict::Win(expected));
    }

    #[test]
    fn test_diagonal_run() {
        // Staircase rising to the right: (0,5) (1,4) (2,3) (3,2).
        let mut grid = Grid::new(7, 6);
        for (column, fillers) in [(0, 0), (1, 1), (2, 2), (3, 3)] {
            for _ in 0..fillers {
                drop_disc(&mut grid, column, Color::BLACK);
            }
        }
        let last = (0..4)
            .map(|column| drop_disc(&mut grid, column, Color::RED))
            .last()
            .unwrap();
        assert_eq!(last, Coord::new(3, 2));
        let expected = vec![
            Coord::new(0, 5),
            Coord::new(1, 4),
            Coord::new(2, 3),
            Coord::new(3, 2),
        ];
        assert_eq!(check_win_draw(&grid, last, Color::RED, 10), Verdict::Win(expected));
    }

    #[test]
    fn test_falling_diagonal_run() {
        // Staircase falling to the right: (3,2) (4,3) (5,4) (6,5).
        let mut grid = Grid::new(7, 6);
        for (column, fillers) in [(3, 3), (4, 2), (5, 1), (6, 0)] {
            for _ in 0..fillers {
                drop_disc(&mut grid, column, Color::RED);
            }
        }
        let last = [6, 5, 4, 3]
            .into_iter()
            .map(|column| drop_disc(&mut grid, column, Color::BLACK))
            .last()
            .unwrap();
        assert_eq!(last, Coord::new(3, 2));
        let expected = vec![
            Coord::new(3, 2),
            Coord::new(4, 3),
            Coord::new(5, 4),
            Coord::new(6, 5),
        ];
        assert_eq!(check_win_draw(&grid, last, Color::BLACK, 10), Verdict::Win(expected));
    }

    #[test]
    fn test_short_diagonals_skipped() {
        assert!(long_enough(3, 6));
        assert!(!long_enough(4, 6));
    }

    #[test]
    fn test_draw_only_at_capacity() {
        let mut grid = Grid::new(7, 6);
        let at = drop_disc(&mut grid, 0, Color::RED);
        assert_eq!(check_win_draw(&grid, at, Color::RED, 41), Verdict::Undecided);
        assert_eq!(check_win_draw(&grid, at, Color::RED, 42), Verdict::Draw);
    }
}
