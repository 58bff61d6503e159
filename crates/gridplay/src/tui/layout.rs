//! Screen geometry and hit-testing.

use gridplay_board::Coord;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Width of the restart button, borders included.
const RESTART_WIDTH: u16 = 13;

/// Where everything sits on screen for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// The board itself, exactly `columns * cell_width` wide.
    pub board: Rect,
    /// Status message label.
    pub status: Rect,
    /// Restart button.
    pub restart: Rect,
    cell_width: u16,
    cell_height: u16,
}

impl ScreenLayout {
    /// Lays out a `columns` x `rows` board of fixed-size cells inside `area`.
    ///
    /// The board is centred and clipped to whatever room is left.
    pub fn compute(area: Rect, columns: usize, rows: usize, cell_width: u16, cell_height: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(1),    // Board
                Constraint::Length(3), // Status + restart
            ])
            .split(area);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(RESTART_WIDTH)])
            .split(chunks[2]);

        let width = (columns as u16).saturating_mul(cell_width);
        let height = (rows as u16).saturating_mul(cell_height);
        let board = center_rect(chunks[1], width, height);

        Self {
            title: chunks[0],
            board,
            status: bottom[0],
            restart: bottom[1],
            cell_width,
            cell_height,
        }
    }

    /// Screen rectangle of a cell, clipped to the board.
    pub fn cell_rect(&self, coord: Coord) -> Rect {
        let x = self.board.x + coord.column as u16 * self.cell_width;
        let y = self.board.y + coord.row as u16 * self.cell_height;
        Rect::new(x, y, self.cell_width, self.cell_height).intersection(self.board)
    }

    /// Cell under the terminal position, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        if !self.board.contains(Position::new(column, row)) {
            return None;
        }
        let x = (column - self.board.x) / self.cell_width;
        let y = (row - self.board.y) / self.cell_height;
        Some(Coord::new(x as usize, y as usize))
    }

    /// True if the terminal position is on the restart button.
    pub fn on_restart(&self, column: u16, row: u16) -> bool {
        self.restart.contains(Position::new(column, row))
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, 80, 30), 7, 6, 7, 3)
    }

    #[test]
    fn test_board_is_centred() {
        let l = layout();
        assert_eq!(l.board.width, 49);
        assert_eq!(l.board.height, 18);
        assert_eq!(l.board.x, (80 - 49) / 2);
    }

    #[test]
    fn test_cell_hit_testing() {
        let l = layout();
        let (x0, y0) = (l.board.x, l.board.y);
        assert_eq!(l.cell_at(x0, y0), Some(Coord::new(0, 0)));
        assert_eq!(l.cell_at(x0 + 7, y0 + 3), Some(Coord::new(1, 1)));
        assert_eq!(l.cell_at(x0 + 48, y0 + 17), Some(Coord::new(6, 5)));
        assert_eq!(l.cell_at(x0 + 49, y0), None);
        assert_eq!(l.cell_at(0, 0), None);
    }

    #[test]
    fn test_cell_rect_round_trips_through_hit_test() {
        let l = layout();
        let rect = l.cell_rect(Coord::new(3, 4));
        assert_eq!(l.cell_at(rect.x, rect.y), Some(Coord::new(3, 4)));
        assert_eq!(l.cell_at(rect.x + rect.width - 1, rect.y + rect.height - 1), Some(Coord::new(3, 4)));
    }

    #[test]
    fn test_restart_button_bottom_right() {
        let l = layout();
        assert!(l.on_restart(79, 28));
        assert!(!l.on_restart(0, 28));
        assert_eq!(l.cell_at(79, 28), None);
    }
}
