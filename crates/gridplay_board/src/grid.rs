//! Rectangular grid of cells.

use crate::{BoardError, Cell, Color, Coord};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Fixed-size board of [`Cell`]s.
///
/// Dimensions are set at construction and never change. Cells are stored
/// in row-major order. Commands that name a coordinate off the board are
/// logged and ignored so a stray event can never corrupt the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty, unhighlighted grid with the default background.
    #[instrument]
    pub fn new(width: usize, height: usize) -> Self {
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |column| Coord::new(column, row)))
            .map(|coord| Cell::new(coord, Color::default()))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn capacity(&self) -> usize {
        self.width * self.height
    }

    /// True if `coord` addresses a cell of this grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.column < self.width && coord.row < self.height
    }

    fn index(&self, coord: Coord) -> Result<usize, BoardError> {
        if self.contains(coord) {
            Ok(coord.row * self.width + coord.column)
        } else {
            Err(BoardError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Looks up a cell.
    pub fn cell(&self, coord: Coord) -> Result<&Cell, BoardError> {
        let idx = self.index(coord)?;
        Ok(&self.cells[idx])
    }

    /// True if `coord` is on the board and holds no mark.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.cell(coord).is_ok_and(Cell::is_empty)
    }

    /// All cells, row by row from the top.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells of one column from top to bottom. Empty if `column` is off the board.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &Cell> {
        let rows = if column < self.width { self.height } else { 0 };
        (0..rows).map(move |row| &self.cells[row * self.width + column])
    }

    /// Cells of one row from left to right. Empty if `row` is off the board.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Cell> {
        let start = (row * self.width).min(self.cells.len());
        let end = if row < self.height { start + self.width } else { start };
        self.cells[start..end].iter()
    }

    fn with_cell(&mut self, coord: Coord, f: impl FnOnce(&mut Cell)) {
        match self.index(coord) {
            Ok(idx) => f(&mut self.cells[idx]),
            Err(e) => warn!(error = %e, "Ignoring board command"),
        }
    }

    /// Sets the background drawn behind a cell.
    pub fn set_background(&mut self, coord: Coord, color: Color) {
        self.with_cell(coord, |cell| cell.set_background(color));
    }

    /// Sets the mark color of a cell without changing its occupancy.
    #[instrument(skip(self))]
    pub fn set_cell_color(&mut self, coord: Coord, color: Color) {
        self.with_cell(coord, |cell| cell.set_mark(color));
    }

    /// Removes any mark from a cell.
    #[instrument(skip(self))]
    pub fn clear_cell(&mut self, coord: Coord) {
        self.with_cell(coord, Cell::clear);
    }

    /// Flips a cell between empty and occupied.
    #[instrument(skip(self))]
    pub fn toggle_cell_occupied(&mut self, coord: Coord) {
        self.with_cell(coord, Cell::toggle);
    }

    /// Turns a cell's highlight on.
    pub fn highlight_cell(&mut self, coord: Coord) {
        self.with_cell(coord, |cell| cell.set_highlighted(true));
    }

    /// Turns a cell's highlight off.
    pub fn unhighlight_cell(&mut self, coord: Coord) {
        self.with_cell(coord, |cell| cell.set_highlighted(false));
    }

    /// Clears and unhighlights every cell. Backgrounds are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
            cell.set_highlighted(false);
        }
        debug!(width = self.width, height = self.height, "Board reset");
    }
}
