//! Core domain types for a single grid cell.

use serde::{Deserialize, Serialize};

/// Column/row address of a cell.
///
/// Row 0 is the top row of the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({}, {})", column, row)]
pub struct Coord {
    /// Column index, counted from the left edge.
    pub column: usize,
    /// Row index, counted from the top edge.
    pub row: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((column, row): (usize, usize)) -> Self {
        Self::new(column, row)
    }
}

/// An RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Pure black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Pure red.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Light grey board background (80% intensity).
    pub const LIGHT: Color = Color::rgb(204, 204, 204);
    /// Dark grey board background (50% intensity).
    pub const DARK: Color = Color::rgb(128, 128, 128);

    /// Creates a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::LIGHT
    }
}

/// Whether a cell holds a mark, and whose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    /// No mark.
    Empty,
    /// Holds a mark of the given color.
    Occupied(Color),
}

impl Occupancy {
    /// Returns true for [`Occupancy::Empty`].
    pub fn is_empty(self) -> bool {
        matches!(self, Occupancy::Empty)
    }
}

/// A single addressable position on a [`Grid`](crate::Grid).
///
/// The mark color and the occupied flag are set independently, the way a
/// widget is first painted and then toggled, but [`Cell::occupancy`] only
/// reports the color once the cell is occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Cell {
    /// Where this cell sits.
    coord: Coord,
    /// Background drawn behind the mark.
    background: Color,
    /// Color of the mark, meaningful while occupied.
    mark: Color,
    /// Whether the cell currently holds a mark.
    #[getter(skip)]
    occupied: bool,
    /// Whether the cell is highlighted.
    #[getter(skip)]
    highlighted: bool,
}

impl Cell {
    pub(crate) fn new(coord: Coord, background: Color) -> Self {
        Self {
            coord,
            background,
            mark: Color::BLACK,
            occupied: false,
            highlighted: false,
        }
    }

    /// Current occupancy state.
    pub fn occupancy(&self) -> Occupancy {
        if self.occupied {
            Occupancy::Occupied(self.mark)
        } else {
            Occupancy::Empty
        }
    }

    /// True if no mark is present.
    pub fn is_empty(&self) -> bool {
        !self.occupied
    }

    /// True if the cell holds a mark of exactly `color`.
    pub fn holds(&self, color: Color) -> bool {
        self.occupancy() == Occupancy::Occupied(color)
    }

    /// True if highlighted.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub(crate) fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub(crate) fn set_mark(&mut self, color: Color) {
        self.mark = color;
    }

    pub(crate) fn toggle(&mut self) {
        self.occupied = !self.occupied;
    }

    pub(crate) fn clear(&mut self) {
        self.occupied = false;
    }

    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_empty() {
        let cell = Cell::new(Coord::new(1, 2), Color::LIGHT);
        assert!(cell.is_empty());
        assert_eq!(cell.occupancy(), Occupancy::Empty);
        assert!(!cell.is_highlighted());
        assert_eq!(*cell.coord(), Coord::new(1, 2));
    }

    #[test]
    fn test_color_only_reported_once_occupied() {
        let mut cell = Cell::new(Coord::new(0, 0), Color::LIGHT);
        cell.set_mark(Color::RED);
        assert!(!cell.holds(Color::RED));

        cell.toggle();
        assert!(cell.holds(Color::RED));
        assert!(!cell.holds(Color::BLACK));

        cell.clear();
        assert!(cell.is_empty());
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(3, 5).to_string(), "(3, 5)");
    }
}
