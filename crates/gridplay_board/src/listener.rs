//! Cell event seam between a board widget and a game controller.

use crate::Coord;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Pointer activity on a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellEvent {
    /// The cell was clicked.
    Clicked(Coord),
    /// The pointer moved onto the cell.
    PointerEntered(Coord),
    /// The pointer left the cell.
    PointerExited(Coord),
}

impl CellEvent {
    /// The cell this event concerns.
    pub fn coord(self) -> Coord {
        match self {
            CellEvent::Clicked(c) | CellEvent::PointerEntered(c) | CellEvent::PointerExited(c) => c,
        }
    }

    /// Routes the event to the matching listener method.
    #[instrument(skip(listener))]
    pub fn dispatch<L: CellListener + ?Sized>(self, listener: &mut L) {
        match self {
            CellEvent::Clicked(c) => listener.on_clicked(c),
            CellEvent::PointerEntered(c) => listener.on_pointer_enter(c),
            CellEvent::PointerExited(c) => listener.on_pointer_exit(c),
        }
    }
}

/// Receiver of per-cell pointer events.
///
/// Handlers are invoked serially by the UI dispatch loop and never overlap.
pub trait CellListener {
    /// A cell was clicked.
    fn on_clicked(&mut self, coord: Coord);

    /// The pointer entered a cell.
    fn on_pointer_enter(&mut self, coord: Coord);

    /// The pointer left a cell.
    fn on_pointer_exit(&mut self, coord: Coord);
}

/// Turns raw "pointer is over X" samples into enter/exit pairs.
///
/// The exit for the previous cell is always emitted before the enter for
/// the new one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerTracker {
    hovered: Option<Coord>,
}

impl PointerTracker {
    /// Creates a tracker with nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell currently under the pointer.
    pub fn hovered(&self) -> Option<Coord> {
        self.hovered
    }

    /// Records the pointer's current cell and returns the events it implies.
    pub fn update(&mut self, over: Option<Coord>) -> Vec<CellEvent> {
        if over == self.hovered {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(old) = self.hovered {
            events.push(CellEvent::PointerExited(old));
        }
        if let Some(new) = over {
            events.push(CellEvent::PointerEntered(new));
        }
        trace!(?events, "Pointer moved");
        self.hovered = over;
        events
    }

    /// Forgets the hovered cell without emitting an exit.
    pub fn forget(&mut self) {
        self.hovered = None;
    }
}
