//! Grid widget model shared by the gridplay games.
//!
//! # Architecture
//!
//! - **Grid**: a fixed-size board of [`Cell`]s that game controllers mutate
//!   through explicit commands (color, clear, toggle, highlight)
//! - **Listener**: the [`CellListener`] seam through which a board widget
//!   reports clicks and pointer movement to a controller
//! - **Session**: the [`GameState`] turn model and the [`GridGame`] trait the
//!   front end drives

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod error;
mod grid;
mod listener;
mod session;

pub use cell::{Cell, Color, Coord, Occupancy};
pub use error::{BoardError, MoveRejected};
pub use grid::Grid;
pub use listener::{CellEvent, CellListener, PointerTracker};
pub use session::{GameState, GridGame, MoveOutcome, Phase, Player, Verdict};
