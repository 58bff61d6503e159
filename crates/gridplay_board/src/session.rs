//! Turn and session state shared by every grid game.
//!
//! Each controller owns exactly one [`GameState`]. The state machine is
//! `Setup -> InProgress -> {Won, Drawn}`, and [`GameState::start`] is the
//! only way back to `InProgress` from anywhere.

use crate::{CellListener, Color, Coord, Grid, MoveRejected};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One of the two fixed identities in a game.
pub trait Player: Copy + Eq + std::fmt::Debug {
    /// Human-readable name used in status messages.
    fn name(self) -> &'static str;

    /// Display color of this player's marks.
    fn color(self) -> Color;

    /// The other player.
    fn opponent(self) -> Self;
}

/// Lifecycle phase of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Phase {
    /// Constructed but not started.
    Setup,
    /// Accepting moves.
    #[display("In progress")]
    InProgress,
    /// Ended with a completed line.
    Won,
    /// Ended with a full board and no line.
    Drawn,
}

/// What a win/draw detector concluded about the move just played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The move completed a line. The cells are empty when the detector
    /// does not report the line.
    Win(Vec<Coord>),
    /// No line, and the board is full.
    Draw,
    /// Play continues.
    Undecided,
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome<P> {
    /// The game goes on with `next` to play.
    Continue {
        /// Player whose turn it now is.
        next: P,
    },
    /// The mover completed a line.
    Won {
        /// The mover.
        winner: P,
        /// Cells of the completed line, empty when the game does not record it.
        cells: Vec<Coord>,
    },
    /// The board filled with no line.
    Drawn,
}

/// Mutable turn state for one game instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<P> {
    next_to_play: P,
    move_count: usize,
    capacity: usize,
    phase: Phase,
    winning_cells: Vec<Coord>,
}

impl<P: Player> GameState<P> {
    /// Creates a state in [`Phase::Setup`] for a board of `capacity` cells.
    #[instrument]
    pub fn new(first: P, capacity: usize) -> Self {
        Self {
            next_to_play: first,
            move_count: 0,
            capacity,
            phase: Phase::Setup,
            winning_cells: Vec::new(),
        }
    }

    /// Enters [`Phase::InProgress`] with a zero move count and `first` to play.
    ///
    /// Valid from every phase; this is the restart transition.
    #[instrument(skip(self))]
    pub fn start(&mut self, first: P) {
        self.next_to_play = first;
        self.move_count = 0;
        self.phase = Phase::InProgress;
        self.winning_cells.clear();
        debug!(first = first.name(), "Game started");
    }

    /// Player whose turn it is.
    pub fn next_to_play(&self) -> P {
        self.next_to_play
    }

    /// Number of accepted moves since the last start.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Number of cells on the board.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cells of the recorded winning line; empty unless won and recorded.
    pub fn winning_cells(&self) -> &[Coord] {
        &self.winning_cells
    }

    /// True once the game has been won.
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// True once the game has been drawn.
    pub fn is_drawn(&self) -> bool {
        self.phase == Phase::Drawn
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_drawn()
    }

    /// True while moves are accepted.
    pub fn accepts_moves(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// Counts one accepted move.
    pub fn record_move(&mut self) {
        debug_assert!(self.accepts_moves(), "move recorded outside play");
        debug_assert!(self.move_count < self.capacity, "move count past capacity");
        self.move_count = (self.move_count + 1).min(self.capacity);
    }

    /// Hands the turn to the other player and returns them.
    pub fn pass_turn(&mut self) -> P {
        self.next_to_play = self.next_to_play.opponent();
        self.next_to_play
    }

    /// Ends the game as won by the player to move.
    #[instrument(skip(self))]
    pub fn declare_won(&mut self, cells: Vec<Coord>) {
        info!(winner = self.next_to_play.name(), moves = self.move_count, "Game won");
        self.phase = Phase::Won;
        self.winning_cells = cells;
    }

    /// Ends the game as drawn.
    #[instrument(skip(self))]
    pub fn declare_drawn(&mut self) {
        info!(moves = self.move_count, "Game drawn");
        self.phase = Phase::Drawn;
    }

    /// Checks that a move may be made now.
    pub fn ensure_accepting(&self) -> Result<(), MoveRejected> {
        match self.phase {
            Phase::InProgress => Ok(()),
            Phase::Setup => Err(MoveRejected::NotStarted),
            Phase::Won | Phase::Drawn => Err(MoveRejected::GameOver),
        }
    }

    /// True once every cell has been played.
    pub fn board_exhausted(&self) -> bool {
        self.move_count == self.capacity
    }

    /// Applies a detector verdict for a move by the player to move.
    ///
    /// Ends the game on a win or draw, otherwise passes the turn.
    pub fn conclude(&mut self, verdict: Verdict) -> MoveOutcome<P> {
        match verdict {
            Verdict::Win(cells) => {
                let winner = self.next_to_play;
                self.declare_won(cells.clone());
                MoveOutcome::Won { winner, cells }
            }
            Verdict::Draw => {
                self.declare_drawn();
                MoveOutcome::Drawn
            }
            Verdict::Undecided => MoveOutcome::Continue {
                next: self.pass_turn(),
            },
        }
    }
}

/// A playable game behind a board widget.
///
/// The terminal front end holds one of these as a trait object and feeds it
/// [`CellEvent`](crate::CellEvent)s through the [`CellListener`] methods.
pub trait GridGame: CellListener {
    /// Window title.
    fn title(&self) -> &'static str;

    /// The board being played on.
    fn grid(&self) -> &Grid;

    /// Current status line text.
    fn message(&self) -> &str;

    /// Current lifecycle phase.
    fn phase(&self) -> Phase;

    /// Accepted moves since the last restart.
    fn move_count(&self) -> usize;

    /// Clears the board and starts a fresh game.
    fn restart(&mut self);
}
