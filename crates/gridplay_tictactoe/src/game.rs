//! Tic-tac-toe controller: turns board events into moves.

use crate::rules::check_win_draw;
use crate::Stone;
use gridplay_board::{
    CellListener, Color, Coord, GameState, Grid, GridGame, MoveOutcome, MoveRejected, Phase, Player,
};
use tracing::{debug, instrument};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Status text shown after every restart.
pub const WELCOME: &str = "Welcome to Tic Tac Toe. White to play.";

/// A tic-tac-toe game bound to its 3x3 board.
///
/// Created in play; [`TicTacToe::restart`] returns it to a fresh game from
/// any state.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    grid: Grid,
    state: GameState<Stone>,
    message: String,
}

impl TicTacToe {
    /// Creates a board with a light background and starts a game.
    #[instrument]
    pub fn new() -> Self {
        let mut grid = Grid::new(SIZE, SIZE);
        let coords: Vec<Coord> = grid.iter().map(|cell| *cell.coord()).collect();
        for coord in coords {
            grid.set_background(coord, Color::LIGHT);
        }
        let mut game = Self {
            state: GameState::new(Stone::FIRST, grid.capacity()),
            grid,
            message: String::new(),
        };
        game.restart();
        game
    }

    /// Turn and outcome state.
    pub fn state(&self) -> &GameState<Stone> {
        &self.state
    }

    /// Places the current player's stone at `at`.
    ///
    /// Rejected targets leave every piece of state untouched.
    #[instrument(skip(self))]
    pub fn play(&mut self, at: Coord) -> Result<MoveOutcome<Stone>, MoveRejected> {
        self.state.ensure_accepting()?;
        if !self.grid.cell(at)?.is_empty() {
            return Err(MoveRejected::CellOccupied(at));
        }

        let mover = self.state.next_to_play();
        self.grid.set_cell_color(at, mover.color());
        self.grid.toggle_cell_occupied(at);
        self.state.record_move();

        let verdict = check_win_draw(&self.grid, at, mover.color(), self.state.move_count());
        let outcome = self.state.conclude(verdict);
        self.message = match &outcome {
            MoveOutcome::Won { winner, .. } => format!("{} wins!", winner.name()),
            MoveOutcome::Drawn => "Draw game.".to_string(),
            MoveOutcome::Continue { next } => format!("{} to play", next.name()),
        };
        debug!(?outcome, moves = self.state.move_count(), "Move applied");
        Ok(outcome)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl CellListener for TicTacToe {
    fn on_clicked(&mut self, coord: Coord) {
        if let Err(reason) = self.play(coord) {
            debug!(%coord, %reason, "Click ignored");
        }
    }

    fn on_pointer_enter(&mut self, coord: Coord) {
        if self.state.accepts_moves() && self.grid.is_empty(coord) {
            self.grid.highlight_cell(coord);
        }
    }

    fn on_pointer_exit(&mut self, coord: Coord) {
        self.grid.unhighlight_cell(coord);
    }
}

impl GridGame for TicTacToe {
    fn title(&self) -> &'static str {
        "Tic Tac Toe"
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn phase(&self) -> Phase {
        self.state.phase()
    }

    fn move_count(&self) -> usize {
        self.state.move_count()
    }

    #[instrument(skip(self))]
    fn restart(&mut self) {
        self.grid.reset();
        self.state.start(Stone::FIRST);
        self.message = WELCOME.to_string();
    }
}
