//! Connect Four controller: column clicks become disc drops.

use crate::Disc;
use crate::rules::{check_win_draw, landing_cell};
use gridplay_board::{
    CellListener, Color, Coord, GameState, Grid, GridGame, MoveOutcome, MoveRejected, Phase, Player,
};
use tracing::{debug, instrument};

/// Number of columns.
pub const WIDTH: usize = 7;

/// Number of rows.
pub const HEIGHT: usize = 6;

/// Status text shown after every restart.
pub const WELCOME: &str = "Welcome to Connect Four. Red to play.";

/// A Connect Four game bound to its 7x6 board.
///
/// Any cell of a column stands for the whole column: clicking drops a disc
/// to the lowest empty cell, hovering previews every empty cell of it.
#[derive(Debug, Clone)]
pub struct ConnectFour {
    grid: Grid,
    state: GameState<Disc>,
    message: String,
}

impl ConnectFour {
    /// Creates a board with alternating light and dark columns and starts a game.
    #[instrument]
    pub fn new() -> Self {
        let mut grid = Grid::new(WIDTH, HEIGHT);
        for column in 0..WIDTH {
            let shade = if column % 2 == 0 { Color::LIGHT } else { Color::DARK };
            for row in 0..HEIGHT {
                grid.set_background(Coord::new(column, row), shade);
            }
        }
        let mut game = Self {
            state: GameState::new(Disc::FIRST, grid.capacity()),
            grid,
            message: String::new(),
        };
        game.restart();
        game
    }

    /// Turn and outcome state, including the winning set once won.
    pub fn state(&self) -> &GameState<Disc> {
        &self.state
    }

    /// Drops the current player's disc into `column`.
    ///
    /// Full or off-board columns are rejected without touching any state.
    #[instrument(skip(self))]
    pub fn play(&mut self, column: usize) -> Result<MoveOutcome<Disc>, MoveRejected> {
        self.state.ensure_accepting()?;
        let at = landing_cell(&self.grid, column)?;

        let mover = self.state.next_to_play();
        self.grid.set_cell_color(at, mover.color());
        self.grid.toggle_cell_occupied(at);
        self.state.record_move();

        let verdict = check_win_draw(&self.grid, at, mover.color(), self.state.move_count());
        let outcome = self.state.conclude(verdict);
        match &outcome {
            MoveOutcome::Won { winner, cells } => {
                self.unhighlight_column(column, &[]);
                for cell in cells {
                    self.grid.highlight_cell(*cell);
                }
                self.message = format!("{} wins!", winner.name());
            }
            MoveOutcome::Drawn => {
                self.unhighlight_column(column, &[]);
                self.message = "Draw game.".to_string();
            }
            MoveOutcome::Continue { next } => {
                self.message = format!("{} to play", next.name());
            }
        }
        debug!(%at, ?outcome, moves = self.state.move_count(), "Disc dropped");
        Ok(outcome)
    }

    fn unhighlight_column(&mut self, column: usize, keep: &[Coord]) {
        for row in 0..self.grid.height() {
            let coord = Coord::new(column, row);
            if !keep.contains(&coord) {
                self.grid.unhighlight_cell(coord);
            }
        }
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl CellListener for ConnectFour {
    fn on_clicked(&mut self, coord: Coord) {
        if let Err(reason) = self.play(coord.column) {
            debug!(%coord, %reason, "Click ignored");
        }
    }

    fn on_pointer_enter(&mut self, coord: Coord) {
        if !self.state.accepts_moves() {
            return;
        }
        for row in 0..self.grid.height() {
            let cell = Coord::new(coord.column, row);
            if self.grid.is_empty(cell) {
                self.grid.highlight_cell(cell);
            }
        }
    }

    fn on_pointer_exit(&mut self, coord: Coord) {
        if self.state.is_over() {
            return;
        }
        let keep = self.state.winning_cells().to_vec();
        self.unhighlight_column(coord.column, &keep);
    }
}

impl GridGame for ConnectFour {
    fn title(&self) -> &'static str {
        "Connect Four"
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
        self.state.start(Disc::FIRST);
        self.message = WELCOME.to_string();
    }
}
