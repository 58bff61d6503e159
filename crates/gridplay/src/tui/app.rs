//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use gridplay_board::{CellEvent, GridGame, PointerTracker};
use tracing::{debug, info, instrument};

use super::layout::ScreenLayout;
use crate::config::GameKind;

/// Main application state.
pub struct App {
    kind: GameKind,
    game: Box<dyn GridGame>,
    pointer: PointerTracker,
    quit: bool,
}

impl App {
    /// Creates the application showing a fresh game of `kind`.
    #[instrument]
    pub fn new(kind: GameKind) -> Self {
        Self {
            kind,
            game: kind.build(),
            pointer: PointerTracker::new(),
            quit: false,
        }
    }

    /// The game being shown.
    pub fn game(&self) -> &dyn GridGame {
        self.game.as_ref()
    }

    /// Which game is being shown.
    pub fn kind(&self) -> GameKind {
        self.kind
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Restarts the current game.
    pub fn restart(&mut self) {
        debug!(game = %self.kind, "Restart requested");
        self.game.restart();
        self.pointer.forget();
    }

    /// Replaces the current game with a fresh one of `kind`.
    #[instrument(skip(self))]
    pub fn switch(&mut self, kind: GameKind) {
        if kind == self.kind {
            return;
        }
        info!(from = %self.kind, to = %kind, "Switching game");
        self.kind = kind;
        self.game = kind.build();
        self.pointer.forget();
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('t') => self.switch(GameKind::TicTacToe),
            KeyCode::Char('c') => self.switch(GameKind::ConnectFour),
            _ => {}
        }
    }

    /// Handles mouse movement and clicks against the last drawn layout.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) {
        let over = layout.cell_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.hover(over),
            MouseEventKind::Down(MouseButton::Left) => {
                if layout.on_restart(mouse.column, mouse.row) {
                    self.restart();
                    return;
                }
                self.hover(over);
                if let Some(coord) = over {
                    CellEvent::Clicked(coord).dispatch(self.game.as_mut());
                }
            }
            _ => {}
        }
    }

    fn hover(&mut self, over: Option<gridplay_board::Coord>) {
        for event in self.pointer.update(over) {
            event.dispatch(self.game.as_mut());
        }
    }
}
