//! Tic-tac-toe on a gridplay board.
//!
//! White and Black alternate placing stones on a 3x3 [`Grid`](gridplay_board::Grid).
//! The [`TicTacToe`] controller listens for cell events, places stones,
//! and runs [`check_win_draw`] after every move.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod player;
mod rules;

pub use game::{SIZE, TicTacToe, WELCOME};
pub use player::Stone;
pub use rules::check_win_draw;
