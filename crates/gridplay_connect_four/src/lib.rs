//! Connect Four on a gridplay board.
//!
//! Red and Black take turns dropping discs into the columns of a 7x6
//! [`Grid`](gridplay_board::Grid). A disc falls to the lowest empty cell of
//! its column; four in a line along a column, row or diagonal wins, and the
//! four cells stay highlighted once the game ends.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod player;
mod rules;

pub use game::{ConnectFour, HEIGHT, WELCOME, WIDTH};
pub use player::Disc;
pub use rules::{RUN, check_win_draw, landing_cell};
