//! Players in Connect Four.

use gridplay_board::{Color, Player};
use serde::{Deserialize, Serialize};

/// Disc color of a Connect Four player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Disc {
    /// Plays first.
    Red,
    /// Plays second.
    Black,
}

impl Disc {
    /// The player who opens every game.
    pub const FIRST: Disc = Disc::Red;
}

impl Player for Disc {
    fn name(self) -> &'static str {
        match self {
            Disc::Red => "Red",
            Disc::Black => "Black",
        }
    }

    fn color(self) -> Color {
        match self {
            Disc::Red => Color::RED,
            Disc::Black => Color::BLACK,
        }
    }

    fn opponent(self) -> Self {
        match self {
            Disc::Red => Disc::Black,
            Disc::Black => Disc::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_opens_and_black_answers() {
        assert_eq!(Disc::FIRST, Disc::Red);
        assert_eq!(Disc::FIRST.opponent(), Disc::Black);
        assert_eq!(Disc::Black.color(), Color::BLACK);
    }
}
