//! Players in tic-tac-toe.

use gridplay_board::{Color, Player};
use serde::{Deserialize, Serialize};

/// Stone color of a tic-tac-toe player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Stone {
    /// Plays first.
    White,
    /// Plays second.
    Black,
}

impl Stone {
    /// The player who opens every game.
    pub const FIRST: Stone = Stone::White;
}

impl Player for Stone {
    fn name(self) -> &'static str {
        match self {
            Stone::White => "White",
            Stone::Black => "Black",
        }
    }

    fn color(self) -> Color {
        match self {
            Stone::White => Color::WHITE,
            Stone::Black => Color::BLACK,
        }
    }

    fn opponent(self) -> Self {
        match self {
            Stone::White => Stone::Black,
            Stone::Black => Stone::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_round_trip() {
        for stone in Stone::iter() {
            assert_ne!(stone.opponent(), stone);
            assert_eq!(stone.opponent().opponent(), stone);
        }
    }

    #[test]
    fn test_colors_distinct() {
        assert_ne!(Stone::White.color(), Stone::Black.color());
        assert_eq!(Stone::White.to_string(), Stone::White.name());
    }
}
