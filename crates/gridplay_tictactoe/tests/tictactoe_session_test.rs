//! Tests for the tic-tac-toe controller as driven by board events.

use gridplay_board::{CellEvent, CellListener, Coord, GridGame, MoveOutcome, Phase};
use gridplay_tictactoe::{Stone, TicTacToe, WELCOME};

fn click(game: &mut TicTacToe, column: usize, row: usize) {
    CellEvent::Clicked(Coord::new(column, row)).dispatch(game);
}

#[test]
fn test_diagonal_win_after_third_stone() {
    let mut game = TicTacToe::new();

    // White takes the main diagonal, Black plays elsewhere.
    click(&mut game, 0, 0);
    click(&mut game, 1, 0);
    click(&mut game, 1, 1);
    assert!(!game.state().is_won());
    click(&mut game, 2, 0);
    assert!(!game.state().is_won());
    click(&mut game, 2, 2);

    assert!(game.state().is_won());
    assert_eq!(game.phase(), Phase::Won);
    assert_eq!(game.message(), "White wins!");
    assert!(game.state().winning_cells().is_empty());
}

#[test]
fn test_messages_follow_turns() {
    let mut game = TicTacToe::new();
    assert_eq!(game.message(), WELCOME);
    click(&mut game, 0, 0);
    assert_eq!(game.message(), "Black to play");
    click(&mut game, 1, 1);
    assert_eq!(game.message(), "White to play");
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let mut game = TicTacToe::new();
    // W B W / W B B / B W W, played in alternating order.
    let moves = [
        (0, 0), // W
        (1, 0), // B
        (2, 0), // W
        (1, 1), // B
        (0, 1), // W
        (2, 1), // B
        (1, 2), // W
        (0, 2), // B
        (2, 2), // W
    ];
    for (x, y) in moves {
        assert!(!game.state().is_over());
        click(&mut game, x, y);
    }

    assert!(game.state().is_drawn());
    assert!(!game.state().is_won());
    assert_eq!(game.message(), "Draw game.");
    assert_eq!(game.move_count(), 9);
}

#[test]
fn test_move_count_increments_per_accepted_move() {
    let mut game = TicTacToe::new();
    let mut expected = 0;
    for (x, y) in [(0, 0), (0, 0), (1, 0), (5, 5), (2, 0)] {
        let before = game.move_count();
        click(&mut game, x, y);
        if game.move_count() != before {
            expected += 1;
            assert_eq!(game.move_count(), before + 1);
        }
        assert!(game.move_count() <= 9);
    }
    assert_eq!(game.move_count(), expected);
    assert_eq!(expected, 3);
}

#[test]
fn test_clicks_after_win_are_ignored() {
    let mut game = TicTacToe::new();
    for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
        click(&mut game, x, y);
    }
    assert!(game.state().is_won());

    let grid = game.grid().clone();
    let message = game.message().to_string();
    let moves = game.move_count();

    click(&mut game, 2, 2);
    game.on_pointer_enter(Coord::new(2, 2));

    assert_eq!(game.grid(), &grid);
    assert_eq!(game.message(), message);
    assert_eq!(game.move_count(), moves);
}

#[test]
fn test_restart_twice_matches_restart_once() {
    let mut game = TicTacToe::new();
    click(&mut game, 1, 1);
    game.on_pointer_enter(Coord::new(0, 0));

    game.restart();
    let once_grid = game.grid().clone();
    let once_state = game.state().clone();
    let once_message = game.message().to_string();

    game.restart();
    assert_eq!(game.grid(), &once_grid);
    assert_eq!(game.state(), &once_state);
    assert_eq!(game.message(), once_message);

    assert!(game.grid().iter().all(|c| c.is_empty() && !c.is_highlighted()));
    assert_eq!(game.state().next_to_play(), Stone::White);
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_play_reports_outcome() {
    let mut game = TicTacToe::new();
    assert_eq!(
        game.play(Coord::new(0, 0)),
        Ok(MoveOutcome::Continue { next: Stone::Black })
    );
}
