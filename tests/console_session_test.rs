//! End-to-end tests for the console session.

use std::io::Cursor;
use strictly_tictactoe_console::{
    InputError, Phase, Player, Position, Session, SessionError, Square, Step, render,
};

fn play(input: &str) -> (Result<Phase, SessionError>, String) {
    let mut session = Session::new(Cursor::new(input.to_string()), Vec::new());
    let result = session.run();
    let output = String::from_utf8(session.into_output()).unwrap();
    (result, output)
}

fn session(input: &str) -> Session<Cursor<String>, Vec<u8>> {
    Session::new(Cursor::new(input.to_string()), Vec::new())
}

#[test]
fn test_x_wins_top_row() {
    let (result, output) = play("0 0\n1 1\n0 1\n1 0\n0 2\n");

    assert_eq!(result.unwrap(), Phase::XWon);
    assert!(output.starts_with(
        "Welcome to Tic-Tac-Toe!\nEnter moves as 'row col' (0-2 for each)\n\n. . .\n. . .\n. . .\n\nX's turn\n"
    ));
    assert!(output.ends_with("X X X\nO O .\n. . .\n\nX wins!\n"), "{output}");
}

#[test]
fn test_o_wins() {
    let (result, output) = play("0 0\n1 0\n0 1\n1 1\n2 2\n1 2\n");
    assert_eq!(result.unwrap(), Phase::OWon);
    assert!(output.ends_with("O wins!\n"));
}

#[test]
fn test_full_board_is_a_draw() {
    let (result, output) = play("0 0\n0 1\n0 2\n1 0\n1 2\n1 1\n2 0\n2 2\n2 1\n");

    assert_eq!(result.unwrap(), Phase::Draw);
    assert!(output.ends_with("X O X\nO O X\nX X O\n\nIt's a draw!\n"), "{output}");
}

#[test]
fn test_anti_diagonal_ends_game_before_board_fills() {
    // X: (0,0) (0,2) (1,1) (2,0) completes the anti-diagonal on X's fourth move.
    let (result, output) = play("0 0\n0 1\n0 2\n1 0\n1 1\n1 2\n2 0\n2 1\n2 2\n");

    assert_eq!(result.unwrap(), Phase::XWon);
    assert!(output.ends_with("X O X\nO X O\nX . .\n\nX wins!\n"), "{output}");
}

#[test]
fn test_out_of_range_reprompts_same_player() {
    let mut s = session("5 5\n");

    assert_eq!(
        s.step().unwrap(),
        Step::Rejected(parse_err("5 5"))
    );
    assert_eq!(s.game().phase(), Phase::XToMove);
    assert_eq!(s.game().board().occupied(), 0);

    let output = String::from_utf8(s.into_output()).unwrap();
    assert!(output.ends_with("Invalid position. Use 0-2 for row and column.\n"));
}

#[test]
fn test_unparsable_input_reprompts() {
    let mut s = session("0 0\nabc\n");
    assert_eq!(s.step().unwrap(), Step::Accepted);
    assert_eq!(s.step().unwrap(), Step::Rejected(InputError::Unparsable));
    assert_eq!(s.game().phase(), Phase::OToMove);
    assert_eq!(s.game().plies(), 1);

    let output = String::from_utf8(s.into_output()).unwrap();
    assert!(output.ends_with(
        "Invalid input. Please enter two numbers (0-2) separated by a space.\n"
    ));
}

#[test]
fn test_non_utf8_line_reprompts() {
    let mut s = Session::new(Cursor::new(b"\xff\xfe\n0 0\n".to_vec()), Vec::new());

    assert_eq!(s.step().unwrap(), Step::Rejected(InputError::Unparsable));
    assert_eq!(s.game().phase(), Phase::XToMove);
    assert_eq!(s.game().board().occupied(), 0);
    assert_eq!(s.step().unwrap(), Step::Accepted);
    assert_eq!(s.game().phase(), Phase::OToMove);

    let output = String::from_utf8(s.into_output()).unwrap();
    assert_eq!(
        output
            .matches("Invalid input. Please enter two numbers (0-2) separated by a space.")
            .count(),
        1
    );
}

#[test]
fn test_taken_square_reprompts_o() {
    let mut s = session("0 0\n0 0\n");
    assert_eq!(s.step().unwrap(), Step::Accepted);

    let board_before = *s.game().board();
    let pos = Position::new(0, 0).unwrap();
    assert_eq!(s.step().unwrap(), Step::Rejected(InputError::Occupied(pos)));
    assert_eq!(s.game().phase(), Phase::OToMove);
    assert_eq!(*s.game().board(), board_before);
    assert_eq!(s.game().board().get(pos), Square::Occupied(Player::X));

    let output = String::from_utf8(s.into_output()).unwrap();
    assert!(output.ends_with("Position already taken. Try again.\n"));
}

#[test]
fn test_rejected_input_then_game_continues() {
    let (result, output) = play("abc\n5 5\n0 0\n0 0\n1 1\n0 1\n1 0\n0 2\n");

    assert_eq!(result.unwrap(), Phase::XWon);
    assert_eq!(output.matches("Invalid input.").count(), 1);
    assert_eq!(output.matches("Invalid position.").count(), 1);
    assert_eq!(output.matches("Position already taken.").count(), 1);
    // One turn banner per prompt, rejected or not.
    assert_eq!(output.matches(&render::turn(Player::X)).count(), 5);
    assert_eq!(output.matches(&render::turn(Player::O)).count(), 3);
}

#[test]
fn test_closed_input_is_an_error() {
    let (result, output) = play("0 0\n");
    assert!(matches!(result, Err(SessionError::InputClosed)));
    assert!(!output.contains("wins!"));
}

#[test]
fn test_no_steps_after_game_over() {
    let mut s = session("0 0\n1 1\n0 1\n1 0\n0 2\n2 2\n");
    for _ in 0..4 {
        assert_eq!(s.step().unwrap(), Step::Accepted);
    }
    assert_eq!(s.step().unwrap(), Step::Finished(Phase::XWon));
    assert!(matches!(s.step(), Err(SessionError::Game(_))));
}

#[test]
fn test_finish_requires_terminal_phase() {
    let mut s = session("");
    assert!(matches!(
        s.finish(),
        Err(SessionError::InProgress(Phase::XToMove))
    ));
}

fn parse_err(line: &str) -> InputError {
    strictly_tictactoe_console::parse_move(line).unwrap_err()
}
