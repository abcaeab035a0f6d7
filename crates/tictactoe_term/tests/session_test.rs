//! Tests for driving a session through text input.

use std::io::Cursor;

use tictactoe_core::{GamePhase, GameSettings};
use tictactoe_term::Session;

fn run(settings: &GameSettings, player1: &str, player2: &str, input: &str) -> (Session, String) {
    let mut session = Session::new(settings, player1, player2);
    let mut output = Vec::new();
    session
        .run(Cursor::new(input.to_string()), &mut output)
        .expect("Session failed");
    (session, String::from_utf8(output).expect("UTF-8 output"))
}

#[test]
fn test_blank_names_use_defaults() {
    let (session, output) = run(&GameSettings::default(), "", "", "quit\n");
    assert!(output.contains("Player 1's turn"));
    assert_eq!(session.game().current_player().expect("Started").name(), "Player 1");
}

#[test]
fn test_win_is_announced() {
    let (session, output) = run(&GameSettings::default(), "Ada", "Grace", "1\n4\n2\n5\n3\n");
    assert!(output.contains("Ada wins!"));
    assert!(output.contains("X|X|X"));
    assert_eq!(session.game().phase(), GamePhase::Over);
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_tie_is_announced() {
    let input = "1\n2\n3\n5\n4\n6\n8\n7\n9\n";
    let (_, output) = run(&GameSettings::default(), "Ada", "Grace", input);
    assert!(output.contains("It's a tie!"));
}

#[test]
fn test_taken_cell_and_bad_input() {
    let (session, output) = run(&GameSettings::default(), "Ada", "Grace", "center\n5\nnonsense\n");
    assert!(output.contains("Cell 5 is already taken by X."));
    assert!(output.contains("Unrecognised input 'nonsense'"));
    assert_eq!(session.game().current_player().expect("Started").name(), "Grace");
}

#[test]
fn test_moves_after_game_over_and_restart() {
    let input = "1\n4\n2\n5\n3\n9\nrestart\n";
    let (session, output) = run(&GameSettings::default(), "Ada", "Grace", input);
    assert!(output.contains("The game is over."));
    assert_eq!(session.game().phase(), GamePhase::InProgress);
    assert!(session.game().history().is_empty());
}

#[test]
fn test_configured_default_names() {
    let settings = GameSettings::from_toml_str("player2_default = \"Noughts\"").expect("Valid TOML");
    let (_, output) = run(&settings, "Ada", "", "1\n");
    assert!(output.contains("Noughts's turn"));
}
