//! Tests for running full matches.

use clap::Parser;
use std::io::Cursor;
use strictly_tictactoe_cli::{Cli, Command, HumanPlayer, Match, Seat, StrategyPlayer};
use strictly_tictactoe_engine::{Board, Outcome, Player, StrategyKind};

#[test]
fn test_one_ply_self_play() {
    let mut game = Match::new(
        Box::new(StrategyPlayer::new(StrategyKind::OnePly)),
        Box::new(StrategyPlayer::new(StrategyKind::OnePly)),
    );
    let mut out = Vec::new();
    let board = game.run(Board::new(), &mut out).expect("match completes");

    assert_eq!(Outcome::of(&board), Outcome::Won(Player::X));
    let shown = String::from_utf8(out).expect("utf8");
    assert!(shown.contains("one-ply (X) wins"));
}

#[test]
fn test_minimax_against_itself_draws() {
    let mut game = Match::new(
        Box::new(StrategyPlayer::new(StrategyKind::Minimax)),
        Box::new(StrategyPlayer::new(StrategyKind::Minimax)),
    );
    let board = game.run(Board::new(), &mut Vec::new()).expect("match completes");
    assert_eq!(Outcome::of(&board), Outcome::Draw);
}

#[test]
fn test_scripted_human_beats_first_available() {
    // first-available O fills the top row from the left while X builds the
    // anti-diagonal.
    let input = Cursor::new("1 1\n2 0\n0 2\n");
    let mut game = Match::new(
        Box::new(HumanPlayer::new("Human X", input, Vec::new())),
        Box::new(StrategyPlayer::new(StrategyKind::FirstAvailable)),
    );
    let board = game.run(Board::new(), &mut Vec::new()).expect("match completes");
    assert_eq!(board.to_string(), "OOX/.X./X..");
    assert_eq!(Outcome::of(&board), Outcome::Won(Player::X));
}

#[test]
fn test_human_running_out_of_input_aborts() {
    let input = Cursor::new("2 0\n");
    let mut game = Match::new(
        Box::new(HumanPlayer::new("Human X", input, Vec::new())),
        Box::new(StrategyPlayer::new(StrategyKind::FirstAvailable)),
    );
    let err = game.run(Board::new(), &mut Vec::new()).expect_err("input ends early");
    assert!(err.to_string().contains("Human X (X) failed to move"));
}

#[test]
fn test_human_wins_from_given_board() {
    // X to move with the top row open.
    let start: Board = "XX./OO./...".parse().expect("valid notation");
    let input = Cursor::new("0 2\n");
    let mut game = Match::new(
        Box::new(HumanPlayer::new("Human X", input, Vec::new())),
        Box::new(StrategyPlayer::new(StrategyKind::OnePly)),
    );
    let mut out = Vec::new();
    let board = game.run(start, &mut out).expect("match completes");
    assert_eq!(Outcome::of(&board), Outcome::Won(Player::X));
    assert!(String::from_utf8(out).expect("utf8").contains("Human X (X) wins"));
}

#[test]
fn test_inconsistent_start_board_rejected() {
    let start: Board = "OO./.../...".parse().expect("valid notation");
    let mut game = Match::new(
        Box::new(StrategyPlayer::new(StrategyKind::OnePly)),
        Box::new(StrategyPlayer::new(StrategyKind::OnePly)),
    );
    assert!(game.run(start, &mut Vec::new()).is_err());
}

#[test]
fn test_cli_parses_play_flags() {
    let cli = Cli::try_parse_from([
        "tictactoe",
        "play",
        "--x",
        "minimax",
        "--o",
        "human",
        "--board",
        "X../.../...",
    ])
    .expect("valid arguments");

    match cli.command {
        Command::Play { x, o, board } => {
            assert_eq!(x, Some(Seat::Strategy(StrategyKind::Minimax)));
            assert_eq!(o, Some(Seat::Human));
            assert_eq!(board.map(|b| b.to_string()), Some("X../.../...".to_string()));
        }
        Command::Suggest { .. } => panic!("expected play"),
    }
}

#[test]
fn test_cli_suggest_defaults_to_one_ply() {
    let cli = Cli::try_parse_from(["tictactoe", "suggest", "--board", "XO./.../..."])
        .expect("valid arguments");
    match cli.command {
        Command::Suggest { strategy, .. } => assert_eq!(strategy, StrategyKind::OnePly),
        Command::Play { .. } => panic!("expected suggest"),
    }
    assert!(Cli::try_parse_from(["tictactoe", "suggest", "--board", "XO"]).is_err());
}
