//! Property tests over random legal games.

use proptest::collection::vec;
use proptest::prelude::*;
use strictly_tictactoe_engine::{
    Board, EngineError, Player, Square, actions, player, result, terminal, utility, winner,
};

/// Plays a game by picking `choices[i] % legal.len()` at ply `i`, returning
/// every board seen, starting with the empty one.
fn play(choices: &[usize]) -> Vec<Board> {
    let mut boards = vec![Board::new()];
    let mut board = Board::new();
    for choice in choices {
        if terminal(&board) {
            break;
        }
        let legal = actions(&board);
        board = result(&board, legal[choice % legal.len()]).expect("legal move");
        boards.push(board);
    }
    boards
}

/// Row-major indices of every row, column and diagonal.
const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn line_complete(board: &Board) -> Option<Player> {
    let squares = board.squares();
    TRIPLES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(p) if squares[b] == squares[a] && squares[c] == squares[a] => Some(p),
        _ => None,
    })
}

proptest! {
    #[test]
    fn turn_alternates(choices in vec(any::<usize>(), 9)) {
        let boards = play(&choices);
        for (ply, board) in boards.iter().enumerate() {
            let expected = if ply % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(player(board), expected);
            prop_assert!(board.is_consistent());
        }
        for pair in boards.windows(2) {
            let mover = player(&pair[0]);
            prop_assert_eq!(pair[1].count(mover), pair[0].count(mover) + 1);
        }
    }

    #[test]
    fn result_leaves_argument_untouched(choices in vec(any::<usize>(), 0..9)) {
        let boards = play(&choices);
        let Some(board) = boards.last().copied() else {
            return Ok(());
        };
        let snapshot = board;
        for pos in actions(&board) {
            let next = result(&board, pos).expect("legal move");
            prop_assert_ne!(next, board);
            prop_assert_eq!(board, snapshot);
        }
    }

    #[test]
    fn occupied_squares_rejected(choices in vec(any::<usize>(), 1..9)) {
        let boards = play(&choices);
        let board = boards[boards.len() - 1];
        for pos in strictly_tictactoe_engine::Position::ALL {
            if !board.is_empty(pos) {
                prop_assert_eq!(result(&board, pos), Err(EngineError::InvalidMove(pos)));
            }
        }
    }

    #[test]
    fn terminal_exactly_at_line_or_full_board(choices in vec(any::<usize>(), 9)) {
        let boards = play(&choices);
        for (ply, board) in boards.iter().enumerate() {
            let done = line_complete(board).is_some() || ply == 9;
            prop_assert_eq!(terminal(board), done);
            if ply < 5 {
                prop_assert!(!terminal(board));
            }
        }
        prop_assert!(terminal(&boards[boards.len() - 1]));
    }

    #[test]
    fn winner_and_utility_agree(squares in vec(0u8..3, 9)) {
        let mut rows = [[Square::Empty; 3]; 3];
        for (i, s) in squares.iter().enumerate() {
            rows[i / 3][i % 3] = match s {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
        }
        let board = Board::from_rows(rows);

        prop_assert_eq!(winner(&board).is_some(), line_complete(&board).is_some());
        let score = utility(&board);
        prop_assert!([-1, 0, 1].contains(&score));
        prop_assert_eq!(score == 1, winner(&board) == Some(Player::X));
        prop_assert_eq!(score == -1, winner(&board) == Some(Player::O));
    }
}
