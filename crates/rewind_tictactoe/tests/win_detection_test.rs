//! Exhaustive checks of board evaluation.

use rewind_tictactoe::rules::LINES;
use rewind_tictactoe::{Board, Player, Position, Square, WinResult, evaluate};

/// Every assignment of {empty, X, O} to the nine squares.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut marks = Vec::new();
        for pos in Position::ALL {
            match code % 3 {
                1 => marks.push((pos, Player::X)),
                2 => marks.push((pos, Player::O)),
                _ => {}
            }
            code /= 3;
        }
        marks.into_iter().collect()
    })
}

fn line_complete(board: &Board, line: [Position; 3]) -> Option<Player> {
    let [a, b, c] = line;
    match board.get(a) {
        Square::Occupied(p) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(p)
        }
        _ => None,
    }
}

#[test]
fn test_won_boards_report_first_complete_line() {
    for board in all_boards() {
        let first = LINES
            .iter()
            .find_map(|line| line_complete(&board, *line).map(|p| (p, *line)));
        if let Some((player, line)) = first {
            assert_eq!(
                evaluate(&board),
                WinResult::Won {
                    winner: player,
                    line
                },
                "board:\n{}",
                board.display()
            );
        }
    }
}

#[test]
fn test_full_boards_without_line_are_draws() {
    let mut draws = 0;
    for board in all_boards() {
        let any_line = LINES.iter().any(|line| line_complete(&board, *line).is_some());
        if board.occupied() == 9 && !any_line {
            let result = evaluate(&board);
            assert!(result.is_draw(), "board:\n{}", board.display());
            assert_eq!(result.winner(), None);
            assert_eq!(result.winning_line(), None);
            draws += 1;
        }
    }
    assert!(draws > 0);
}

#[test]
fn test_open_boards_without_line_are_in_progress() {
    for board in all_boards() {
        let any_line = LINES.iter().any(|line| line_complete(&board, *line).is_some());
        if board.occupied() < 9 && !any_line {
            let result = evaluate(&board);
            assert_eq!(result, WinResult::InProgress, "board:\n{}", board.display());
            assert!(!result.is_draw());
        }
    }
}

#[test]
fn test_winner_and_draw_never_coexist() {
    for board in all_boards() {
        let result = evaluate(&board);
        assert!(!(result.winner().is_some() && result.is_draw()));
        assert_eq!(result.winner().is_some(), result.winning_line().is_some());
    }
}

#[test]
fn test_lines_follow_fixed_order() {
    let indices: Vec<[usize; 3]> = LINES
        .iter()
        .map(|line| line.map(Position::to_index))
        .collect();
    assert_eq!(
        indices,
        vec![
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_both_diagonals_report_main_diagonal() {
    let board: Board = [0, 2, 4, 6, 8]
        .into_iter()
        .filter_map(Position::from_index)
        .map(|pos| (pos, Player::X))
        .collect();
    assert_eq!(
        evaluate(&board),
        WinResult::Won {
            winner: Player::X,
            line: [Position::TopLeft, Position::Center, Position::BottomRight],
        }
    );
}
