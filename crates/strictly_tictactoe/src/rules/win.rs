//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Winning triples in priority order: rows, columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three equal, occupied squares in a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    positions: [Position; 3],
    player: Player,
}

impl WinningLine {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }

    /// Owner of the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Returns the first winning line on the board, if any.
///
/// Lines are scanned in [`LINES`] order, so a board with two completed
/// lines always reports the same one.
#[instrument(level = "trace")]
pub fn evaluate_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinningLine {
                    positions: [a, b, c],
                    player,
                })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(cells: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(i, player) in cells {
            board.set(Position::ALL[i], Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_of(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        let line = evaluate_winner(&board).expect("top row wins");
        assert_eq!(line.indices(), [0, 1, 2]);
        assert_eq!(line.player(), Player::X);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_of(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        let line = evaluate_winner(&board).expect("anti-diagonal wins");
        assert_eq!(line.indices(), [2, 4, 6]);
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopLeft));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_of(&[(3, Player::X), (4, Player::O), (5, Player::X)]);
        assert_eq!(evaluate_winner(&board), None);
    }

    #[test]
    fn test_two_marks_never_win() {
        let board = board_of(&[
            (0, Player::X),
            (1, Player::X),
            (3, Player::O),
            (6, Player::O),
        ]);
        assert_eq!(evaluate_winner(&board), None);
    }

    #[test]
    fn test_rows_take_priority_over_columns() {
        // X holds both the top row and the left column.
        let board = board_of(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(evaluate_winner(&board).map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_columns_take_priority_over_diagonals() {
        let board = board_of(&[
            (0, Player::O),
            (3, Player::O),
            (6, Player::O),
            (4, Player::O),
            (8, Player::O),
        ]);
        assert_eq!(evaluate_winner(&board).map(|l| l.indices()), Some([0, 3, 6]));
    }
}
