//! Win detection over a 3x3 grid of marks.

use super::super::{Player, Position};

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner among the marks.
///
/// Returns the mark of the first line (in `LINES` order) whose three
/// positions hold the same player, `None` otherwise.
pub fn check_winner(marks: &[Option<Player>; 9]) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let mark = marks[a.to_index()]?;
        (marks[b.to_index()] == Some(mark) && marks[c.to_index()] == Some(mark)).then_some(mark)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(cells: &[(Position, Player)]) -> [Option<Player>; 9] {
        let mut marks = [None; 9];
        for (pos, player) in cells {
            marks[pos.to_index()] = Some(*player);
        }
        marks
    }

    #[test]
    fn test_no_winner_empty() {
        assert_eq!(check_winner(&[None; 9]), None);
    }

    #[test]
    fn test_winner_top_row() {
        let m = marks(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&m), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let m = marks(&[
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
        ]);
        assert_eq!(check_winner(&m), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let m = marks(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(check_winner(&m), Some(Player::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let m = marks(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&m), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let m = marks(&line.map(|pos| (pos, Player::X)));
            assert_eq!(check_winner(&m), Some(Player::X), "line {:?}", line);
        }
    }
}
