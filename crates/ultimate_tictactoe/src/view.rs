//! Read-only view of a game for front-ends.
//!
//! Everything here borrows a `GameState` and derives display data from it.
//! Nothing in this module can change the game.

use super::engine::legal_moves;
use super::types::{Cell, GameState, GameStatus, SubBoardOutcome};
use super::Position;

/// Display adapter over a single game snapshot.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    state: &'a GameState,
}

impl<'a> BoardView<'a> {
    /// Creates a view over the given state.
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// Sub-boards the player to move may play into.
    pub fn playable_boards(&self) -> [bool; 9] {
        let mut playable = [false; 9];
        for mv in legal_moves(self.state, self.state.turn()) {
            playable[mv.board.to_index()] = true;
        }
        playable
    }

    /// The forced sub-board to highlight, while the game is running.
    pub fn highlighted(&self) -> Option<Position> {
        if self.state.status().is_over() {
            None
        } else {
            self.state.active_board()
        }
    }

    /// One-line summary of whose turn it is or how the game ended.
    pub fn status_line(&self) -> String {
        match self.state.status() {
            GameStatus::Won(p) => format!("Winner: {}", p),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::InProgress => match self.highlighted() {
                Some(pos) => format!(
                    "Turn: {} (sub-board {}, {})",
                    self.state.turn(),
                    pos.to_index() + 1,
                    pos.label()
                ),
                None => format!("Turn: {} (any open sub-board)", self.state.turn()),
            },
        }
    }

    /// Renders the 9x9 grid followed by a summary of sub-board outcomes.
    ///
    /// Empty cells show as `.`. In the summary, `#` marks a drawn sub-board,
    /// `*` the forced one and `-` any other open one.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for big_row in 0..3 {
            if big_row > 0 {
                out.push_str("-------+-------+-------\n");
            }
            for cell_row in 0..3 {
                let mut segments = Vec::with_capacity(3);
                for big_col in 0..3 {
                    let board = self.state.meta_board().boards()[big_row * 3 + big_col].cells();
                    let segment: Vec<String> = (0..3)
                        .map(|cell_col| symbol(board[cell_row * 3 + cell_col]).to_string())
                        .collect();
                    segments.push(format!(" {} ", segment.join(" ")));
                }
                out.push_str(&segments.join("|"));
                out.push('\n');
            }
        }

        out.push('\n');
        for row in 0..3 {
            let line: Vec<String> = (0..3)
                .map(|col| self.summary_symbol(Position::ALL[row * 3 + col]).to_string())
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }

    fn summary_symbol(&self, pos: Position) -> char {
        match self.state.board(pos).outcome() {
            SubBoardOutcome::Won(p) => p.symbol(),
            SubBoardOutcome::Drawn => '#',
            SubBoardOutcome::Open if self.highlighted() == Some(pos) => '*',
            SubBoardOutcome::Open => '-',
        }
    }
}

fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Occupied(p) => p.symbol(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, apply_move};

    #[test]
    fn test_render_empty_board() {
        let state = GameState::new();
        let rendered = BoardView::new(&state).render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], " . . . | . . . | . . . ");
        assert_eq!(lines[3], "-------+-------+-------");
        assert_eq!(lines.len(), 11 + 1 + 3);
        assert_eq!(lines[12], "- - -");
    }

    #[test]
    fn test_render_places_marks() {
        let state = apply_move(
            &GameState::new(),
            Move::new(Player::X, Position::TopRight, Position::Center),
        )
        .unwrap();
        let rendered = BoardView::new(&state).render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], " . . . | . . . | . X . ");
        // Center sub-board is now forced.
        assert_eq!(lines[13], "- * -");
    }

    #[test]
    fn test_playable_boards_follow_forced_move() {
        let state = apply_move(
            &GameState::new(),
            Move::new(Player::X, Position::TopLeft, Position::BottomLeft),
        )
        .unwrap();
        let view = BoardView::new(&state);
        let playable = view.playable_boards();
        assert_eq!(playable.iter().filter(|p| **p).count(), 1);
        assert!(playable[Position::BottomLeft.to_index()]);
        assert_eq!(view.highlighted(), Some(Position::BottomLeft));
    }

    #[test]
    fn test_status_line() {
        let state = GameState::new();
        assert_eq!(
            BoardView::new(&state).status_line(),
            "Turn: X (any open sub-board)"
        );
    }
}
