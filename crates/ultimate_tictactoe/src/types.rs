//! Core domain types for ultimate tic-tac-toe.

use super::action::{Move, MoveError};
use super::engine::apply_move;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell inside a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }
}

/// How a single sub-board currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubBoardOutcome {
    /// Still accepting moves.
    Open,
    /// Three in a row for this player.
    Won(Player),
    /// Full with no winner.
    Drawn,
}

/// One of the nine 3x3 boards on the meta-board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubBoard {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl SubBoard {
    /// Creates a new empty sub-board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Cells as marks, for the line check.
    pub fn marks(&self) -> [Option<Player>; 9] {
        self.cells.map(Cell::player)
    }

    /// Returns the player holding three in a row, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.marks())
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// A sub-board is decided once it has a winner or is full.
    pub fn is_decided(&self) -> bool {
        self.outcome() != SubBoardOutcome::Open
    }

    /// Current outcome of this sub-board.
    pub fn outcome(&self) -> SubBoardOutcome {
        match self.winner() {
            Some(p) => SubBoardOutcome::Won(p),
            None if rules::is_draw(self) => SubBoardOutcome::Drawn,
            None => SubBoardOutcome::Open,
        }
    }

    /// Empty cell positions in index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }
}

impl Default for SubBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// The 3x3 arrangement of sub-boards and their recorded winners.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaBoard {
    boards: [SubBoard; 9],
    /// Winner of each sub-board. A drawn sub-board stays `None`.
    meta_cells: [Option<Player>; 9],
}

impl MetaBoard {
    /// Creates a meta-board of nine empty sub-boards.
    pub fn new() -> Self {
        Self {
            boards: std::array::from_fn(|_| SubBoard::new()),
            meta_cells: [None; 9],
        }
    }

    /// Returns the sub-board at the given position.
    pub fn board(&self, pos: Position) -> &SubBoard {
        &self.boards[pos.to_index()]
    }

    pub(crate) fn board_mut(&mut self, pos: Position) -> &mut SubBoard {
        &mut self.boards[pos.to_index()]
    }

    /// Returns all sub-boards.
    pub fn boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// Recorded winner of the sub-board at the given position.
    pub fn meta_cell(&self, pos: Position) -> Option<Player> {
        self.meta_cells[pos.to_index()]
    }

    /// Recorded winners of all sub-boards.
    pub fn meta_cells(&self) -> &[Option<Player>; 9] {
        &self.meta_cells
    }

    pub(crate) fn record_winner(&mut self, pos: Position, winner: Player) {
        self.meta_cells[pos.to_index()] = Some(winner);
    }

    /// Meta-board winner, computed from the meta-cells only.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.meta_cells)
    }

    /// Checks whether every sub-board is won or drawn.
    pub fn all_decided(&self) -> bool {
        self.boards.iter().all(SubBoard::is_decided)
    }

    /// Number of occupied cells across all sub-boards.
    pub fn occupied_count(&self) -> usize {
        self.boards.iter().map(SubBoard::occupied_count).sum()
    }
}

impl Default for MetaBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(p) => Some(*p),
            _ => None,
        }
    }
}

/// Complete game state.
///
/// A snapshot: every accepted move produces a new `GameState`, so older
/// snapshots stay valid for readers.
///
/// Deserializing replays `history` from an empty board and refuses the state
/// unless the replay reproduces every other field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredState")]
pub struct GameState {
    pub(crate) meta_board: MetaBoard,
    /// Sub-board the next move is forced into. `None` means free choice.
    pub(crate) active_board: Option<Position>,
    pub(crate) turn: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game: empty boards, X to move, free choice.
    pub fn new() -> Self {
        Self {
            meta_board: MetaBoard::new(),
            active_board: None,
            turn: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the meta-board.
    pub fn meta_board(&self) -> &MetaBoard {
        &self.meta_board
    }

    /// Returns the sub-board at the given position.
    pub fn board(&self, pos: Position) -> &SubBoard {
        self.meta_board.board(pos)
    }

    /// Returns the forced sub-board, if any.
    pub fn active_board(&self) -> Option<Position> {
        self.active_board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized shape of a `GameState`, before it is checked.
#[derive(Deserialize)]
struct StoredState {
    meta_board: MetaBoard,
    active_board: Option<Position>,
    turn: Player,
    status: GameStatus,
    history: Vec<Move>,
}

/// Why a stored `GameState` was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// A move in the history breaks the rules.
    #[display("Move {} in history is illegal: {}", number, source)]
    IllegalHistory {
        /// 1-based position of the move in the history.
        number: usize,
        /// Why it was refused.
        source: MoveError,
    },

    /// The stored boards or turn disagree with the history.
    #[display("Stored state does not match its move history")]
    Mismatch,
}

impl std::error::Error for StateError {}

impl TryFrom<StoredState> for GameState {
    type Error = StateError;

    fn try_from(stored: StoredState) -> Result<Self, Self::Error> {
        let replayed = stored
            .history
            .iter()
            .enumerate()
            .try_fold(GameState::new(), |state, (i, mv)| {
                apply_move(&state, *mv).map_err(|source| StateError::IllegalHistory {
                    number: i + 1,
                    source,
                })
            })?;

        let claimed = GameState {
            meta_board: stored.meta_board,
            active_board: stored.active_board,
            turn: stored.turn,
            status: stored.status,
            history: stored.history,
        };
        if claimed == replayed {
            Ok(replayed)
        } else {
            tracing::warn!(moves = claimed.history.len(), "Stored state disagrees with history");
            Err(StateError::Mismatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(Position, Player)]) -> SubBoard {
        let mut board = SubBoard::new();
        for (pos, player) in cells {
            board.set(*pos, Cell::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.turn(), Player::X);
        assert_eq!(state.active_board(), None);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.meta_board().occupied_count(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_sub_board_outcomes() {
        assert_eq!(SubBoard::new().outcome(), SubBoardOutcome::Open);

        let won = board_with(&[
            (Position::TopLeft, Player::O),
            (Position::Center, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(won.outcome(), SubBoardOutcome::Won(Player::O));
        assert!(won.is_decided());

        // X O X / O X X / O X O
        let drawn = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(drawn.outcome(), SubBoardOutcome::Drawn);
        assert!(drawn.is_decided());
        assert_eq!(drawn.empty_cells().count(), 0);
    }

    #[test]
    fn test_drawn_sub_board_leaves_meta_cell_empty() {
        use Player::{O, X};
        let mut meta = MetaBoard::new();
        // X O X / O X X / O X O
        for (pos, player) in Position::ALL.into_iter().zip([X, O, X, O, X, X, O, X, O]) {
            meta.board_mut(Position::Center)
                .set(pos, Cell::Occupied(player));
        }

        assert!(meta.board(Position::Center).is_decided());
        assert_eq!(meta.meta_cell(Position::Center), None);
        assert_eq!(meta.meta_cells(), &[None; 9]);
        assert_eq!(meta.winner(), None);
        assert!(!meta.all_decided());
    }

    fn state_after_opening() -> GameState {
        [
            Move::new(Player::X, Position::Center, Position::TopLeft),
            Move::new(Player::O, Position::TopLeft, Position::Center),
        ]
        .into_iter()
        .try_fold(GameState::new(), |state, mv| apply_move(&state, mv))
        .unwrap()
    }

    #[test]
    fn test_deserialize_accepts_consistent_state() {
        let state = state_after_opening();
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_deserialize_rejects_tampered_turn() {
        let json = serde_json::to_string(&GameState::new()).unwrap();
        let tampered = json.replace("\"turn\":\"X\"", "\"turn\":\"O\"");
        assert_ne!(json, tampered);

        let err = serde_json::from_str::<GameState>(&tampered).unwrap_err();
        assert!(err.to_string().contains("does not match its move history"));
    }

    #[test]
    fn test_deserialize_rejects_illegal_history() {
        let json = serde_json::to_string(&state_after_opening()).unwrap();
        // Second move claimed by X as well.
        let tampered = json.replacen("\"player\":\"O\"", "\"player\":\"X\"", 1);
        assert_ne!(json, tampered);

        let err = serde_json::from_str::<GameState>(&tampered).unwrap_err();
        assert!(err.to_string().contains("Move 2 in history is illegal"));
    }

    #[test]
    fn test_meta_winner_from_meta_cells() {
        let mut meta = MetaBoard::new();
        meta.record_winner(Position::TopRight, Player::X);
        meta.record_winner(Position::Center, Player::X);
        assert_eq!(meta.winner(), None);
        meta.record_winner(Position::BottomLeft, Player::X);
        assert_eq!(meta.winner(), Some(Player::X));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
