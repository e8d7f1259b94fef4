use super::board::{column_of, Board, MoveError, CELLS};
use super::Player;

/// Owned state of one Connect Four session: the grid plus whose turn it is.
///
/// Red moves first and the colors strictly alternate, so the turn flag flips
/// exactly once per accepted drop. A rejected drop, for whatever reason,
/// leaves the grid and the turn flag untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    next_player: Player,
}

impl GameState {
    /// Fresh state: empty grid, Red to move.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            next_player: Player::Red,
        }
    }

    /// Get reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color that plays the next accepted drop
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Drop the next player's piece in `column` (0..6).
    ///
    /// On success, returns the flat index of the cell that was filled and
    /// passes the turn to the other color.
    pub fn drop_piece(&mut self, column: usize) -> Result<usize, MoveError> {
        let index = self.board.drop_piece(column, self.next_player.to_cell())?;
        self.next_player = self.next_player.other();
        Ok(index)
    }

    /// Drop in the column containing the clicked cell `index` (0..41).
    ///
    /// The rendering layer forwards raw cell indices; the column is derived
    /// here. Indices past the grid are rejected before the derivation, since
    /// an index like 43 would otherwise alias a real column through `% 7`.
    pub fn drop_at_index(&mut self, index: usize) -> Result<usize, MoveError> {
        if index >= CELLS {
            return Err(MoveError::InvalidIndex);
        }
        self.drop_piece(column_of(index))
    }

    /// Clear the grid and give Red the first move again
    pub fn reset(&mut self) {
        *self = GameState::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
