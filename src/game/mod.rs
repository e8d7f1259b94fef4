//! Core Connect Four game logic: the flat 6×7 grid, the two players, and the
//! turn state machine with its bottom-up drop rule.

mod board;
mod player;
mod state;

pub use board::{column_of, index_of, Board, Cell, MoveError, CELLS, COLS, ROWS};
pub use player::Player;
pub use state::GameState;
