//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions over a single 3x3 grid. The same line rule decides a
//! sub-board and the meta-board, so it works on marks rather than on
//! either board type.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
