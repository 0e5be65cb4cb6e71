mod boards;
mod cell;
mod error;
mod game_data;
mod gamestate;
mod grid;
mod mark;
mod r#move;
mod player;
mod rules;
mod validation;

pub use boards::{check_matrix, Board, Outcome};
pub use cell::Cell;
pub use error::InvalidInput;
pub use game_data::GameData;
pub use gamestate::GameState;
pub use grid::{Grid, RawBoard};
pub use mark::{Mark, MarkSource};
pub use player::{Player, PlayerSlot};
pub use r#move::{Coordinates, Move};
pub use rules::{check_draw, check_win, make_move, validate_move};
pub use validation::{
    is_empty_or_null, is_valid_board, is_valid_mark, validate_board, validate_mark, BOARD_SIZE,
};
