use itertools::Itertools;
use log::debug;
use ndarray::Array2;

use crate::{
    generic::{
        boards::{is_line_of, lines},
        validation::report,
    },
    validate_board, validate_mark, Cell, Coordinates, Grid, InvalidInput, Mark, MarkSource,
    BOARD_SIZE,
};

/// Runs the checks of [`make_move`] in order and returns the first failure.
/// On success yields the target cell and the parsed mark.
pub fn validate_move<G: Grid + ?Sized, M: MarkSource + ?Sized>(
    board: &G,
    row: i64,
    col: i64,
    mark: &M,
) -> Result<(Coordinates, Mark), InvalidInput> {
    validate_board(board)?;
    let mark = validate_mark(mark)?;
    let coordinates = match (usize::try_from(row), usize::try_from(col)) {
        (Ok(r), Ok(c)) if r < BOARD_SIZE && c < BOARD_SIZE => (r, c),
        _ => return Err(InvalidInput::OutOfBounds { row, col }),
    };
    match board.cell(coordinates.0, coordinates.1) {
        Some(cell) if cell.is_empty() => Ok((coordinates, mark)),
        _ => Err(InvalidInput::CellOccupied {
            row: coordinates.0,
            col: coordinates.1,
        }),
    }
}

/// Places `mark` at `(row, col)` if the board is 3x3, the mark is valid, the
/// coordinates lie within `[0, 2]` and the cell is empty. Returns whether the
/// board was changed.
pub fn make_move<G: Grid + ?Sized, M: MarkSource + ?Sized>(
    board: &mut G,
    row: i64,
    col: i64,
    mark: &M,
) -> bool {
    let Some(((row, col), mark)) = report(validate_move(&*board, row, col, mark)) else {
        return false;
    };
    match board.cell_mut(row, col) {
        Some(cell) => {
            *cell = mark.into();
            debug!("placed {} at ({}, {})", mark, row, col);
            true
        }
        None => false,
    }
}

/// True if `mark` fills a row, a column or one of the two diagonals.
pub fn check_win<G: Grid + ?Sized, M: MarkSource + ?Sized>(board: &G, mark: &M) -> bool {
    if report(validate_board(board)).is_none() {
        return false;
    }
    let Some(mark) = report(validate_mark(mark)) else {
        return false;
    };
    let matrix = to_matrix(board);
    let won = lines(&matrix).any(|line| is_line_of(&line, mark));
    won
}

/// True if the board is valid and no cell is empty.
///
/// A full board may also hold a winning line; check for a win first.
pub fn check_draw<G: Grid + ?Sized>(board: &G) -> bool {
    if report(validate_board(board)).is_none() {
        return false;
    }
    (0..BOARD_SIZE)
        .cartesian_product(0..BOARD_SIZE)
        .all(|(row, col)| board.cell(row, col).is_some_and(|cell| !cell.is_empty()))
}

fn to_matrix<G: Grid + ?Sized>(board: &G) -> Array2<Cell> {
    Array2::from_shape_fn((BOARD_SIZE, BOARD_SIZE), |(row, col)| {
        board.cell(row, col).copied().unwrap_or_default()
    })
}
