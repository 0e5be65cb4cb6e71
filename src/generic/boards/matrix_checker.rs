use std::iter::once;

use crate::{Cell, Mark};
use ndarray::{s, Array2, ArrayView1};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { mark: Mark },
    Draw,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct WinnerRegisterer {
    winner: Option<Mark>,
}
impl WinnerRegisterer {
    pub fn register(&mut self, mark: Option<Mark>) {
        if self.winner.is_none() && mark.is_some() {
            self.winner = mark;
        }
    }
    pub fn get_winner(&self) -> Option<Mark> {
        self.winner
    }
}

/// Every line that wins the game: rows, then columns, then the main diagonal
/// and the anti-diagonal.
pub fn lines(matrix: &Array2<Cell>) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
    matrix
        .rows()
        .into_iter()
        .chain(matrix.columns())
        .chain(once(matrix.diag()))
        .chain(once(matrix.slice(s![..;-1, ..]).into_diag()))
}

/// True if every cell of `line` holds `mark`.
pub fn is_line_of(line: &ArrayView1<'_, Cell>, mark: Mark) -> bool {
    line.iter().all(|cell| *cell == Cell::from(mark))
}

/// Checks if a matrix of cells contains a winner
///
/// if one mark fills a row, column or diagonal, it wins.
/// the first mark that is found to have won is returned.
///
/// Usage:
/// ```
/// use ndarray::array;
/// use tictactoe::{Cell, Mark, Outcome, check_matrix};
///
/// let x = Cell::from(Mark::X);
/// let o = Cell::from(Mark::O);
///
/// // O X X
/// // O O O <-- O wins
/// // X O X
/// let matrix = array![
///    [o, x, x],
///    [o, o, o],
///    [x, o, x],
/// ];
///
/// assert_eq!(check_matrix(&matrix), Outcome::Won { mark: Mark::O });
///
/// ```
///
pub fn check_matrix(matrix: &Array2<Cell>) -> Outcome {
    let mut winner_registerer = WinnerRegisterer::default();

    for line in lines(matrix) {
        winner_registerer.register(get_winner_in_line(&line));
    }

    if let Some(mark) = winner_registerer.get_winner() {
        Outcome::Won { mark }
    } else if matrix.iter().all(|cell| !cell.is_empty()) {
        Outcome::Draw
    } else {
        Outcome::Open
    }
}

/// Checks if a line of cells is owned by a single mark
///
/// This function is used by check_matrix to check rows, columns and diagonals.
fn get_winner_in_line(line: &ArrayView1<'_, Cell>) -> Option<Mark> {
    let potential_winner = line.get(0)?.mark()?;
    is_line_of(line, potential_winner).then_some(potential_winner)
}
