use itertools::Itertools;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::{
    check_matrix, validate_board, validate_move, Cell, Coordinates, Grid, InvalidInput, Move,
    Outcome, RawBoard, BOARD_SIZE,
};

/// A 3x3 grid. The shape cannot change once the board exists: it is either
/// built empty or converted from a [`RawBoard`] that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    data: Array2<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = InvalidInput;

    fn try_from(rows: RawBoard) -> Result<Self, Self::Error> {
        validate_board(&rows)?;
        let data = Array2::from_shape_fn(Self::SIZE, |(row, col)| rows[row][col]);
        Ok(Self { data })
    }
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> Self {
        board.data.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl Board {
    pub const SIZE: Coordinates = (BOARD_SIZE, BOARD_SIZE);

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem(Self::SIZE, Cell::Empty),
        }
    }

    pub fn get(&self, coordinates: Coordinates) -> Option<Cell> {
        self.data.get(coordinates).copied()
    }

    pub fn empty_cells(&self) -> Vec<Coordinates> {
        (0..Self::SIZE.0)
            .cartesian_product(0..Self::SIZE.1)
            .filter(|coordinates| self.data[*coordinates].is_empty())
            .collect()
    }

    /// Places `new_move` through the same checks as [`crate::make_move`],
    /// reporting the reason on failure.
    pub fn insert_move(&mut self, new_move: Move) -> Result<(), InvalidInput> {
        let (row, col) = new_move.coordinates;
        let (row, col) = (
            i64::try_from(row).unwrap_or(i64::MAX),
            i64::try_from(col).unwrap_or(i64::MAX),
        );
        let (coordinates, mark) = validate_move(&*self, row, col, &new_move.mark)?;
        self.data[coordinates] = mark.into();
        Ok(())
    }

    pub fn outcome(&self) -> Outcome {
        check_matrix(&self.data)
    }

    pub fn clear(&mut self) {
        self.data.fill(Cell::Empty);
    }
}

impl Grid for Board {
    fn row_count(&self) -> usize {
        self.data.nrows()
    }

    fn row_len(&self, row: usize) -> Option<usize> {
        (row < self.data.nrows()).then(|| self.data.ncols())
    }

    fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.data.get((row, col))
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.data.get_mut((row, col))
    }
}

/// ```text
///  X | O |
/// ---+---+---
///    | X |
/// ---+---+---
///    |   | O
/// ```
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .data
            .rows()
            .into_iter()
            .map(|row| format!(" {} ", row.iter().join(" | ")))
            .join("\n---+---+---\n");
        write!(f, "{}", rendered)
    }
}
