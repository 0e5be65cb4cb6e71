use std::fmt::Display;

/// Every way a caller can hand the rules something they refuse to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    BoardShape { rows: usize },
    RowLength { row: usize, len: usize },
    UnknownMark,
    OutOfBounds { row: i64, col: i64 },
    CellOccupied { row: usize, col: usize },
    BlankName,
    GameEnded,
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInput::BoardShape { rows } => write!(
                f,
                "invalid board: expected 3 rows, got {}. The board must be a 3x3 grid",
                rows
            ),
            InvalidInput::RowLength { row, len } => write!(
                f,
                "invalid board: row {} has {} cells. The board must be a 3x3 grid",
                row, len
            ),
            InvalidInput::UnknownMark => write!(f, "invalid mark. Please use \"X\" or \"O\""),
            InvalidInput::OutOfBounds { row, col } => write!(
                f,
                "invalid row or column ({}, {}). They must be between 0 and 2",
                row, col
            ),
            InvalidInput::CellOccupied { row, col } => {
                write!(f, "the cell ({}, {}) is already occupied", row, col)
            }
            InvalidInput::BlankName => write!(f, "a name must not be empty"),
            InvalidInput::GameEnded => write!(f, "the game has ended, restart to play again"),
        }
    }
}

impl std::error::Error for InvalidInput {}
