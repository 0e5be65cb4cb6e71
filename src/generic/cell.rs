use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{InvalidInput, Mark};

/// One position of the grid. Serialized as `""`, `"X"` or `"O"`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Cell {
    #[default]
    Empty,
    Marked {
        mark: Mark,
    },
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked { mark } => Some(*mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Marked { mark }
    }
}

impl TryFrom<String> for Cell {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            Ok(Cell::Empty)
        } else {
            value.parse::<Mark>().map(Cell::from)
        }
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.mark().map(String::from).unwrap_or_default()
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Marked { mark } => write!(f, "{}", mark),
        }
    }
}
