use crate::Cell;

/// A board as it arrives from outside the crate, e.g. deserialized from JSON.
/// Nothing guarantees its shape; the rule functions validate it.
pub type RawBoard = Vec<Vec<Cell>>;

/// Something claiming to be a board.
pub trait Grid {
    fn row_count(&self) -> usize;

    /// Number of cells in `row`, `None` if the row does not exist.
    fn row_len(&self, row: usize) -> Option<usize>;

    fn cell(&self, row: usize, col: usize) -> Option<&Cell>;

    fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell>;
}

impl Grid for RawBoard {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn row_len(&self, row: usize) -> Option<usize> {
        self.get(row).map(Vec::len)
    }

    fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.get(row)?.get(col)
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.get_mut(row)?.get_mut(col)
    }
}
