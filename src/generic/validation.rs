use log::error;

use crate::{Grid, InvalidInput, Mark, MarkSource};

pub const BOARD_SIZE: usize = 3;

/// `None` stands in for a value that is not a string at all.
pub fn is_empty_or_null(value: Option<&str>) -> bool {
    value.map_or(true, |value| value.trim().is_empty())
}

pub fn validate_board<G: Grid + ?Sized>(board: &G) -> Result<(), InvalidInput> {
    let rows = board.row_count();
    if rows != BOARD_SIZE {
        return Err(InvalidInput::BoardShape { rows });
    }
    for row in 0..rows {
        let len = board.row_len(row).unwrap_or_default();
        if len != BOARD_SIZE {
            return Err(InvalidInput::RowLength { row, len });
        }
    }
    Ok(())
}

/// Checks that `board` is a 3x3 grid. Cell contents are not inspected.
pub fn is_valid_board<G: Grid + ?Sized>(board: &G) -> bool {
    report(validate_board(board)).is_some()
}

pub fn validate_mark<M: MarkSource + ?Sized>(mark: &M) -> Result<Mark, InvalidInput> {
    mark.to_mark()
}

pub fn is_valid_mark<M: MarkSource + ?Sized>(mark: &M) -> bool {
    report(validate_mark(mark)).is_some()
}

/// Logs the failure of a check as its diagnostic and discards the reason.
pub(crate) fn report<T>(result: Result<T, InvalidInput>) -> Option<T> {
    result.map_err(|err| error!("{}", err)).ok()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Cell, RawBoard};

    fn raw(shape: &[usize]) -> RawBoard {
        shape.iter().map(|len| vec![Cell::Empty; *len]).collect()
    }

    #[test]
    fn empty_or_null() {
        assert!(is_empty_or_null(None));
        assert!(is_empty_or_null(Some("")));
        assert!(is_empty_or_null(Some("   ")));
        assert!(is_empty_or_null(Some("\t\n ")));
        assert!(!is_empty_or_null(Some("A")));
        assert!(!is_empty_or_null(Some("  A  ")));
    }

    #[test]
    fn board_shape() {
        assert!(is_valid_board(&raw(&[3, 3, 3])));

        let invalid_shapes = vec![
            vec![],
            vec![3],
            vec![3, 3],
            vec![3, 3, 3, 3],
            vec![2, 3, 3],
            vec![3, 4, 3],
            vec![3, 3, 0],
            vec![0, 0, 0],
        ];
        for shape in invalid_shapes {
            assert!(!is_valid_board(&raw(&shape)), "{:?} should be invalid", shape);
        }
    }

    #[test]
    fn board_shape_reason() {
        assert_eq!(
            validate_board(&raw(&[3, 3])),
            Err(InvalidInput::BoardShape { rows: 2 })
        );
        assert_eq!(
            validate_board(&raw(&[3, 3, 2])),
            Err(InvalidInput::RowLength { row: 2, len: 2 })
        );
    }

    #[test]
    fn board_contents_are_not_inspected() {
        let board: RawBoard = vec![vec![Mark::X.into(); 3]; 3];
        assert!(is_valid_board(&board));
    }

    #[test]
    fn marks() {
        assert!(is_valid_mark("X"));
        assert!(is_valid_mark("O"));
        assert!(is_valid_mark(&Mark::X));
        for invalid in ["x", "o", "", " ", "XX", "1", "✗"] {
            assert!(!is_valid_mark(invalid), "{:?} should be invalid", invalid);
        }
    }
}
