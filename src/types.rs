//! various types that are useful for working with life boards
use crate::error::BoardError;
use itertools::{iproduct, Itertools};

/// the largest row count any board representation accepts
pub const MAX_ROWS: usize = 32;
/// the largest column count any board representation accepts
pub const MAX_COLUMNS: usize = 32;

/// returns true for the characters that mark a live cell in a seed row
pub fn is_live_char(c: char) -> bool {
    c == '1' || c == 'X'
}

/// a board for which the active grid size is determinable
pub trait SizeDeterminableBoard {
    /// number of active rows, always in `1..=self.max_rows()`
    fn row_count(&self) -> usize;

    /// number of active columns, always in `1..=self.max_columns()`
    fn column_count(&self) -> usize;

    #[allow(missing_docs)]
    fn max_rows(&self) -> usize {
        MAX_ROWS
    }

    #[allow(missing_docs)]
    fn max_columns(&self) -> usize {
        MAX_COLUMNS
    }
}

/// a board that knows how many generations it has been advanced through
pub trait GenerationDeterminableBoard {
    #[allow(missing_docs)]
    fn generation_count(&self) -> u32;
}

/// a board whose cells can be read
pub trait CellQueryableBoard: SizeDeterminableBoard {
    /// returns whether the cell at `(row, col)` is alive, failing with
    /// [`BoardError::OutOfRange`] outside the active grid
    fn is_alive(&self, row: usize, col: usize) -> Result<bool, BoardError>;

    /// number of live cells on the active grid
    fn population(&self) -> usize {
        iproduct!(0..self.row_count(), 0..self.column_count())
            .filter(|&(row, col)| self.is_alive(row, col).unwrap_or(false))
            .count()
    }

    /// renders the active grid as seed rows, `1` for alive and `0` for dead.
    /// Feeding the result back through [`SeedableBoard::set_initial_cells`]
    /// reproduces the cells.
    fn to_rows(&self) -> Vec<String> {
        (0..self.row_count())
            .map(|row| {
                (0..self.column_count())
                    .map(|col| match self.is_alive(row, col) {
                        Ok(true) => '1',
                        _ => '0',
                    })
                    .collect::<String>()
            })
            .collect()
    }

    /// true when both boards have the same active size and the same cells,
    /// regardless of how either one stores them
    fn same_cells_as<O: CellQueryableBoard + ?Sized>(&self, other: &O) -> bool {
        self.row_count() == other.row_count()
            && self.column_count() == other.column_count()
            && iproduct!(0..self.row_count(), 0..self.column_count())
                .all(|(row, col)| self.is_alive(row, col).ok() == other.is_alive(row, col).ok())
    }
}

/// a board whose cells can be written
pub trait CellSettableBoard: SizeDeterminableBoard {
    /// sets the cell at `(row, col)`, failing with [`BoardError::OutOfRange`]
    /// outside the active grid
    fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> Result<(), BoardError>;
}

/// a board that can report the toroidal neighborhood of a cell
pub trait NeighborCountableBoard: SizeDeterminableBoard {
    /// number of live cells among the 8 wrapped neighbors of `(row, col)`.
    /// On boards narrower than 3 in either direction the same cell may be
    /// counted more than once.
    fn live_neighbor_count(&self, row: usize, col: usize) -> Result<u8, BoardError>;
}

/// a board that can be built from textual seed rows
pub trait SeedableBoard: CellSettableBoard + Sized {
    /// creates an all-dead board
    fn empty(row_count: usize, column_count: usize, generation_count: u32)
        -> Result<Self, BoardError>;

    /// builds a board of the minimal bounding size for `rows`, with
    /// generation 0. `1` and `X` are alive, every other character is dead,
    /// and short rows are padded with dead cells.
    fn set_initial_cells<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        if rows.is_empty() {
            return Err(BoardError::out_of_range("initialRows", 0));
        }
        let column_count = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        if column_count == 0 {
            return Err(BoardError::out_of_range("initialRows", 0));
        }
        if rows.len() > MAX_ROWS {
            return Err(BoardError::out_of_range("rowCount", rows.len()));
        }
        if column_count > MAX_COLUMNS {
            return Err(BoardError::out_of_range("columnCount", column_count));
        }

        let mut board = Self::empty(rows.len(), column_count, 0)?;
        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.as_ref().chars().enumerate() {
                board.set_alive(row, col, is_live_char(c))?;
            }
        }
        Ok(board)
    }

    /// same as [`SeedableBoard::set_initial_cells`] for any sequence of rows,
    /// e.g. the rows of a catalog pattern
    fn from_pattern<I, S>(rows: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows.into_iter().collect_vec();
        Self::set_initial_cells(&rows)
    }
}

/// a board that can be advanced by one generation
pub trait EvolvableBoard: Sized {
    /// bumps this board's generation count, then returns the next generation
    /// as a fresh board carrying the bumped count
    fn next_generation(&mut self) -> Self;
}

/// raw cell storage used by the rule engine. Callers stay inside the active
/// grid, so no bounds are checked here.
pub(crate) trait CellStorage:
    SizeDeterminableBoard + GenerationDeterminableBoard + Sized
{
    fn cell(&self, row: usize, col: usize) -> bool;

    fn put_cell(&mut self, row: usize, col: usize, alive: bool);

    /// an all-dead board with the same dimensions as `self`
    fn blank_like(&self, generation_count: u32) -> Self;

    fn bump_generation(&mut self);
}

pub(crate) fn check_dimensions(row_count: usize, column_count: usize) -> Result<(), BoardError> {
    if row_count == 0 || row_count > MAX_ROWS {
        return Err(BoardError::out_of_range("rowCount", row_count));
    }
    if column_count == 0 || column_count > MAX_COLUMNS {
        return Err(BoardError::out_of_range("columnCount", column_count));
    }
    Ok(())
}

pub(crate) fn check_coordinate<B: SizeDeterminableBoard + ?Sized>(
    board: &B,
    row: usize,
    col: usize,
) -> Result<(), BoardError> {
    if row >= board.row_count() {
        return Err(BoardError::out_of_range("row", row));
    }
    if col >= board.column_count() {
        return Err(BoardError::out_of_range("col", col));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_chars() {
        assert!(is_live_char('1'));
        assert!(is_live_char('X'));
        assert!(!is_live_char('x'));
        assert!(!is_live_char('0'));
        assert!(!is_live_char(' '));
    }

    #[test]
    fn test_check_dimensions() {
        assert!(check_dimensions(1, 1).is_ok());
        assert!(check_dimensions(MAX_ROWS, MAX_COLUMNS).is_ok());
        assert_eq!(
            check_dimensions(0, 5),
            Err(BoardError::OutOfRange {
                what: "rowCount",
                value: 0
            })
        );
        assert_eq!(
            check_dimensions(5, MAX_COLUMNS + 1),
            Err(BoardError::OutOfRange {
                what: "columnCount",
                value: 33
            })
        );
    }
}
