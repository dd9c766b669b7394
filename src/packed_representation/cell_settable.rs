use crate::{
    error::BoardError,
    types::{check_coordinate, CellSettableBoard, CellStorage, SeedableBoard},
};

use super::PackedBoard;

impl CellSettableBoard for PackedBoard {
    fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> Result<(), BoardError> {
        check_coordinate(self, row, col)?;
        self.put_cell(row, col, alive);
        Ok(())
    }
}

impl SeedableBoard for PackedBoard {
    fn empty(
        row_count: usize,
        column_count: usize,
        generation_count: u32,
    ) -> Result<Self, BoardError> {
        PackedBoard::new(row_count, column_count, generation_count, None)
    }
}
