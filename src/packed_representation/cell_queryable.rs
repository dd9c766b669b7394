use crate::{
    error::BoardError,
    rules,
    types::{check_coordinate, CellQueryableBoard, CellStorage, NeighborCountableBoard},
};

use super::PackedBoard;

impl CellQueryableBoard for PackedBoard {
    fn is_alive(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        check_coordinate(self, row, col)?;
        Ok(self.cell(row, col))
    }

    fn population(&self) -> usize {
        self.cells[..self.row_count]
            .iter()
            .map(|word| (word & active_mask(self.column_count)).count_ones() as usize)
            .sum()
    }
}

impl NeighborCountableBoard for PackedBoard {
    fn live_neighbor_count(&self, row: usize, col: usize) -> Result<u8, BoardError> {
        check_coordinate(self, row, col)?;
        Ok(rules::live_neighbors(self, row, col))
    }
}

fn active_mask(column_count: usize) -> u32 {
    u32::MAX.checked_shr(32 - column_count as u32).unwrap_or(0)
}
