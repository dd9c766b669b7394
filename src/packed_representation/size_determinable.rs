use crate::types::{GenerationDeterminableBoard, SizeDeterminableBoard};

use super::PackedBoard;

impl SizeDeterminableBoard for PackedBoard {
    fn row_count(&self) -> usize {
        self.row_count
    }

    fn column_count(&self) -> usize {
        self.column_count
    }
}

impl GenerationDeterminableBoard for PackedBoard {
    fn generation_count(&self) -> u32 {
        self.generation_count
    }
}
