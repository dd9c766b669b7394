//! A compact board representation storing each row as the bits of a `u32`
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{BoardCodec, BoardRecord};
use crate::dense_representation::DenseBoard;
use crate::error::BoardError;
use crate::types::{
    check_dimensions, CellQueryableBoard, CellStorage, GenerationDeterminableBoard,
    SizeDeterminableBoard, MAX_ROWS,
};

mod cell_queryable;
mod cell_settable;
mod evolvable;
mod size_determinable;

/// A board holding one word per row, bit `col` of word `row` being the cell.
///
/// Storage is always [`MAX_ROWS`] words whatever the active row count, and
/// serializes as all of them. Bits outside the active grid ride along
/// untouched but are never read as cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PackedBoard {
    row_count: usize,
    column_count: usize,
    generation_count: u32,
    cells: [u32; MAX_ROWS],
}

fn bit(col: usize) -> u32 {
    1u32 << col
}

impl PackedBoard {
    /// Builds a board of the given size. Supplied words are copied up to
    /// [`MAX_ROWS`]; missing words are dead, extra words are dropped.
    pub fn new(
        row_count: usize,
        column_count: usize,
        generation_count: u32,
        cells: Option<&[u32]>,
    ) -> Result<Self, BoardError> {
        check_dimensions(row_count, column_count)?;
        let mut board = Self::blank(row_count, column_count, generation_count);
        if let Some(words) = cells {
            for (dst, src) in board.cells.iter_mut().zip(words) {
                *dst = *src;
            }
        }
        Ok(board)
    }

    pub(crate) fn blank(row_count: usize, column_count: usize, generation_count: u32) -> Self {
        PackedBoard {
            row_count,
            column_count,
            generation_count,
            cells: [0; MAX_ROWS],
        }
    }

    /// the raw row words, including rows beyond the active row count
    pub fn words(&self) -> &[u32; MAX_ROWS] {
        &self.cells
    }
}

impl CellStorage for PackedBoard {
    fn cell(&self, row: usize, col: usize) -> bool {
        self.cells[row] & bit(col) != 0
    }

    fn put_cell(&mut self, row: usize, col: usize, alive: bool) {
        if alive {
            self.cells[row] |= bit(col);
        } else {
            self.cells[row] &= !bit(col);
        }
    }

    fn blank_like(&self, generation_count: u32) -> Self {
        Self::blank(self.row_count, self.column_count, generation_count)
    }

    fn bump_generation(&mut self) {
        self.generation_count = self.generation_count.saturating_add(1);
    }
}

impl From<&DenseBoard> for PackedBoard {
    fn from(dense: &DenseBoard) -> Self {
        let mut packed = Self::blank(
            dense.row_count(),
            dense.column_count(),
            dense.generation_count(),
        );
        for (row, col) in dense.live_cells() {
            packed.put_cell(row, col, true);
        }
        packed
    }
}

impl BoardCodec for PackedBoard {
    type Cells = Vec<u32>;

    fn to_record(&self) -> BoardRecord<Vec<u32>> {
        BoardRecord {
            row_count: self.row_count as i64,
            column_count: self.column_count as i64,
            generation_count: self.generation_count as i64,
            cells: self.cells.to_vec(),
        }
    }

    fn from_record(record: BoardRecord<Vec<u32>>) -> Result<Self, BoardError> {
        let (rows, columns, generation) = record.checked_counts()?;
        Self::new(rows, columns, generation, Some(record.cells.as_slice()))
    }
}

impl Serialize for PackedBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PackedBoard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = BoardRecord::<Vec<u32>>::deserialize(deserializer)?;
        Self::from_record(record).map_err(D::Error::custom)
    }
}

impl fmt::Display for PackedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for line in self.to_rows() {
            writeln!(f, "{}", line)?;
        }
        write!(f, "(generation: {})", self.generation_count)
    }
}
