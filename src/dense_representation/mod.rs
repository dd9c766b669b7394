//! the straightforward board representation, one `bool` per cell
use std::fmt;

use itertools::iproduct;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{BoardCodec, BoardRecord};
use crate::error::BoardError;
use crate::packed_representation::PackedBoard;
use crate::rules;
use crate::types::{
    check_coordinate, check_dimensions, CellQueryableBoard, CellSettableBoard, CellStorage,
    EvolvableBoard, GenerationDeterminableBoard, NeighborCountableBoard, SeedableBoard,
    SizeDeterminableBoard,
};

/// Board storing `row_count` rows of `column_count` booleans each.
///
/// Serializes with `cells` as a rectangular grid of booleans, so its records
/// are not accepted by [`PackedBoard`] and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseBoard {
    row_count: usize,
    column_count: usize,
    generation_count: u32,
    cells: Vec<Vec<bool>>,
}

impl DenseBoard {
    /// Builds a board of the given size. When `cells` is supplied it is
    /// copied over the overlapping rows and columns only, everything else is
    /// dead.
    pub fn new(
        row_count: usize,
        column_count: usize,
        generation_count: u32,
        cells: Option<&[Vec<bool>]>,
    ) -> Result<Self, BoardError> {
        check_dimensions(row_count, column_count)?;
        let mut board = Self::blank(row_count, column_count, generation_count);
        if let Some(source) = cells {
            for (dst_row, src_row) in board.cells.iter_mut().zip(source) {
                for (dst, src) in dst_row.iter_mut().zip(src_row) {
                    *dst = *src;
                }
            }
        }
        Ok(board)
    }

    pub(crate) fn blank(row_count: usize, column_count: usize, generation_count: u32) -> Self {
        DenseBoard {
            row_count,
            column_count,
            generation_count,
            cells: vec![vec![false; column_count]; row_count],
        }
    }

    /// iterates the coordinates of every live cell in row major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        iproduct!(0..self.row_count, 0..self.column_count)
            .filter(move |&(row, col)| self.cells[row][col])
    }
}

impl SizeDeterminableBoard for DenseBoard {
    fn row_count(&self) -> usize {
        self.row_count
    }

    fn column_count(&self) -> usize {
        self.column_count
    }
}

impl GenerationDeterminableBoard for DenseBoard {
    fn generation_count(&self) -> u32 {
        self.generation_count
    }
}

impl CellStorage for DenseBoard {
    fn cell(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    fn put_cell(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row][col] = alive;
    }

    fn blank_like(&self, generation_count: u32) -> Self {
        Self::blank(self.row_count, self.column_count, generation_count)
    }

    fn bump_generation(&mut self) {
        self.generation_count = self.generation_count.saturating_add(1);
    }
}

impl CellQueryableBoard for DenseBoard {
    fn is_alive(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        check_coordinate(self, row, col)?;
        Ok(self.cells[row][col])
    }
}

impl CellSettableBoard for DenseBoard {
    fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> Result<(), BoardError> {
        check_coordinate(self, row, col)?;
        self.cells[row][col] = alive;
        Ok(())
    }
}

impl NeighborCountableBoard for DenseBoard {
    fn live_neighbor_count(&self, row: usize, col: usize) -> Result<u8, BoardError> {
        check_coordinate(self, row, col)?;
        Ok(rules::live_neighbors(self, row, col))
    }
}

impl SeedableBoard for DenseBoard {
    fn empty(
        row_count: usize,
        column_count: usize,
        generation_count: u32,
    ) -> Result<Self, BoardError> {
        DenseBoard::new(row_count, column_count, generation_count, None)
    }
}

impl EvolvableBoard for DenseBoard {
    fn next_generation(&mut self) -> Self {
        rules::evolve(self)
    }
}

impl From<&PackedBoard> for DenseBoard {
    fn from(packed: &PackedBoard) -> Self {
        let mut dense = Self::blank(
            packed.row_count(),
            packed.column_count(),
            packed.generation_count(),
        );
        for (row, col) in iproduct!(0..dense.row_count, 0..dense.column_count) {
            dense.cells[row][col] = packed.cell(row, col);
        }
        dense
    }
}

impl BoardCodec for DenseBoard {
    type Cells = Vec<Vec<bool>>;

    fn to_record(&self) -> BoardRecord<Vec<Vec<bool>>> {
        BoardRecord {
            row_count: self.row_count as i64,
            column_count: self.column_count as i64,
            generation_count: self.generation_count as i64,
            cells: self.cells.clone(),
        }
    }

    fn from_record(record: BoardRecord<Vec<Vec<bool>>>) -> Result<Self, BoardError> {
        let (rows, columns, generation) = record.checked_counts()?;
        Self::new(rows, columns, generation, Some(record.cells.as_slice()))
    }
}

impl Serialize for DenseBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DenseBoard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = BoardRecord::<Vec<Vec<bool>>>::deserialize(deserializer)?;
        Self::from_record(record).map_err(D::Error::custom)
    }
}

impl fmt::Display for DenseBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in self.cells.iter() {
            for alive in row.iter() {
                write!(f, "{}", if *alive { '1' } else { '0' })?;
            }
            writeln!(f)?;
        }
        write!(f, "(generation: {})", self.generation_count)
    }
}
