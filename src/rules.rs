//! The B3/S23 rule on a toroidal grid, shared by every board representation
use itertools::iproduct;
use tracing::instrument;

use crate::error::BoardError;
use crate::types::{CellStorage, EvolvableBoard};

/// whether a cell is alive in the next generation given its current state
/// and its live neighbor count
pub fn survives(alive: bool, live_neighbors: u8) -> bool {
    if alive {
        live_neighbors == 2 || live_neighbors == 3
    } else {
        live_neighbors == 3
    }
}

/// advances `current` by one generation, failing with
/// [`BoardError::MissingInput`] when there is no board
pub fn next_generation<B: EvolvableBoard>(current: Option<&mut B>) -> Result<B, BoardError> {
    match current {
        Some(board) => Ok(board.next_generation()),
        None => Err(BoardError::MissingInput("board")),
    }
}

fn wrap_before(index: usize, len: usize) -> usize {
    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

fn wrap_after(index: usize, len: usize) -> usize {
    if index == len - 1 {
        0
    } else {
        index + 1
    }
}

pub(crate) fn live_neighbors<B: CellStorage>(board: &B, row: usize, col: usize) -> u8 {
    let rows = board.row_count();
    let cols = board.column_count();
    let prev_row = wrap_before(row, rows);
    let next_row = wrap_after(row, rows);
    let prev_col = wrap_before(col, cols);
    let next_col = wrap_after(col, cols);

    [
        (prev_row, prev_col),
        (prev_row, col),
        (prev_row, next_col),
        (row, prev_col),
        (row, next_col),
        (next_row, prev_col),
        (next_row, col),
        (next_row, next_col),
    ]
    .iter()
    .filter(|&&(r, c)| board.cell(r, c))
    .count() as u8
}

#[instrument(
    level = "trace",
    skip_all,
    fields(
        rows = current.row_count(),
        columns = current.column_count(),
        generation = current.generation_count()
    )
)]
pub(crate) fn evolve<B: CellStorage>(current: &mut B) -> B {
    // the input board carries the new generation number too
    current.bump_generation();
    let mut next = current.blank_like(current.generation_count());

    for (row, col) in iproduct!(0..current.row_count(), 0..current.column_count()) {
        let neighbors = live_neighbors(current, row, col);
        next.put_cell(row, col, survives(current.cell(row, col), neighbors));
    }
    next
}
