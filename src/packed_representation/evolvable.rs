use crate::{rules, types::EvolvableBoard};

use super::PackedBoard;

impl EvolvableBoard for PackedBoard {
    fn next_generation(&mut self) -> Self {
        rules::evolve(self)
    }
}
