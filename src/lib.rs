#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Types for running [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! on a small bounded torus.
//!
//! Two board representations share one set of capability traits (see [`types`]):
//! [`dense_representation::DenseBoard`] keeps a `bool` per cell, and
//! [`packed_representation::PackedBoard`] keeps each row in the bits of a `u32`.
//! Both are capped at 32x32, advance with the same B3/S23 rule in [`rules`], and
//! produce identical cells for identical input. They serialize to the same four
//! field JSON record ([`codec`]) but with different `cells` payloads.
//!
//! ```
//! use life_board_types::packed_representation::PackedBoard;
//! use life_board_types::patterns::get_pattern;
//! use life_board_types::types::{EvolvableBoard, SeedableBoard};
//!
//! let rows = get_pattern("blinker").expect("blinker is registered");
//! let mut board = PackedBoard::from_pattern(rows.iter()).unwrap();
//! let next = board.next_generation();
//! let json = life_board_types::codec::encode(&next).unwrap();
//! assert!(json.starts_with(r#"{"rowCount":5,"columnCount":5,"generationCount":1,"#));
//! ```

use packed_representation::PackedBoard;

pub mod codec;
pub mod config;
pub mod dense_representation;
pub mod error;
pub mod packed_representation;
pub mod patterns;
pub mod rules;
pub mod service;
pub mod types;

/// Loads a fixture from a given string
pub fn board_fixture(board_fixture: &str) -> PackedBoard {
    let b: Result<PackedBoard, _> = serde_json::from_str(board_fixture);
    b.expect("the json literal is valid")
}
