//! Well known seed layouts, looked up by name without regard to case
use std::sync::OnceLock;

use fxhash::FxHashMap;

/// A named seed layout: `1` marks a live cell, `0` a dead one
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pattern {
    #[allow(missing_docs)]
    pub name: &'static str,
    #[allow(missing_docs)]
    pub rows: &'static [&'static str],
}

/// every registered pattern, in registration order
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Blank",
        rows: &["00000", "00000", "00000", "00000", "00000"],
    },
    Pattern {
        name: "Block",
        rows: &["0000", "0110", "0110", "0000"],
    },
    Pattern {
        name: "Beehive",
        rows: &["000000", "001100", "010010", "001100", "000000"],
    },
    Pattern {
        name: "Loaf",
        rows: &["000000", "001100", "010010", "001010", "000100", "000000"],
    },
    Pattern {
        name: "Boat",
        rows: &["00000", "01100", "01010", "00100", "00000"],
    },
    Pattern {
        name: "Tub",
        rows: &["00000", "00100", "01010", "00100", "00000"],
    },
    Pattern {
        name: "Blinker",
        rows: &["00000", "00100", "00100", "00100", "00000"],
    },
    Pattern {
        name: "Toad",
        rows: &["000000", "000000", "001110", "011100", "000000", "000000"],
    },
    Pattern {
        name: "Beacon",
        rows: &["000000", "011000", "011000", "000110", "000110", "000000"],
    },
    Pattern {
        name: "Pulsar",
        rows: &[
            "00000000000000000",
            "00000100000100000",
            "00000100000100000",
            "00000110001100000",
            "00000000000000000",
            "01110011011001110",
            "00010101010101000",
            "00000110001100000",
            "00000000000000000",
            "00000110001100000",
            "00010101010101000",
            "01110011011001110",
            "00000000000000000",
            "00000110001100000",
            "00000100000100000",
            "00000100000100000",
            "00000000000000000",
        ],
    },
    Pattern {
        name: "Pentadecathlon",
        rows: &[
            "00000000000",
            "00000000000",
            "00000000000",
            "00001110000",
            "00000100000",
            "00000100000",
            "00001110000",
            "00000000000",
            "00001110000",
            "00001110000",
            "00000000000",
            "00001110000",
            "00000100000",
            "00000100000",
            "00001110000",
            "00000000000",
            "00000000000",
            "00000000000",
        ],
    },
    Pattern {
        name: "Glider",
        rows: &[
            "0000000", "0001000", "0000100", "0011100", "0000000", "0000000",
        ],
    },
    Pattern {
        name: "LWSS",
        rows: &[
            "000000000",
            "001001000",
            "000000100",
            "001000100",
            "000111100",
            "000000000",
            "000000000",
        ],
    },
    Pattern {
        name: "MWSS",
        rows: &[
            "0000000000",
            "0000000000",
            "0000000000",
            "0001111100",
            "0010000100",
            "0000000100",
            "0010001000",
            "0000100000",
            "0000000000",
        ],
    },
    Pattern {
        name: "HWSS",
        rows: &[
            "00000000000",
            "00000000000",
            "00000000000",
            "00011111100",
            "00100000100",
            "00000000100",
            "00100001000",
            "00001100000",
            "00000000000",
        ],
    },
];

/// Read only index over [`PATTERNS`], keyed by lower cased name
#[derive(Debug)]
pub struct PatternCatalog {
    by_name: FxHashMap<String, Pattern>,
}

impl PatternCatalog {
    fn build(patterns: &[Pattern]) -> Self {
        let by_name = patterns
            .iter()
            .map(|p| (p.name.to_lowercase(), *p))
            .collect();
        PatternCatalog { by_name }
    }

    /// Rows of the pattern registered under `name`, compared case
    /// insensitively. Unknown names yield `None`.
    pub fn get(&self, name: &str) -> Option<&'static [&'static str]> {
        self.by_name.get(&name.to_lowercase()).map(|p| p.rows)
    }

    /// registered display names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        PATTERNS.iter().map(|p| p.name)
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// the process wide catalog, built on first use
pub fn catalog() -> &'static PatternCatalog {
    static CATALOG: OnceLock<PatternCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| PatternCatalog::build(PATTERNS))
}

/// shorthand for `catalog().get(name)`
pub fn get_pattern(name: &str) -> Option<&'static [&'static str]> {
    catalog().get(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense_representation::DenseBoard;
    use crate::packed_representation::PackedBoard;
    use crate::types::{
        CellQueryableBoard, EvolvableBoard, GenerationDeterminableBoard, SeedableBoard,
        SizeDeterminableBoard,
    };

    #[test]
    fn test_lookup_ignores_case() {
        let rows = get_pattern("glider").unwrap();
        assert_eq!(get_pattern("GLIDER"), Some(rows));
        assert_eq!(get_pattern("GlIdEr"), Some(rows));
        assert_eq!(rows.len(), 6);
        assert_eq!(get_pattern("lwss"), get_pattern("LWSS"));
    }

    #[test]
    fn test_miss_is_none() {
        assert!(get_pattern("gosper glider gun").is_none());
        assert!(get_pattern("glide").is_none());
        assert!(get_pattern("").is_none());
        assert!(get_pattern(" glider").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        assert_eq!(catalog().len(), PATTERNS.len());
        assert!(!catalog().is_empty());
        let names = catalog().names().collect::<Vec<_>>();
        assert_eq!(names.first(), Some(&"Blank"));
        assert_eq!(names.last(), Some(&"HWSS"));
    }

    #[test]
    fn test_every_pattern_seeds_both_representations() {
        for name in catalog().names() {
            let rows = get_pattern(name).unwrap();
            let dense = DenseBoard::from_pattern(rows.iter()).unwrap();
            let packed = PackedBoard::from_pattern(rows.iter()).unwrap();
            assert!(dense.same_cells_as(&packed), "{}", name);
            assert_eq!(dense.row_count(), rows.len(), "{}", name);
            assert_eq!(packed.generation_count(), 0, "{}", name);
        }
    }

    #[test]
    fn test_still_lifes_stay_put() {
        for name in ["Block", "Beehive", "Loaf", "Boat", "Tub", "Blank"] {
            let mut board =
                PackedBoard::from_pattern(get_pattern(name).unwrap().iter()).unwrap();
            let next = board.next_generation();
            assert!(next.same_cells_as(&board), "{}", name);
            assert_eq!(next.generation_count(), 1);
        }
    }

    #[test]
    fn test_oscillator_periods() {
        let oscillators = [
            ("Blinker", 2),
            ("Toad", 2),
            ("Beacon", 2),
            ("Pulsar", 3),
            ("Pentadecathlon", 15),
        ];
        for (name, period) in oscillators {
            let seed = DenseBoard::from_pattern(get_pattern(name).unwrap().iter()).unwrap();
            let mut board = seed.clone();
            for step in 1..=period {
                board = board.next_generation();
                assert_eq!(
                    step == period,
                    board.same_cells_as(&seed),
                    "{} step {}",
                    name,
                    step
                );
            }
        }
    }

    #[test]
    fn test_glider_wraps_around() {
        let seed = PackedBoard::from_pattern(get_pattern("Glider").unwrap().iter()).unwrap();
        let mut board = seed;
        // a glider moves one cell diagonally every 4 generations; on a 6x7
        // torus it is back home after lcm(6, 7) * 4 generations
        for _ in 0..6 * 7 * 4 {
            board = board.next_generation();
        }
        assert!(board.same_cells_as(&seed));
        assert_eq!(board.population(), 5);
    }
}
