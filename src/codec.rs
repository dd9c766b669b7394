//! The four-field JSON record every board serializes to.
//!
//! Both representations share the same outer shape,
//! `{"rowCount":..,"columnCount":..,"generationCount":..,"cells":..}`, but the
//! `cells` payload differs: a grid of booleans for [`DenseBoard`] and one `u32`
//! word per row for [`PackedBoard`]. A record written by one representation is
//! rejected by the other's decoder.
//!
//! Decoding is strict: the input must be an object holding each of the four
//! fields exactly once, in any order, and nothing else.
//!
//! [`DenseBoard`]: crate::dense_representation::DenseBoard
//! [`PackedBoard`]: crate::packed_representation::PackedBoard
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::BoardError;
use crate::types::{MAX_COLUMNS, MAX_ROWS};

const ROW_COUNT: &str = "rowCount";
const COLUMN_COUNT: &str = "columnCount";
const GENERATION_COUNT: &str = "generationCount";
const CELLS: &str = "cells";
const FIELDS: &[&str] = &[ROW_COUNT, COLUMN_COUNT, GENERATION_COUNT, CELLS];

/// Struct that matches the serialized board object. Fields are written in
/// declaration order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardRecord<C> {
    #[allow(missing_docs)]
    pub row_count: i64,
    #[allow(missing_docs)]
    pub column_count: i64,
    #[allow(missing_docs)]
    pub generation_count: i64,
    /// representation specific cell payload
    pub cells: C,
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "camelCase")]
enum Field {
    RowCount,
    ColumnCount,
    GenerationCount,
    Cells,
}

struct RecordVisitor<C>(PhantomData<C>);

impl<'de, C: Deserialize<'de>> Visitor<'de> for RecordVisitor<C> {
    type Value = BoardRecord<C>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with rowCount, columnCount, generationCount and cells")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut row_count: Option<i64> = None;
        let mut column_count: Option<i64> = None;
        let mut generation_count: Option<i64> = None;
        let mut cells: Option<C> = None;

        while let Some(key) = map.next_key::<Field>()? {
            match key {
                Field::RowCount => {
                    if row_count.is_some() {
                        return Err(de::Error::duplicate_field(ROW_COUNT));
                    }
                    row_count = Some(map.next_value()?);
                }
                Field::ColumnCount => {
                    if column_count.is_some() {
                        return Err(de::Error::duplicate_field(COLUMN_COUNT));
                    }
                    column_count = Some(map.next_value()?);
                }
                Field::GenerationCount => {
                    if generation_count.is_some() {
                        return Err(de::Error::duplicate_field(GENERATION_COUNT));
                    }
                    generation_count = Some(map.next_value()?);
                }
                Field::Cells => {
                    if cells.is_some() {
                        return Err(de::Error::duplicate_field(CELLS));
                    }
                    cells = Some(map.next_value()?);
                }
            }
        }

        Ok(BoardRecord {
            row_count: row_count.ok_or_else(|| de::Error::missing_field(ROW_COUNT))?,
            column_count: column_count.ok_or_else(|| de::Error::missing_field(COLUMN_COUNT))?,
            generation_count: generation_count
                .ok_or_else(|| de::Error::missing_field(GENERATION_COUNT))?,
            cells: cells.ok_or_else(|| de::Error::missing_field(CELLS))?,
        })
    }
}

impl<'de, C: Deserialize<'de>> Deserialize<'de> for BoardRecord<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_struct("BoardRecord", FIELDS, RecordVisitor(PhantomData))
    }
}

impl<C> BoardRecord<C> {
    /// validates the three counts, returning `(rows, columns, generation)`
    pub fn checked_counts(&self) -> Result<(usize, usize, u32), BoardError> {
        let rows = checked_dimension(ROW_COUNT, self.row_count, MAX_ROWS)?;
        let columns = checked_dimension(COLUMN_COUNT, self.column_count, MAX_COLUMNS)?;
        let generation = u32::try_from(self.generation_count).map_err(|_| BoardError::OutOfRange {
            what: GENERATION_COUNT,
            value: self.generation_count,
        })?;
        Ok((rows, columns, generation))
    }
}

fn checked_dimension(what: &'static str, value: i64, max: usize) -> Result<usize, BoardError> {
    match usize::try_from(value) {
        Ok(v) if v > 0 && v <= max => Ok(v),
        _ => Err(BoardError::OutOfRange { what, value }),
    }
}

/// A board that maps to and from a [`BoardRecord`]
pub trait BoardCodec: Sized {
    /// the shape of the `cells` field for this representation
    type Cells: Serialize + DeserializeOwned;

    #[allow(missing_docs)]
    fn to_record(&self) -> BoardRecord<Self::Cells>;

    /// builds a board from a decoded record, failing with
    /// [`BoardError::OutOfRange`] when a count violates the board bounds
    fn from_record(record: BoardRecord<Self::Cells>) -> Result<Self, BoardError>;
}

/// serializes a board as a JSON record
pub fn encode<B: BoardCodec>(board: &B) -> Result<String, BoardError> {
    Ok(serde_json::to_string(&board.to_record())?)
}

/// parses a JSON record into a board. Shape errors are
/// [`BoardError::MalformedRecord`], bound violations are
/// [`BoardError::OutOfRange`].
pub fn decode<B: BoardCodec>(json: &str) -> Result<B, BoardError> {
    let record: BoardRecord<B::Cells> = serde_json::from_str(json)?;
    B::from_record(record)
}

/// like [`decode`] but a JSON `null` yields `Ok(None)`
pub fn decode_optional<B: BoardCodec>(json: &str) -> Result<Option<B>, BoardError> {
    let record: Option<BoardRecord<B::Cells>> = serde_json::from_str(json)?;
    record.map(B::from_record).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    type PackedRecord = BoardRecord<Vec<u32>>;
    type DenseRecord = BoardRecord<Vec<Vec<bool>>>;

    fn malformed(json: &str) -> bool {
        serde_json::from_str::<PackedRecord>(json).is_err()
    }

    #[test]
    fn test_fields_written_in_order() {
        let record = DenseRecord {
            row_count: 1,
            column_count: 2,
            generation_count: 7,
            cells: vec![vec![true, false]],
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"rowCount":1,"columnCount":2,"generationCount":7,"cells":[[true,false]]}"#
        );
    }

    #[test]
    fn test_fields_in_any_order() {
        let record: PackedRecord = serde_json::from_str(
            r#"{"cells":[4,4,4],"generationCount":3,"columnCount":3,"rowCount":3}"#,
        )
        .unwrap();
        assert_eq!(record.row_count, 3);
        assert_eq!(record.column_count, 3);
        assert_eq!(record.generation_count, 3);
        assert_eq!(record.cells, vec![4, 4, 4]);
    }

    #[test]
    fn test_rejects_bad_shapes() {
        // missing cells
        assert!(malformed(r#"{"rowCount":1,"columnCount":1,"generationCount":0}"#));
        // duplicate rowCount
        assert!(malformed(
            r#"{"rowCount":1,"rowCount":1,"columnCount":1,"generationCount":0,"cells":[]}"#
        ));
        // unknown field
        assert!(malformed(
            r#"{"rowCount":1,"columnCount":1,"generationCount":0,"cells":[],"extra":1}"#
        ));
        // not an object
        assert!(malformed(r#"[1,1,0,[]]"#));
        assert!(malformed(r#"5"#));
        // trailing garbage after the closing brace
        assert!(malformed(
            r#"{"rowCount":1,"columnCount":1,"generationCount":0,"cells":[]} {"#
        ));
        // no coercion from floats or strings
        assert!(malformed(
            r#"{"rowCount":1.5,"columnCount":1,"generationCount":0,"cells":[]}"#
        ));
        assert!(malformed(
            r#"{"rowCount":"1","columnCount":1,"generationCount":0,"cells":[]}"#
        ));
        // field names are case sensitive
        assert!(malformed(
            r#"{"RowCount":1,"columnCount":1,"generationCount":0,"cells":[]}"#
        ));
    }

    #[test]
    fn test_cell_shapes_are_not_interchangeable() {
        let packed_json = r#"{"rowCount":1,"columnCount":2,"generationCount":0,"cells":[1]}"#;
        let dense_json =
            r#"{"rowCount":1,"columnCount":2,"generationCount":0,"cells":[[true,false]]}"#;
        assert!(serde_json::from_str::<DenseRecord>(packed_json).is_err());
        assert!(serde_json::from_str::<PackedRecord>(dense_json).is_err());
        assert!(serde_json::from_str::<DenseRecord>(dense_json).is_ok());
        assert!(serde_json::from_str::<PackedRecord>(packed_json).is_ok());
    }

    #[test]
    fn test_checked_counts() {
        let mut record = PackedRecord {
            row_count: 32,
            column_count: 32,
            generation_count: 9,
            cells: vec![],
        };
        assert_eq!(record.checked_counts(), Ok((32, 32, 9)));

        record.row_count = 33;
        assert_eq!(
            record.checked_counts(),
            Err(BoardError::OutOfRange {
                what: "rowCount",
                value: 33
            })
        );

        record.row_count = 1;
        record.column_count = -4;
        assert_eq!(
            record.checked_counts(),
            Err(BoardError::OutOfRange {
                what: "columnCount",
                value: -4
            })
        );

        record.column_count = 1;
        record.generation_count = -1;
        assert_eq!(
            record.checked_counts(),
            Err(BoardError::OutOfRange {
                what: "generationCount",
                value: -1
            })
        );
    }
}
