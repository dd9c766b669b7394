//! Transport agnostic handlers for the two board endpoints: fetch a named
//! pattern, and post a board to get its next generation back.
//!
//! An HTTP layer maps [`ServiceError::status_code`] onto its responses.
use std::marker::PhantomData;

use thiserror::Error;
use tracing::{debug, warn};

use crate::codec::{decode_optional, encode, BoardCodec};
use crate::error::BoardError;
use crate::packed_representation::PackedBoard;
use crate::patterns::{catalog, PatternCatalog};
use crate::rules;
use crate::types::{EvolvableBoard, SeedableBoard};

/// Outcomes other than success
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// no pattern is registered under the requested name
    #[error("no pattern named {0:?}")]
    NotFound(String),

    /// the request could not be turned into a valid board
    #[error("bad request: {0}")]
    BadRequest(#[from] BoardError),
}

impl ServiceError {
    /// HTTP status for this outcome
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::BadRequest(_) => 400,
        }
    }
}

/// Serves boards of representation `B`, packed unless told otherwise.
#[derive(Debug)]
pub struct LifeService<B = PackedBoard> {
    catalog: &'static PatternCatalog,
    board: PhantomData<fn() -> B>,
}

impl<B> Default for LifeService<B>
where
    B: SeedableBoard + EvolvableBoard + BoardCodec,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<B> LifeService<B>
where
    B: SeedableBoard + EvolvableBoard + BoardCodec,
{
    #[allow(missing_docs)]
    pub fn new() -> Self {
        LifeService {
            catalog: catalog(),
            board: PhantomData,
        }
    }

    /// seeds a fresh board from the catalog pattern called `name`
    pub fn get_pattern(&self, name: &str) -> Result<B, ServiceError> {
        let rows = match self.catalog.get(name) {
            Some(rows) => rows,
            None => {
                debug!(pattern = name, "pattern not found");
                return Err(ServiceError::NotFound(name.to_string()));
            }
        };
        B::from_pattern(rows.iter()).map_err(|e| {
            warn!(pattern = name, error = %e, "pattern did not seed a board");
            ServiceError::BadRequest(e)
        })
    }

    /// [`LifeService::get_pattern`], encoded as a board record
    pub fn get_pattern_json(&self, name: &str) -> Result<String, ServiceError> {
        let board = self.get_pattern(name)?;
        debug!(pattern = name, "serving pattern");
        Ok(encode(&board)?)
    }

    /// Decodes a board record, advances it one generation and encodes the
    /// result. A JSON `null` body is a missing board.
    pub fn next_generation_json(&self, body: &str) -> Result<String, ServiceError> {
        let mut current = decode_optional::<B>(body).map_err(|e| {
            warn!(error = %e, "rejected board record");
            ServiceError::BadRequest(e)
        })?;
        let next = rules::next_generation(current.as_mut())?;
        Ok(encode(&next)?)
    }
}
