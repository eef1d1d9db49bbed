//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`.

use async_trait::async_trait;
use thiserror::Error;

use super::error::Error;
use super::listing::ListingSelection;
use super::pokemon::{NewPokemon, Pokemon};

/// Errors surfaced by catalogue store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokemonStoreError {
    /// Store connection could not be established or checked out.
    #[error("pokemon store connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("pokemon store query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl PokemonStoreError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Map a store failure onto the transport-agnostic [`Error`].
///
/// Connection failures read as the service being unavailable; anything else
/// is an internal fault.
pub fn map_store_error(error: PokemonStoreError) -> Error {
    match error {
        PokemonStoreError::Connection { message } => Error::service_unavailable(message),
        PokemonStoreError::Query { message } => Error::internal(message),
    }
}

/// One page of catalogue records plus the pre-pagination match count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokemonPage {
    /// Records in the requested page window, in the requested order.
    pub records: Vec<Pokemon>,
    /// Count of records satisfying every filter, before pagination.
    pub total_items: u64,
}

/// Read side of the catalogue: execute a validated listing selection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonsQuery: Send + Sync {
    /// Execute the selection against the store.
    ///
    /// Implementations must count matches before applying the sort and page
    /// window, and must evaluate range bounds under ternary logic so records
    /// with an absent attribute never satisfy a present bound.
    async fn list(&self, selection: &ListingSelection) -> Result<PokemonPage, Error>;
}

/// Write side used by the startup seeder.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonSeedRepository: Send + Sync {
    /// True when a record with exactly this name is already stored.
    async fn exists_by_name(&self, name: &str) -> Result<bool, PokemonStoreError>;

    /// Insert all records in one batch, returning how many were written.
    async fn insert_batch(&self, records: Vec<NewPokemon>) -> Result<usize, PokemonStoreError>;
}

/// Fixture query returning an empty catalogue; used by handler tests.
pub struct FixturePokemonsQuery;

#[async_trait]
impl PokemonsQuery for FixturePokemonsQuery {
    async fn list(&self, _selection: &ListingSelection) -> Result<PokemonPage, Error> {
        Ok(PokemonPage::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::ErrorCode;

    use super::*;

    #[test]
    fn connection_failures_map_to_service_unavailable() {
        let err = map_store_error(PokemonStoreError::connection("pool exhausted"));
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }

    #[test]
    fn query_failures_map_to_internal_error() {
        let err = map_store_error(PokemonStoreError::query("bad relation"));
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
