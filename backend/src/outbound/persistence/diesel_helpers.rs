//! Shared error mapping for Diesel repository implementations.

use tracing::debug;

use crate::domain::ports::PokemonStoreError;

use super::pool::PoolError;

/// Map pool errors to domain store errors.
pub(crate) fn map_pool_error(error: PoolError) -> PokemonStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            PokemonStoreError::connection(message)
        }
    }
}

/// Map a Diesel error to a domain store error, emitting debug context.
pub(crate) fn map_diesel_error(error: diesel::result::Error, operation: &str) -> PokemonStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        other => debug!(error = %other, %operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PokemonStoreError::connection("database connection error")
        }
        other => PokemonStoreError::query(other.to_string()),
    }
}
