//! Embedded schema migrations.
//!
//! The table-creation migration is compiled into the binary and applied once
//! at startup, before seeding. `diesel-async` has no async migration
//! harness, so this runs on a synchronous connection; callers wrap it in
//! `spawn_blocking`.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::domain::ports::PokemonStoreError;

/// Migrations bundled from the crate's `migrations/` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Apply any pending migrations against the given database.
///
/// # Errors
///
/// Returns [`PokemonStoreError::Connection`] when the database cannot be
/// reached and [`PokemonStoreError::Query`] when a migration fails to apply.
pub fn run_migrations(database_url: &str) -> Result<(), PokemonStoreError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|err| PokemonStoreError::connection(err.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|err| PokemonStoreError::query(err.to_string()))
}
