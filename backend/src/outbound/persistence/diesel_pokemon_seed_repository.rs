//! Diesel-backed seed repository adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::NewPokemon;
use crate::domain::ports::{PokemonSeedRepository, PokemonStoreError};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::NewPokemonRow;
use super::pool::DbPool;
use super::schema::pokemons;

/// Diesel-backed implementation of the seeding write port.
#[derive(Clone)]
pub struct DieselPokemonSeedRepository {
    pool: DbPool,
}

impl DieselPokemonSeedRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PokemonSeedRepository for DieselPokemonSeedRepository {
    async fn exists_by_name(&self, name: &str) -> Result<bool, PokemonStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            pokemons::table.filter(pokemons::name.eq(name)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, "pokemon existence check"))
    }

    async fn insert_batch(&self, records: Vec<NewPokemon>) -> Result<usize, PokemonStoreError> {
        if records.is_empty() {
            return Ok(0);
        }

        let rows: Vec<NewPokemonRow<'_>> = records.iter().map(NewPokemonRow::from).collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(pokemons::table)
            .values(&rows)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "pokemon batch insert"))
    }
}
