//! Startup catalogue seeding.
//!
//! Converts parsed seed rows into new catalogue records and delegates
//! persistence to the seed repository port. A row is skipped when a record
//! with the same name already exists in the store, or when an earlier row in
//! the same run already queued that name; all new records are written in a
//! single batch at the end.

use std::collections::HashSet;
use std::sync::Arc;

use pokedex_data::PokemonSeed;
use tracing::info;

use super::pokemon::NewPokemon;
use super::ports::{PokemonSeedRepository, PokemonStoreError};

/// Result of one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Records written in this run.
    pub inserted: usize,
    /// Rows skipped because their name was already present.
    pub skipped: usize,
}

/// Service that applies seed rows to the store exactly once per name.
#[derive(Clone)]
pub struct CatalogueSeeder<R> {
    repository: Arc<R>,
}

impl<R> CatalogueSeeder<R> {
    /// Create a new seeder with the given persistence adapter.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> CatalogueSeeder<R>
where
    R: PokemonSeedRepository,
{
    /// Apply the given rows, skipping names that are already stored.
    ///
    /// # Errors
    ///
    /// Returns [`PokemonStoreError`] when the existence check or the batch
    /// insert fails; the run stops at the first failure.
    pub async fn seed(&self, rows: Vec<PokemonSeed>) -> Result<SeedOutcome, PokemonStoreError> {
        let mut queued_names: HashSet<String> = HashSet::new();
        let mut new_records = Vec::new();
        let mut skipped = 0usize;

        for row in rows {
            if queued_names.contains(&row.name) || self.repository.exists_by_name(&row.name).await?
            {
                skipped += 1;
                continue;
            }
            queued_names.insert(row.name.clone());
            new_records.push(NewPokemon {
                name: Some(row.name),
                base_experience: row.base_experience,
                height: row.height,
                weight: row.weight,
                image_url: Some(row.image_url),
            });
        }

        let inserted = if new_records.is_empty() {
            0
        } else {
            self.repository.insert_batch(new_records).await?
        };

        info!(inserted, skipped, "catalogue seeding finished");
        Ok(SeedOutcome { inserted, skipped })
    }
}
