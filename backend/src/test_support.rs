//! In-memory store double for tests.
//!
//! Implements both catalogue ports with the same observable semantics as the
//! PostgreSQL adapters: case-insensitive substring search that never matches
//! an absent name, ternary-logic range bounds, NULLS LAST ascending and
//! NULLS FIRST descending ordering, and an offset/limit page window applied
//! after counting. Integration tests exercise the HTTP surface against this
//! store without a database.

use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{PokemonPage, PokemonSeedRepository, PokemonStoreError, PokemonsQuery};
use crate::domain::{Error, ListingSelection, NewPokemon, Pokemon, SortColumn, SortOrder};

struct Inner {
    records: Vec<Pokemon>,
    next_id: i32,
}

/// In-memory implementation of the catalogue read and seed ports.
pub struct InMemoryPokemonStore {
    inner: Mutex<Inner>,
}

impl Default for InMemoryPokemonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPokemonStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with the given records.
    pub fn with_records(records: Vec<Pokemon>) -> Self {
        let next_id = records.iter().map(|record| record.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner { records, next_id }),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("store lock poisoned")
    }
}

fn matches_search(record: &Pokemon, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };
    // NULL ILIKE anything is NULL, which filters the row out.
    record
        .name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(&term.to_lowercase()))
}

fn matches_filters(record: &Pokemon, selection: &ListingSelection) -> bool {
    matches_search(record, selection.search())
        && selection.base_experience().matches(record.base_experience)
        && selection.height().matches(record.height)
        && selection.weight().matches(record.weight)
}

/// Ascending comparison with NULLS LAST, matching PostgreSQL's default.
fn cmp_nulls_last<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_by_column(a: &Pokemon, b: &Pokemon, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Name => cmp_nulls_last(a.name.as_ref(), b.name.as_ref()),
        SortColumn::BaseExperience => {
            cmp_nulls_last(a.base_experience.as_ref(), b.base_experience.as_ref())
        }
        SortColumn::Height => cmp_nulls_last(a.height.as_ref(), b.height.as_ref()),
        SortColumn::Weight => cmp_nulls_last(a.weight.as_ref(), b.weight.as_ref()),
    }
}

#[async_trait]
impl PokemonsQuery for InMemoryPokemonStore {
    async fn list(&self, selection: &ListingSelection) -> Result<PokemonPage, Error> {
        let mut matched: Vec<Pokemon> = self
            .lock()
            .records
            .iter()
            .filter(|record| matches_filters(record, selection))
            .cloned()
            .collect();

        // Count before ordering and windowing, like the SQL adapter.
        let total_items = matched.len() as u64;

        matched.sort_by(|a, b| {
            let ordering = cmp_by_column(a, b, selection.sort());
            match selection.order() {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let offset = usize::try_from(selection.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(selection.limit()).unwrap_or(usize::MAX);
        let records = matched.into_iter().skip(offset).take(limit).collect();

        Ok(PokemonPage {
            records,
            total_items,
        })
    }
}

#[async_trait]
impl PokemonSeedRepository for InMemoryPokemonStore {
    async fn exists_by_name(&self, name: &str) -> Result<bool, PokemonStoreError> {
        Ok(self
            .lock()
            .records
            .iter()
            .any(|record| record.name.as_deref() == Some(name)))
    }

    async fn insert_batch(&self, records: Vec<NewPokemon>) -> Result<usize, PokemonStoreError> {
        let mut inner = self.lock();
        let inserted = records.len();
        for record in records {
            let id = inner.next_id;
            inner.next_id += 1;
            inner.records.push(Pokemon {
                id,
                name: record.name,
                base_experience: record.base_experience,
                height: record.height,
                weight: record.weight,
                image_url: record.image_url,
            });
        }
        Ok(inserted)
    }
}
