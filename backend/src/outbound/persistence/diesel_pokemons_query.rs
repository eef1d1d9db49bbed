//! Diesel-backed listing adapter.
//!
//! Assembles the SQL a [`ListingSelection`] describes: an ILIKE substring
//! match on the name, inclusive range bounds on the numeric attributes,
//! a match count taken before ordering and pagination, then the ordered
//! page window. Range bounds compare under SQL ternary logic, so rows with
//! an absent attribute never satisfy a present bound.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PokemonPage, PokemonsQuery, map_store_error};
use crate::domain::{Error, ListingSelection, Pokemon, SortColumn, SortOrder};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::PokemonRow;
use super::pool::DbPool;
use super::schema::pokemons;

type BoxedListing = pokemons::BoxedQuery<'static, diesel::pg::Pg>;

/// Diesel-backed implementation of the catalogue read port.
#[derive(Clone)]
pub struct DieselPokemonsQuery {
    pool: DbPool,
}

impl DieselPokemonsQuery {
    /// Create a new query adapter with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Apply the selection's filters to a fresh query.
///
/// Boxed queries cannot be cloned, so this is called once for the count and
/// once for the page fetch; both must see identical predicates.
fn filtered(selection: &ListingSelection) -> BoxedListing {
    let mut query = pokemons::table.into_boxed();

    if let Some(term) = selection.search() {
        query = query.filter(pokemons::name.ilike(format!("%{term}%")));
    }

    let bounds = selection.base_experience();
    if let Some(min) = bounds.min {
        query = query.filter(pokemons::base_experience.ge(min));
    }
    if let Some(max) = bounds.max {
        query = query.filter(pokemons::base_experience.le(max));
    }

    let bounds = selection.height();
    if let Some(min) = bounds.min {
        query = query.filter(pokemons::height.ge(min));
    }
    if let Some(max) = bounds.max {
        query = query.filter(pokemons::height.le(max));
    }

    let bounds = selection.weight();
    if let Some(min) = bounds.min {
        query = query.filter(pokemons::weight.ge(min));
    }
    if let Some(max) = bounds.max {
        query = query.filter(pokemons::weight.le(max));
    }

    query
}

/// Order the query by the validated sort column and direction.
fn ordered(query: BoxedListing, sort: SortColumn, order: SortOrder) -> BoxedListing {
    match (sort, order) {
        (SortColumn::Name, SortOrder::Asc) => query.order(pokemons::name.asc()),
        (SortColumn::Name, SortOrder::Desc) => query.order(pokemons::name.desc()),
        (SortColumn::BaseExperience, SortOrder::Asc) => {
            query.order(pokemons::base_experience.asc())
        }
        (SortColumn::BaseExperience, SortOrder::Desc) => {
            query.order(pokemons::base_experience.desc())
        }
        (SortColumn::Height, SortOrder::Asc) => query.order(pokemons::height.asc()),
        (SortColumn::Height, SortOrder::Desc) => query.order(pokemons::height.desc()),
        (SortColumn::Weight, SortOrder::Asc) => query.order(pokemons::weight.asc()),
        (SortColumn::Weight, SortOrder::Desc) => query.order(pokemons::weight.desc()),
    }
}

#[async_trait]
impl PokemonsQuery for DieselPokemonsQuery {
    async fn list(&self, selection: &ListingSelection) -> Result<PokemonPage, Error> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_store_error(map_pool_error(err)))?;

        // Count before sort and pagination are applied.
        let total: i64 = filtered(selection)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_store_error(map_diesel_error(err, "pokemon listing count")))?;

        let rows: Vec<PokemonRow> = ordered(filtered(selection), selection.sort(), selection.order())
            .offset(selection.offset())
            .limit(selection.limit())
            .load(&mut conn)
            .await
            .map_err(|err| map_store_error(map_diesel_error(err, "pokemon listing page")))?;

        Ok(PokemonPage {
            records: rows.into_iter().map(Pokemon::from).collect(),
            total_items: u64::try_from(total).unwrap_or_default(),
        })
    }
}
