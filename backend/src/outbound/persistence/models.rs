//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use crate::domain::{NewPokemon, Pokemon};

use super::schema::pokemons;

/// Row struct for reading from the pokemons table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pokemons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PokemonRow {
    pub id: i32,
    pub name: Option<String>,
    pub base_experience: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub image_url: Option<String>,
}

impl From<PokemonRow> for Pokemon {
    fn from(row: PokemonRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            base_experience: row.base_experience,
            height: row.height,
            weight: row.weight,
            image_url: row.image_url,
        }
    }
}

/// Insertable struct for creating new records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pokemons)]
pub(crate) struct NewPokemonRow<'a> {
    pub name: Option<&'a str>,
    pub base_experience: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub image_url: Option<&'a str>,
}

impl<'a> From<&'a NewPokemon> for NewPokemonRow<'a> {
    fn from(record: &'a NewPokemon) -> Self {
        Self {
            name: record.name.as_deref(),
            base_experience: record.base_experience,
            height: record.height,
            weight: record.weight,
            image_url: record.image_url.as_deref(),
        }
    }
}
