//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain store ports backed by PostgreSQL
//! via Diesel with async support through `diesel-async` and `bb8` connection
//! pooling.
//!
//! Repository implementations only translate between Diesel row structs and
//! domain types; no listing or seeding logic lives here beyond assembling
//! the SQL the selection describes. Row structs (`models.rs`) and the table
//! definition (`schema.rs`) are internal implementation details, never
//! exposed to the domain layer.

pub(crate) mod diesel_helpers;
mod diesel_pokemon_seed_repository;
mod diesel_pokemons_query;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_pokemon_seed_repository::DieselPokemonSeedRepository;
pub use diesel_pokemons_query::DieselPokemonsQuery;
pub use migrations::run_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
