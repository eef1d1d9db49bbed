//! Domain primitives and services.
//!
//! Purpose: define the strongly typed listing specification, the catalogue
//! record entity, the seeding service, and the ports they speak through.
//! Types here are transport agnostic; inbound adapters map them onto HTTP
//! and outbound adapters onto the database.

pub mod error;
pub mod listing;
pub mod pokemon;
pub mod ports;
pub mod seeding;

pub use self::error::{Error, ErrorCode};
pub use self::listing::{ListingParams, ListingSelection, PageMetadata, SortColumn, SortOrder};
pub use self::pokemon::{NewPokemon, Pokemon};
pub use self::seeding::{CatalogueSeeder, SeedOutcome};
