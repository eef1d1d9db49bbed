//! Seed-row parsing for the Pokédex catalogue backend.
//!
//! Reads a delimited source file with the header fields `Name`,
//! `Base Experience`, `Height`, `Weight`, and `Image URL` into typed
//! [`PokemonSeed`] rows. The types here are deliberately independent of the
//! backend's domain layer; the backend converts rows into its own entities at
//! the point of use.
//!
//! Parsing is all-or-nothing: a malformed numeric field fails the whole read.
//! The source file is a startup-time, developer-controlled input, so there is
//! no per-row recovery.

mod error;
mod reader;
mod seed;

pub use error::SeedDataError;
pub use reader::{parse_seed_rows, read_seed_file};
pub use seed::PokemonSeed;
