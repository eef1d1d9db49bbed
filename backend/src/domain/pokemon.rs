//! The catalogue record entity.

use serde::Serialize;

/// One catalogued Pokémon.
///
/// Every attribute except the surrogate key is optional: the seed source
/// leaves cells empty, and the loader stores "absent" rather than zero.
/// Records are created by the seeder at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pokemon {
    /// Auto-assigned surrogate key, immutable.
    pub id: i32,
    /// Display name; also the loader's dedup key.
    pub name: Option<String>,
    /// Base experience points.
    pub base_experience: Option<i32>,
    /// Height.
    pub height: Option<i32>,
    /// Weight.
    pub weight: Option<i32>,
    /// Image URL, stored as provided by the seed source.
    pub image_url: Option<String>,
}

/// Payload for inserting a new record; the store assigns the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPokemon {
    /// Display name.
    pub name: Option<String>,
    /// Base experience points.
    pub base_experience: Option<i32>,
    /// Height.
    pub height: Option<i32>,
    /// Weight.
    pub weight: Option<i32>,
    /// Image URL, stored as provided.
    pub image_url: Option<String>,
}
