//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the embedded migrations exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Catalogue records, written once by the startup seeder.
    ///
    /// `name` is the loader's dedup key but carries no uniqueness
    /// constraint at the store level.
    pokemons (id) {
        /// Primary key, auto-assigned by the database.
        id -> Int4,
        /// Display name.
        name -> Nullable<Varchar>,
        /// Base experience points.
        base_experience -> Nullable<Int4>,
        /// Height.
        height -> Nullable<Int4>,
        /// Weight.
        weight -> Nullable<Int4>,
        /// Image URL as provided by the seed source.
        image_url -> Nullable<Text>,
    }
}
